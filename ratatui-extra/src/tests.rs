mod cursor;
mod price_chart;
mod select;
mod text_popup;
