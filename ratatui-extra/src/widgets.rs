pub mod cursor;
pub mod price_chart;
pub mod select;
pub mod text_popup;
