use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Color,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Widget,
    },
};

use swarm_utils::candles::ChartPoint;

use crate::{extensions::ThemedWidget, thematize::Thematize};

/// Close-price line chart over a time axis. The widget owns exactly one
/// series: `update` tears the previous series down and rebuilds from the
/// new points, so stale data can never linger across symbol switches.
/// The cursored point's time of day and OHLC values are shown in a
/// readout line above the plot.
#[derive(Debug, Default)]
pub struct PriceChart {
    label: Option<String>,
    points: Vec<ChartPoint>,
    cursor: usize,
    loading: bool,
}

impl PriceChart {
    /// Replaces the series wholesale. The cursor moves to the newest
    /// point.
    pub fn update(&mut self, label: String, points: Vec<ChartPoint>) {
        self.cursor = points.len().saturating_sub(1);
        self.points = points;
        self.label = Some(label);
        self.loading = false;
    }

    /// Discards the series and shows the loading placeholder until the
    /// next `update`.
    pub fn set_loading(&mut self) {
        self.points.clear();
        self.cursor = 0;
        self.loading = true;
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn cursored(&self) -> Option<&ChartPoint> {
        self.points.get(self.cursor)
    }

    pub fn handle_event(&mut self, key_event: &KeyEvent) {
        if key_event.kind != KeyEventKind::Press || self.points.is_empty() {
            return;
        }

        match key_event.code {
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.points.len() - 1),
            _ => {}
        }
    }

    fn readout(&self) -> String {
        let Some(point) = self.cursored() else {
            return String::new();
        };

        format!(
            "{label}  {time}  O {open}  H {high}  L {low}  C {close}",
            label = self.label.as_deref().unwrap_or(""),
            time = format_time_of_day(point.x),
            open = numeric_format(point.open),
            high = numeric_format(point.high),
            low = numeric_format(point.low),
            close = numeric_format(point.close),
        )
    }

    fn x_bounds(&self) -> [f64; 2] {
        let first = self.points.first().map(|p| p.x as f64).unwrap_or(0.0);
        let last = self.points.last().map(|p| p.x as f64).unwrap_or(0.0);
        if first == last {
            [first - 1.0, last + 1.0]
        } else {
            [first.min(last), first.max(last)]
        }
    }

    fn y_bounds(&self) -> [f64; 2] {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for point in &self.points {
            min = min.min(point.y);
            max = max.max(point.y);
        }
        if min > max {
            return [0.0, 1.0];
        }
        if min == max {
            // flat series still needs a visible band
            return [min - 1.0, max + 1.0];
        }
        let pad = (max - min) * 0.05;
        [min - pad, max + pad]
    }
}

impl ThemedWidget for PriceChart {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &impl Thematize) {
        if self.points.is_empty() {
            let placeholder = if self.loading {
                "Loading prices..."
            } else {
                "No price data for this token."
            };
            Line::raw(placeholder)
                .style(theme.style_dim())
                .render(area, buf);
            return;
        }

        let [readout_area, chart_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(area);

        Line::raw(self.readout())
            .style(theme.style())
            .render(readout_area, buf);

        let color = theme.style().fg.unwrap_or(Color::Gray);
        let cursor_coord = self
            .cursored()
            .map(|p| (p.x as f64, p.y))
            .into_iter()
            .collect::<Vec<(f64, f64)>>();

        let canvas = Canvas::default()
            .x_bounds(self.x_bounds())
            .y_bounds(self.y_bounds())
            .paint(|ctx| {
                for w in self.points.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: w[0].x as f64,
                        y1: w[0].y,
                        x2: w[1].x as f64,
                        y2: w[1].y,
                        color,
                    });
                }
                ctx.draw(&Points {
                    coords: &cursor_coord,
                    color: Color::LightGreen,
                });
            });

        Widget::render(canvas, chart_area, buf);
    }
}

fn format_time_of_day(timestamp_ms: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

fn numeric_format(value: f64) -> String {
    format!("{value:.3}")
}
