//! Line chart over dated values using egui_plot.

use chrono::{Duration, NaiveDate};
use egui::{Color32, Response, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::metrics::charts::ChartPoint;

/// A dated series drawn as a line, x in days since the first point.
pub struct TrendChart<'a> {
    id: &'a str,
    name: &'a str,
    points: &'a [ChartPoint],
    height: f32,
    color: Option<Color32>,
    y_label: Option<&'a str>,
    empty_text: String,
    allow_zoom: bool,
}

impl<'a> TrendChart<'a> {
    /// `id` must be unique among the charts shown on one screen.
    pub fn new(id: &'a str, name: &'a str, points: &'a [ChartPoint]) -> Self {
        Self {
            id,
            name,
            points,
            height: 180.0,
            color: None,
            y_label: None,
            empty_text: String::new(),
            allow_zoom: false,
        }
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn y_label(mut self, label: &'a str) -> Self {
        self.y_label = Some(label);
        self
    }

    /// Text shown instead of the chart when there are no points.
    pub fn empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn allow_zoom(mut self, allow: bool) -> Self {
        self.allow_zoom = allow;
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let Some(origin) = self.points.first().map(|p| p.date) else {
            return ui.weak(self.empty_text);
        };

        let labels: Vec<(f64, String)> = plot_coords(self.points)
            .iter()
            .zip(self.points)
            .map(|(coord, p)| (coord[0], p.label.clone()))
            .collect();

        let mut line = Line::new(self.name, PlotPoints::new(plot_coords(self.points)));
        if let Some(color) = self.color {
            line = line.color(color);
        }

        let mut plot = Plot::new(self.id)
            .height(self.height)
            .allow_drag(self.allow_zoom)
            .allow_zoom(self.allow_zoom)
            .allow_scroll(self.allow_zoom)
            .show_x(true)
            .show_y(true)
            .x_axis_formatter(move |mark, _range| axis_date(origin, mark.value))
            .label_formatter(move |_name, value| {
                let date = axis_date(origin, value.x);
                match labels.iter().find(|(x, _)| (*x - value.x).abs() < 0.5) {
                    Some((_, label)) => format!("{}\n{}", date, label),
                    None => date,
                }
            });

        if let Some(label) = self.y_label {
            plot = plot.y_axis_label(label);
        }

        plot.show(ui, |plot_ui| plot_ui.line(line)).response
    }
}

/// `[days since first point, value]` pairs.
pub fn plot_coords(points: &[ChartPoint]) -> Vec<[f64; 2]> {
    let Some(origin) = points.first().map(|p| p.date) else {
        return Vec::new();
    };
    points
        .iter()
        .map(|p| [(p.date - origin).num_days() as f64, p.value as f64])
        .collect()
}

fn axis_date(origin: NaiveDate, x: f64) -> String {
    let date = origin + Duration::days(x.round() as i64);
    date.format("%d.%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(day: u32, value: f32) -> ChartPoint {
        ChartPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
            value,
            label: String::new(),
        }
    }

    #[test]
    fn test_plot_coords_relative_to_first_date() {
        let coords = plot_coords(&[point(1, 80.0), point(4, 79.5), point(11, 78.0)]);
        assert_eq!(coords, vec![[0.0, 80.0], [3.0, 79.5], [10.0, 78.0]]);
        assert!(plot_coords(&[]).is_empty());
    }

    #[test]
    fn test_axis_date() {
        let origin = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(axis_date(origin, 0.0), "28.02");
        assert_eq!(axis_date(origin, 2.2), "01.03");
    }
}
