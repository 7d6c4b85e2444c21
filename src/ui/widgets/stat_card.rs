//! Stat card widget for headline numbers.

use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

/// A framed value with a caption, used for totals and streaks.
pub struct StatCard<'a> {
    value: String,
    unit: &'a str,
    label: String,
    icon: Option<&'a str>,
    accent: Option<Color32>,
    size: CardSize,
}

/// Size variants for stat cards.
#[derive(Debug, Clone, Copy, Default)]
pub enum CardSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CardSize {
    fn value_size(&self) -> f32 {
        match self {
            CardSize::Small => 20.0,
            CardSize::Medium => 28.0,
            CardSize::Large => 40.0,
        }
    }

    fn label_size(&self) -> f32 {
        match self {
            CardSize::Small => 11.0,
            CardSize::Medium => 13.0,
            CardSize::Large => 15.0,
        }
    }

    fn min_size(&self) -> Vec2 {
        match self {
            CardSize::Small => Vec2::new(90.0, 56.0),
            CardSize::Medium => Vec2::new(130.0, 72.0),
            CardSize::Large => Vec2::new(180.0, 96.0),
        }
    }
}

impl<'a> StatCard<'a> {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            unit: "",
            label: label.into(),
            icon: None,
            accent: None,
            size: CardSize::default(),
        }
    }

    /// Card for a whole count, such as workouts or days.
    pub fn count(count: u32, label: impl Into<String>) -> Self {
        Self::new(count.to_string(), label)
    }

    /// Card for the average feeling, `--` when nothing was rated.
    pub fn feeling(average: f32, label: impl Into<String>) -> Self {
        let value = if average > 0.0 {
            format!("{:.1}", average)
        } else {
            "--".to_string()
        };
        Self::new(value, label).with_unit("/ 5")
    }

    pub fn with_unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_accent(mut self, color: Color32) -> Self {
        self.accent = Some(color);
        self
    }

    pub fn with_size(mut self, size: CardSize) -> Self {
        self.size = size;
        self
    }

    /// Render the card.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::group(ui.style())
            .inner_margin(10.0)
            .corner_radius(8.0)
            .show(ui, |ui| {
                ui.set_min_size(self.size.min_size());

                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    let mut value_text = RichText::new(&self.value)
                        .size(self.size.value_size())
                        .strong();
                    if let Some(color) = self.accent {
                        value_text = value_text.color(color);
                    }

                    ui.horizontal(|ui| {
                        if let Some(icon) = self.icon {
                            ui.label(RichText::new(icon).size(self.size.value_size() * 0.8));
                        }
                        ui.label(value_text);
                        if !self.unit.is_empty() {
                            ui.label(RichText::new(self.unit).size(self.size.label_size()).weak());
                        }
                    });

                    ui.label(
                        RichText::new(&self.label)
                            .size(self.size.label_size())
                            .weak(),
                    );
                });
            });
    }
}
