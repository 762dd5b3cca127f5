use egui::{Color32, Visuals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => Visuals::dark(),
            Theme::Light => Visuals::light(),
        }
    }

    /// Scatter marker color.
    pub fn point_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(100, 170, 255),
            Theme::Light => Color32::from_rgb(31, 119, 180),
        }
    }

    /// Regression and reference line color.
    pub fn line_color(&self) -> Color32 {
        Color32::from_rgb(230, 50, 50)
    }

    pub fn error_color(&self) -> Color32 {
        Color32::from_rgb(255, 80, 80)
    }

    pub fn warning_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(240, 190, 60),
            Theme::Light => Color32::from_rgb(180, 120, 0),
        }
    }

    pub fn success_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(90, 200, 120),
            Theme::Light => Color32::from_rgb(30, 140, 60),
        }
    }

    pub fn info_color(&self) -> Color32 {
        match self {
            Theme::Dark => Color32::from_rgb(120, 180, 240),
            Theme::Light => Color32::from_rgb(20, 90, 170),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}
