//! Canvas appearance settings (background and grid).
//!
//! Serialized as JSON at the host boundary so a settings panel can read
//! and write the whole block at once.

use crate::model::Color;
use serde::{Deserialize, Serialize};

/// Smallest grid spacing, in world units.
pub const MIN_GRID_SIZE: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub show: bool,
    /// Spacing between grid lines in world units.
    pub size: i32,
    pub color: Color,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            show: true,
            size: 20,
            color: Color::rgba(220, 220, 220, 255),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    pub background: Color,
    pub grid: GridSettings,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            background: Color::rgba(245, 245, 245, 255),
            grid: GridSettings::default(),
        }
    }
}

impl CanvasSettings {
    /// Parse settings from JSON. Missing fields take their defaults and the
    /// grid size is raised to `MIN_GRID_SIZE`.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut settings: Self =
            serde_json::from_str(json).map_err(|e| format!("invalid canvas settings: {e}"))?;
        settings.grid.size = settings.grid.size.max(MIN_GRID_SIZE);
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn set_background(&mut self, r: i32, g: i32, b: i32, a: i32) {
        self.background = Color::from_ints(r, g, b, a);
    }

    /// Update grid visibility and spacing, and the line color if given.
    pub fn set_grid(&mut self, show: bool, size: i32, color: Option<Color>) {
        self.grid.show = show;
        self.grid.size = size.max(MIN_GRID_SIZE);
        if let Some(color) = color {
            self.grid.color = color;
        }
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.grid.show = !self.grid.show;
        self.grid.show
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn grid_size_has_floor() {
        let mut s = CanvasSettings::default();
        s.set_grid(true, 2, None);
        assert_eq!(s.grid.size, MIN_GRID_SIZE);
        s.set_grid(false, 40, Some(Color::RED));
        assert_eq!(
            s.grid,
            GridSettings {
                show: false,
                size: 40,
                color: Color::RED
            }
        );
    }

    #[test]
    fn grid_color_kept_when_not_given() {
        let mut s = CanvasSettings::default();
        s.set_grid(true, 30, None);
        assert_eq!(s.grid.color, GridSettings::default().color);
    }

    #[test]
    fn json_round_trip_and_defaults() {
        let mut s = CanvasSettings::default();
        s.set_background(10, 20, 30, 255);
        let parsed = CanvasSettings::from_json(&s.to_json()).unwrap();
        assert_eq!(parsed, s);

        let partial = CanvasSettings::from_json(r#"{"grid":{"size":1}}"#).unwrap();
        assert_eq!(partial.background, CanvasSettings::default().background);
        assert_eq!(partial.grid.size, MIN_GRID_SIZE);
        assert!(partial.grid.show);
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = CanvasSettings::from_json("{not json").unwrap_err();
        assert!(err.starts_with("invalid canvas settings"), "{err}");
    }

    #[test]
    fn toggle_grid_flips() {
        let mut s = CanvasSettings::default();
        assert!(!s.toggle_grid());
        assert!(s.toggle_grid());
    }
}
