//! Configuration for the ShapeKit editor
//!
//! Configuration is organized into logical sections:
//! - Shape defaults (sizes used when user input is missing or rejected)
//! - Interaction settings (pick thresholds in normalized device units)
//! - Render settings (clear, highlight and marker colors, frame rate)
//!
//! Supports JSON and TOML file formats, selected by file extension.

use serde::{Deserialize, Serialize};
use shapekit_core::color::{self, Color};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Defaults and limits for shape factories and mesh operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    /// Line length when input is missing or rejected
    pub line_length: f64,
    /// Largest accepted line length (the NDC diagonal)
    pub max_line_length: f64,
    /// Square side length
    pub square_size: f64,
    /// Rectangle extent along local x
    pub rectangle_length: f64,
    /// Rectangle extent along local y
    pub rectangle_width: f64,
    /// Regular polygon side count
    pub polygon_sides: u32,
    /// Regular polygon circumradius
    pub polygon_size: f64,
    /// Largest accepted square, rectangle or polygon dimension
    pub max_size: f64,
    /// Subdivision count per edge
    pub subdivision: u32,
    /// Bevel cut as a fraction of each adjacent edge
    pub bevel_length: f64,
    /// Vertex color of new shapes
    pub color: Color,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            line_length: 0.4,
            max_line_length: 2.0 * std::f64::consts::SQRT_2,
            square_size: 0.25,
            rectangle_length: 0.6,
            rectangle_width: 0.2,
            polygon_sides: 5,
            polygon_size: 0.25,
            max_size: 2.0,
            subdivision: 2,
            bevel_length: 0.2,
            color: color::DEFAULT_SHAPE_COLOR,
        }
    }
}

/// Pointer interaction settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Maximum distance from a shape's position for it to be picked
    pub shape_pick_threshold: f64,
    /// Maximum distance from a vertex for it to be picked in edit mode
    pub vertex_pick_threshold: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            shape_pick_threshold: 0.1,
            vertex_pick_threshold: 0.02,
        }
    }
}

/// Render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub clear_color: Color,
    /// Outline color of the selected shape in object mode
    pub highlight_color: Color,
    /// Outline color of the selected shape in edit mode and of wireframes
    pub outline_color: Color,
    /// Radius of vertex point markers
    pub point_radius: f64,
    pub fps: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            clear_color: color::CLEAR_COLOR,
            highlight_color: color::ORANGE,
            outline_color: color::BLACK,
            point_radius: 0.01,
            fps: 60,
        }
    }
}

impl RenderSettings {
    /// Milliseconds between frames
    pub fn frame_delta_ms(&self) -> f64 {
        1000.0 / f64::from(self.fps)
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub shapes: ShapeDefaults,
    pub interaction: InteractionSettings,
    pub render: RenderSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let shapes = &self.shapes;
        positive("shapes.max_line_length", shapes.max_line_length)?;
        positive("shapes.max_size", shapes.max_size)?;
        within("shapes.line_length", shapes.line_length, shapes.max_line_length)?;
        within("shapes.square_size", shapes.square_size, shapes.max_size)?;
        within("shapes.rectangle_length", shapes.rectangle_length, shapes.max_size)?;
        within("shapes.rectangle_width", shapes.rectangle_width, shapes.max_size)?;
        within("shapes.polygon_size", shapes.polygon_size, shapes.max_size)?;

        if shapes.polygon_sides < 3 {
            return Err(ConfigError::out_of_range(
                "shapes.polygon_sides",
                shapes.polygon_sides,
            ));
        }
        if shapes.subdivision < 2 {
            return Err(ConfigError::out_of_range(
                "shapes.subdivision",
                shapes.subdivision,
            ));
        }
        if !(0.0..=1.0).contains(&shapes.bevel_length) {
            return Err(ConfigError::out_of_range(
                "shapes.bevel_length",
                shapes.bevel_length,
            ));
        }

        positive(
            "interaction.shape_pick_threshold",
            self.interaction.shape_pick_threshold,
        )?;
        positive(
            "interaction.vertex_pick_threshold",
            self.interaction.vertex_pick_threshold,
        )?;

        positive("render.point_radius", self.render.point_radius)?;
        if self.render.fps == 0 {
            return Err(ConfigError::out_of_range("render.fps", self.render.fps));
        }

        Ok(())
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

fn within(key: &str, value: f64, max: f64) -> ConfigResult<()> {
    positive(key, value)?;
    if value > max {
        return Err(ConfigError::out_of_range(key, value));
    }
    Ok(())
}
