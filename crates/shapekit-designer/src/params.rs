//! # Parameter Clamping
//!
//! Caller-side policy applied to raw user input before it reaches a shape
//! factory or mesh operation. Missing or rejected values fall back to the
//! configured defaults instead of failing, so an interactive prompt can never
//! produce a degenerate shape. The `*_text` variants accept the string a
//! prompt returns.

use shapekit_settings::ShapeDefaults;
use tracing::warn;

/// Parses a decimal number, treating blank or malformed text as missing.
pub fn parse_f64(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// Parses an integer; a decimal like `"4.7"` truncates toward zero.
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| parse_f64(text).filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
}

fn dimension(name: &str, value: Option<f64>, default: f64, max: f64) -> f64 {
    match value {
        Some(v) if v > 0.0 && v <= max => v,
        Some(v) => {
            warn!(param = name, value = v, default, "Rejected value, using default");
            default
        }
        None => default,
    }
}

pub fn line_length(value: Option<f64>, defaults: &ShapeDefaults) -> f64 {
    dimension(
        "line length",
        value,
        defaults.line_length,
        defaults.max_line_length,
    )
}

pub fn square_size(value: Option<f64>, defaults: &ShapeDefaults) -> f64 {
    dimension("square size", value, defaults.square_size, defaults.max_size)
}

pub fn rectangle_length(value: Option<f64>, defaults: &ShapeDefaults) -> f64 {
    dimension(
        "rectangle length",
        value,
        defaults.rectangle_length,
        defaults.max_size,
    )
}

pub fn rectangle_width(value: Option<f64>, defaults: &ShapeDefaults) -> f64 {
    dimension(
        "rectangle width",
        value,
        defaults.rectangle_width,
        defaults.max_size,
    )
}

pub fn polygon_size(value: Option<f64>, defaults: &ShapeDefaults) -> f64 {
    dimension("polygon size", value, defaults.polygon_size, defaults.max_size)
}

/// Side counts of two or fewer fall back to the default.
pub fn polygon_sides(value: Option<i64>, defaults: &ShapeDefaults) -> usize {
    match value {
        Some(v) if v > 2 => v as usize,
        Some(v) => {
            warn!(value = v, "Too few polygon sides, using default");
            defaults.polygon_sides as usize
        }
        None => defaults.polygon_sides as usize,
    }
}

/// Divisions of two or fewer become 2.
pub fn subdivision(value: Option<i64>, defaults: &ShapeDefaults) -> usize {
    match value {
        Some(v) if v > 2 => v as usize,
        Some(v) => {
            if v < 2 {
                warn!(value = v, "Subdivision raised to 2");
            }
            2
        }
        None => defaults.subdivision as usize,
    }
}

/// Missing or NaN falls back to the default, then the result is clamped
/// into `[0, 1]`.
pub fn bevel_length(value: Option<f64>, defaults: &ShapeDefaults) -> f64 {
    let v = value.filter(|v| !v.is_nan()).unwrap_or(defaults.bevel_length);
    let clamped = v.clamp(0.0, 1.0);
    if clamped != v {
        warn!(value = v, clamped, "Bevel length clamped");
    }
    clamped
}

pub fn line_length_text(text: &str, defaults: &ShapeDefaults) -> f64 {
    line_length(parse_f64(text), defaults)
}

pub fn square_size_text(text: &str, defaults: &ShapeDefaults) -> f64 {
    square_size(parse_f64(text), defaults)
}

pub fn rectangle_length_text(text: &str, defaults: &ShapeDefaults) -> f64 {
    rectangle_length(parse_f64(text), defaults)
}

pub fn rectangle_width_text(text: &str, defaults: &ShapeDefaults) -> f64 {
    rectangle_width(parse_f64(text), defaults)
}

pub fn polygon_size_text(text: &str, defaults: &ShapeDefaults) -> f64 {
    polygon_size(parse_f64(text), defaults)
}

pub fn polygon_sides_text(text: &str, defaults: &ShapeDefaults) -> usize {
    polygon_sides(parse_int(text), defaults)
}

pub fn subdivision_text(text: &str, defaults: &ShapeDefaults) -> usize {
    subdivision(parse_int(text), defaults)
}

pub fn bevel_length_text(text: &str, defaults: &ShapeDefaults) -> f64 {
    bevel_length(parse_f64(text), defaults)
}
