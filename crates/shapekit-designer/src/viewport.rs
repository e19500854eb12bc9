//! Viewport and coordinate normalization for pointer input.
//!
//! Converts between pixel coordinates on the page (origin top-left, y down)
//! and normalized device coordinates inside the canvas (`[-1, 1]` on both
//! axes, y up), which is the space shapes live in.

use shapekit_core::Vector2;

/// The canvas rectangle in page pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport for a canvas whose top-left corner sits at the page
    /// origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_origin(0.0, 0.0, width, height)
    }

    /// Creates a viewport for a canvas offset by `(x, y)` pixels on the page.
    pub fn with_origin(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Gets the canvas width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Gets the canvas height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Updates the canvas rectangle (typically called when the window resizes).
    pub fn set_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        *self = Self::with_origin(x, y, width, height);
    }

    /// Converts page pixel coordinates to normalized device coordinates.
    ///
    /// Formula:
    /// ```text
    /// ndc_x = ((pixel_x - x) / width - 0.5) * 2
    /// ndc_y = -((pixel_y - y) / height - 0.5) * 2   // Flip Y-axis
    /// ```
    pub fn pixel_to_ndc(&self, pixel_x: f64, pixel_y: f64) -> Vector2 {
        let u = (pixel_x - self.x) / self.width;
        let v = (pixel_y - self.y) / self.height;
        Vector2::new((u - 0.5) * 2.0, -(v - 0.5) * 2.0)
    }

    /// Converts normalized device coordinates back to page pixels.
    pub fn ndc_to_pixel(&self, ndc: Vector2) -> (f64, f64) {
        let u = ndc.x / 2.0 + 0.5;
        let v = -ndc.y / 2.0 + 0.5;
        (self.x + u * self.width, self.y + v * self.height)
    }

    /// Converts a pointer movement in pixels to a movement in NDC units.
    pub fn pixel_delta_to_ndc(&self, dx: f64, dy: f64) -> Vector2 {
        Vector2::new(dx / self.width * 2.0, -dy / self.height * 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_center() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(viewport.pixel_to_ndc(0.0, 0.0), Vector2::new(-1.0, 1.0));
        assert_eq!(viewport.pixel_to_ndc(800.0, 600.0), Vector2::new(1.0, -1.0));
        assert_eq!(viewport.pixel_to_ndc(400.0, 300.0), Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_offset_canvas_round_trip() {
        let viewport = Viewport::with_origin(20.0, 40.0, 500.0, 500.0);
        let ndc = viewport.pixel_to_ndc(145.0, 415.0);
        assert_eq!(ndc, Vector2::new(-0.5, -0.5));
        assert_eq!(viewport.ndc_to_pixel(ndc), (145.0, 415.0));
    }

    #[test]
    fn test_pixel_delta() {
        let viewport = Viewport::new(200.0, 100.0);
        assert_eq!(
            viewport.pixel_delta_to_ndc(50.0, 25.0),
            Vector2::new(0.5, -0.5)
        );
    }
}
