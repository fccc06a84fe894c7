use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::view::zoom::{ZoomDirection, zoomed_scale};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidScale { scale: f64 },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "scale must be a positive finite number, got {}", scale)
            }
        }
    }
}

impl Error for ViewStateError {}

/// Mapping between viewport pixels and the complex plane.
///
/// `scale` is the number of pixels per unit distance in the plane. `center_x` and
/// `center_y` are the pixel coordinates the plane is shifted by; the initial view has
/// them at the middle of the viewport, which puts the origin there.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    viewport: Viewport,
    scale: f64,
    center_x: f64,
    center_y: f64,
}

impl ViewState {
    pub fn new(viewport: Viewport, scale: f64) -> Result<Self, ViewStateError> {
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ViewStateError::InvalidScale { scale });
        }

        Ok(Self {
            viewport,
            scale,
            center_x: viewport.half_width(),
            center_y: viewport.half_height(),
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn map_pixel_to_complex(&self, px: f64, py: f64) -> Complex {
        let half_width = self.viewport.half_width();
        let half_height = self.viewport.half_height();

        let shifted_x = px + (self.center_x - half_width);
        let shifted_y = py + (self.center_y - half_height);

        Complex {
            real: shifted_x / self.scale - half_width / self.scale,
            imag: -shifted_y / self.scale + half_height / self.scale,
        }
    }

    #[must_use]
    pub fn map_point_to_complex(&self, point: Point) -> Complex {
        self.map_pixel_to_complex(f64::from(point.x), f64::from(point.y))
    }

    /// Moves the view so that whatever is under `(px, py)` ends up under the middle of
    /// the viewport. Points outside the viewport are accepted.
    pub fn recenter(&mut self, px: f64, py: f64) {
        self.center_x = px + (self.center_x - self.viewport.half_width());
        self.center_y = py + (self.center_y - self.viewport.half_height());
    }

    pub fn recenter_on(&mut self, point: Point) {
        self.recenter(f64::from(point.x), f64::from(point.y));
    }

    /// Applies one zoom notch. A non-positive or non-finite speed leaves the view as is.
    pub fn zoom(&mut self, direction: ZoomDirection, speed: f64) {
        if !(speed > 0.0 && speed.is_finite()) {
            return;
        }

        self.rescale(zoomed_scale(self.scale, direction, speed));
    }

    /// Changes the scale while keeping the point under the middle of the viewport fixed.
    /// Invalid scales are ignored.
    pub fn rescale(&mut self, new_scale: f64) {
        if !(new_scale > 0.0 && new_scale.is_finite()) {
            return;
        }

        let half_width = self.viewport.half_width();
        let half_height = self.viewport.half_height();
        let ratio = new_scale / self.scale;

        self.center_x = (self.center_x - half_width) * ratio + half_width;
        self.center_y = (self.center_y - half_height) * ratio + half_height;
        self.scale = new_scale;
    }

    /// The rectangle of the plane covered by the viewport, pixel edges included.
    pub fn visible_region(&self) -> Result<ComplexRect, ComplexRectError> {
        let top_left = self.map_pixel_to_complex(0.0, 0.0);
        let bottom_right = self.map_pixel_to_complex(
            f64::from(self.viewport.width()),
            f64::from(self.viewport.height()),
        );

        ComplexRect::new(
            Complex::new(top_left.real, bottom_right.imag),
            Complex::new(bottom_right.real, top_left.imag),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn assert_complex_approx_eq(actual: Complex, expected: Complex) {
        assert_approx_eq(actual.real, expected.real);
        assert_approx_eq(actual.imag, expected.imag);
    }

    fn default_view() -> ViewState {
        ViewState::new(Viewport::new(900, 700).unwrap(), 400.0).unwrap()
    }

    #[test]
    fn test_new_centers_on_viewport() {
        let view = default_view();

        assert_eq!(view.scale(), 400.0);
        assert_eq!(view.center_x(), 450.0);
        assert_eq!(view.center_y(), 350.0);
    }

    #[test]
    fn test_new_rejects_invalid_scale() {
        let viewport = Viewport::new(10, 10).unwrap();

        assert_eq!(ViewState::new(viewport, 0.0), Err(ViewStateError::InvalidScale { scale: 0.0 }));
        assert!(ViewState::new(viewport, -1.0).is_err());
        assert!(ViewState::new(viewport, f64::INFINITY).is_err());
        assert!(ViewState::new(viewport, f64::NAN).is_err());
    }

    #[test]
    fn test_viewport_center_maps_to_origin() {
        let view = default_view();

        assert_eq!(view.map_pixel_to_complex(450.0, 350.0), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_mapping_inverts_vertical_axis() {
        let view = default_view();

        let top_left = view.map_pixel_to_complex(0.0, 0.0);
        let bottom_right = view.map_pixel_to_complex(900.0, 700.0);

        assert_complex_approx_eq(top_left, Complex::new(-1.125, 0.875));
        assert_complex_approx_eq(bottom_right, Complex::new(1.125, -0.875));
    }

    #[test]
    fn test_mapping_is_deterministic_and_injective() {
        let viewport = Viewport::new(40, 30).unwrap();
        let view = ViewState::new(viewport, 17.0).unwrap();
        let mut seen = HashSet::new();

        for point in viewport.points() {
            let first = view.map_point_to_complex(point);
            let second = view.map_point_to_complex(point);

            assert_eq!(first, second);
            assert!(seen.insert((first.real.to_bits(), first.imag.to_bits())));
        }

        assert_eq!(seen.len(), viewport.size());
    }

    #[test]
    fn test_recenter_on_center_is_a_no_op() {
        let mut view = default_view();

        view.recenter(450.0, 350.0);

        assert_eq!(view.center_x(), 450.0);
        assert_eq!(view.center_y(), 350.0);
    }

    #[test]
    fn test_recenter_moves_clicked_point_to_center() {
        let mut view = default_view();
        let clicked = view.map_pixel_to_complex(700.0, 120.0);

        view.recenter(700.0, 120.0);

        assert_eq!(view.scale(), 400.0);
        assert_complex_approx_eq(view.map_pixel_to_complex(450.0, 350.0), clicked);
    }

    #[test]
    fn test_recenter_accepts_points_outside_viewport() {
        let mut view = default_view();
        let far_away = view.map_pixel_to_complex(-2000.0, 5000.0);

        view.recenter(-2000.0, 5000.0);

        assert_complex_approx_eq(view.map_pixel_to_complex(450.0, 350.0), far_away);
    }

    #[test]
    fn test_recenter_twice_accumulates() {
        let mut view = default_view();
        view.recenter(500.0, 300.0);
        let target = view.map_pixel_to_complex(550.0, 250.0);

        view.recenter(550.0, 250.0);

        assert_approx_eq(view.center_x(), 600.0);
        assert_approx_eq(view.center_y(), 200.0);

        assert_complex_approx_eq(view.map_pixel_to_complex(450.0, 350.0), target);
    }

    #[test]
    fn test_zoom_in_keeps_center_point_fixed() {
        let mut view = default_view();
        view.recenter(620.0, 410.0);
        let before = view.map_pixel_to_complex(450.0, 350.0);

        view.zoom(ZoomDirection::In, 200.0);

        assert!(view.scale() > 400.0);
        assert_complex_approx_eq(view.map_pixel_to_complex(450.0, 350.0), before);
    }

    #[test]
    fn test_zoom_out_keeps_center_point_fixed() {
        let mut view = ViewState::new(Viewport::new(900, 700).unwrap(), 5000.0).unwrap();
        view.recenter(100.0, 600.0);
        let before = view.map_pixel_to_complex(450.0, 350.0);

        view.zoom(ZoomDirection::Out, 200.0);

        assert!(view.scale() < 5000.0);
        assert_complex_approx_eq(view.map_pixel_to_complex(450.0, 350.0), before);
    }

    #[test]
    fn test_zoom_in_then_matching_zoom_out_restores_view() {
        let mut view = default_view();
        view.recenter(300.0, 200.0);
        let original = view;

        view.zoom(ZoomDirection::In, 200.0);
        let step = view.scale() - original.scale();
        view.rescale(view.scale() - step);

        assert_approx_eq(view.scale(), original.scale());
        assert_approx_eq(view.center_x(), original.center_x());
        assert_approx_eq(view.center_y(), original.center_y());
    }

    #[test]
    fn test_zoom_out_is_clamped_at_speed() {
        let mut view = default_view();

        view.zoom(ZoomDirection::Out, 200.0);
        view.zoom(ZoomDirection::Out, 200.0);

        assert_eq!(view.scale(), 200.0);
    }

    #[test]
    fn test_zoom_with_invalid_speed_is_ignored() {
        let mut view = default_view();

        view.zoom(ZoomDirection::In, 0.0);
        view.zoom(ZoomDirection::Out, -5.0);
        view.zoom(ZoomDirection::In, f64::NAN);

        assert_eq!(view, default_view());
    }

    #[test]
    fn test_rescale_ignores_invalid_scale() {
        let mut view = default_view();

        view.rescale(0.0);
        view.rescale(f64::INFINITY);

        assert_eq!(view, default_view());
    }

    #[test]
    fn test_visible_region_of_default_view() {
        let region = default_view().visible_region().unwrap();

        assert_approx_eq(region.min().real, -1.125);
        assert_approx_eq(region.max().real, 1.125);
        assert_approx_eq(region.min().imag, -0.875);
        assert_approx_eq(region.max().imag, 0.875);
    }

    #[test]
    fn test_zoom_in_shrinks_visible_region() {
        let mut view = default_view();
        let before = view.visible_region().unwrap();

        view.zoom(ZoomDirection::In, 200.0);
        let after = view.visible_region().unwrap();

        assert!(after.width() < before.width());
        assert!(after.height() < before.height());
        assert_complex_approx_eq(after.center(), before.center());
    }
}
