/// Every whole multiple of this scale adds one base speed to the zoom step.
pub const ZOOM_ACCEL_DIVISOR: f64 = 1000.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Positive wheel deltas zoom in, negative ones zoom out. A zero delta carries no
    /// intent.
    #[must_use]
    pub fn from_wheel_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Step applied by one zoom notch at `scale`. The acceleration grows in whole
/// multiples of [`ZOOM_ACCEL_DIVISOR`], so the step is constant between them.
#[must_use]
pub fn zoom_step(scale: f64, speed: f64) -> f64 {
    speed * (1.0 + (scale / ZOOM_ACCEL_DIVISOR).floor())
}

/// Scale after one zoom notch.
///
/// Anything that would land below twice the speed snaps to the speed itself, so the
/// scale never drops under the minimum step size and never reaches zero.
#[must_use]
pub fn zoomed_scale(scale: f64, direction: ZoomDirection, speed: f64) -> f64 {
    let step = zoom_step(scale, speed);
    let next = match direction {
        ZoomDirection::In => scale + step,
        ZoomDirection::Out => scale - step,
    };

    if next - speed < speed { speed } else { next }
}
