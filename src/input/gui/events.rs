//! Translation from winit window events to controller input.

use log::debug;
use winit::event::{MouseButton as WinitMouseButton, MouseScrollDelta};

use crate::controllers::interactive::events::input_event::{InputEvent, MouseButton};
use crate::core::data::point::Point;

/// Pixel scroll distance that counts as one wheel notch.
pub const PIXELS_PER_NOTCH: f64 = 40.0;

#[must_use]
pub fn map_mouse_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Primary,
        WinitMouseButton::Right => MouseButton::Secondary,
        WinitMouseButton::Middle => MouseButton::Middle,
        _ => MouseButton::Other,
    }
}

/// Click at the last known cursor pixel. Without one the press cannot be placed and
/// is dropped.
#[must_use]
pub fn click_event(cursor: Option<Point>, button: WinitMouseButton) -> Option<InputEvent> {
    match cursor {
        Some(position) => Some(InputEvent::Click {
            position,
            button: map_mouse_button(button),
        }),
        None => {
            debug!("dropping {:?} press, cursor position not known yet", button);
            None
        }
    }
}

/// Turns wheel movement into notches.
///
/// Line deltas are notches already. Pixel deltas from trackpads arrive in many small
/// pieces and are summed until they cover [`PIXELS_PER_NOTCH`].
#[derive(Debug, Default)]
pub struct WheelAccumulator {
    pending_pixels: f64,
}

impl WheelAccumulator {
    /// Vertical delta to forward as a wheel movement, if this event completes one.
    /// Only the sign of the result is meaningful.
    pub fn push(&mut self, delta: MouseScrollDelta) -> Option<f64> {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => {
                self.pending_pixels = 0.0;
                let y = f64::from(y);
                (y != 0.0).then_some(y)
            }
            MouseScrollDelta::PixelDelta(position) => {
                let y = position.y;
                if !y.is_finite() {
                    return None;
                }

                // A reversal starts a new gesture
                if y * self.pending_pixels < 0.0 {
                    self.pending_pixels = 0.0;
                }
                self.pending_pixels += y;

                if self.pending_pixels.abs() < PIXELS_PER_NOTCH {
                    return None;
                }

                let notch = self.pending_pixels.signum();
                self.pending_pixels %= PIXELS_PER_NOTCH;
                Some(notch)
            }
        }
    }

    #[must_use]
    pub fn pending_pixels(&self) -> f64 {
        self.pending_pixels
    }
}
