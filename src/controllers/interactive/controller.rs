use std::time::Instant;

use log::{debug, info};

use crate::controllers::interactive::data::explorer_config::{ConfigError, ExplorerConfig};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::input_event::{InputEvent, LoopControl, MouseButton};
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::data::pixel_field::PixelField;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::evaluator::FieldEvaluator;
use crate::core::fractals::mandelbrot::params::IterationParams;
use crate::core::view::view_state::ViewState;
use crate::core::view::zoom::ZoomDirection;

/// Owns the view and recomputes the whole field after every pan or zoom.
///
/// Everything runs on the caller's thread: an event is fully handled, including the
/// evaluation, before `handle_event` returns.
#[derive(Debug)]
pub struct ExplorerController {
    viewport: Viewport,
    view: ViewState,
    params: IterationParams,
    zoom_speed: f64,
    evaluator: FieldEvaluator,
    generation: u64,
}

impl ExplorerController {
    pub fn new(config: ExplorerConfig) -> Result<Self, ConfigError> {
        let viewport = config.viewport()?;
        let view = config.initial_view()?;
        let params = config.iteration_params()?;
        let zoom_speed = config.validated_zoom_speed()?;

        Ok(Self {
            viewport,
            view,
            params,
            zoom_speed,
            evaluator: FieldEvaluator::new(config.strategy),
            generation: 0,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Evaluates the current view without changing it.
    #[must_use]
    pub fn render(&self) -> PixelField {
        self.evaluator.evaluate(self.viewport, &self.view, &self.params)
    }

    /// Evaluates the current view and hands the result to `sink`.
    pub fn present_current<S: FrameSink>(&mut self, sink: &mut S) {
        let start = Instant::now();
        let pixel_field = self.render();
        let render_duration = start.elapsed();

        self.generation += 1;
        debug!("presenting generation {} after {:?}", self.generation, render_duration);

        sink.present(FrameData {
            generation: self.generation,
            pixel_field,
            render_duration,
        });
    }

    pub fn handle_event<S: FrameSink>(&mut self, event: InputEvent, sink: &mut S) -> LoopControl {
        match event {
            InputEvent::Closed => {
                info!("window closed");
                LoopControl::Exit
            }
            InputEvent::Click {
                position,
                button: MouseButton::Primary,
            } => {
                self.pan_to(position, sink);
                LoopControl::Continue
            }
            InputEvent::Click { .. } => LoopControl::Continue,
            InputEvent::WheelMoved { delta } => {
                if let Some(direction) = ZoomDirection::from_wheel_delta(delta) {
                    self.zoom(direction, sink);
                }
                LoopControl::Continue
            }
        }
    }

    fn pan_to<S: FrameSink>(&mut self, position: Point, sink: &mut S) {
        info!("moving the view to pixel ({}, {})...", position.x, position.y);

        self.view.recenter_on(position);
        self.present_current(sink);

        info!("done");
    }

    fn zoom<S: FrameSink>(&mut self, direction: ZoomDirection, sink: &mut S) {
        info!("zooming {:?}...", direction);

        self.view.zoom(direction, self.zoom_speed);
        self.present_current(sink);

        info!("done, scale is now {}", self.view.scale());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    const EPSILON: f64 = 1e-9;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<FrameData>,
    }

    impl FrameSink for RecordingSink {
        fn present(&mut self, frame: FrameData) {
            self.frames.push(frame);
        }
    }

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            width: 90,
            height: 70,
            initial_scale: 40.0,
            zoom_speed: 20.0,
            ..ExplorerConfig::default()
        }
    }

    fn center_point(controller: &ExplorerController) -> Complex {
        let viewport = controller.viewport();
        controller
            .view()
            .map_pixel_to_complex(viewport.half_width(), viewport.half_height())
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ExplorerConfig {
            zoom_speed: 0.0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            ExplorerController::new(config).unwrap_err(),
            ConfigError::InvalidZoomSpeed { zoom_speed: 0.0 }
        );
    }

    #[test]
    fn test_closed_exits_without_rendering() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut sink = RecordingSink::default();

        let control = controller.handle_event(InputEvent::Closed, &mut sink);

        assert_eq!(control, LoopControl::Exit);
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_primary_click_recenters_and_presents() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut sink = RecordingSink::default();
        let clicked = controller.view().map_pixel_to_complex(80.0, 10.0);

        let control = controller.handle_event(
            InputEvent::Click {
                position: Point { x: 80, y: 10 },
                button: MouseButton::Primary,
            },
            &mut sink,
        );

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(sink.frames[0].generation, 1);
        assert_eq!(sink.frames[0].pixel_field, controller.render());

        let center = center_point(&controller);
        assert!((center.real - clicked.real).abs() <= EPSILON);
        assert!((center.imag - clicked.imag).abs() <= EPSILON);
    }

    #[test]
    fn test_click_on_center_keeps_view() {
        let mut controller = ExplorerController::new(ExplorerConfig::default()).unwrap();
        let mut sink = RecordingSink::default();

        controller.handle_event(
            InputEvent::Click {
                position: Point { x: 450, y: 350 },
                button: MouseButton::Primary,
            },
            &mut sink,
        );

        assert_eq!(controller.view().center_x(), 450.0);
        assert_eq!(controller.view().center_y(), 350.0);
        assert_eq!(sink.frames.len(), 1);
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut sink = RecordingSink::default();
        let before = *controller.view();

        for button in [MouseButton::Secondary, MouseButton::Middle, MouseButton::Other] {
            let control = controller.handle_event(
                InputEvent::Click {
                    position: Point { x: 3, y: 4 },
                    button,
                },
                &mut sink,
            );
            assert_eq!(control, LoopControl::Continue);
        }

        assert_eq!(*controller.view(), before);
        assert!(sink.frames.is_empty());
        assert_eq!(controller.generation(), 0);
    }

    #[test]
    fn test_wheel_in_zooms_around_center() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut sink = RecordingSink::default();
        controller.handle_event(
            InputEvent::Click {
                position: Point { x: 20, y: 60 },
                button: MouseButton::Primary,
            },
            &mut sink,
        );
        let before = center_point(&controller);
        let region_before = controller.view().visible_region().unwrap();

        controller.handle_event(InputEvent::WheelMoved { delta: 1.0 }, &mut sink);

        let after = center_point(&controller);
        let region_after = controller.view().visible_region().unwrap();
        assert!(controller.view().scale() > 40.0);
        assert!(region_after.width() < region_before.width());
        assert!((after.real - before.real).abs() <= EPSILON);
        assert!((after.imag - before.imag).abs() <= EPSILON);
        assert_eq!(sink.frames.len(), 2);
        assert_eq!(sink.frames[1].generation, 2);
    }

    #[test]
    fn test_wheel_out_is_clamped_at_zoom_speed() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut sink = RecordingSink::default();

        for _ in 0..3 {
            controller.handle_event(InputEvent::WheelMoved { delta: -1.0 }, &mut sink);
        }

        assert_eq!(controller.view().scale(), 20.0);
        assert_eq!(sink.frames.len(), 3);
    }

    #[test]
    fn test_zero_wheel_delta_is_ignored() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut sink = RecordingSink::default();

        let control = controller.handle_event(InputEvent::WheelMoved { delta: 0.0 }, &mut sink);

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(controller.view().scale(), 40.0);
        assert!(sink.frames.is_empty());
    }

    #[test]
    fn test_present_current_increments_generation() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        let mut sink = RecordingSink::default();

        controller.present_current(&mut sink);
        controller.present_current(&mut sink);

        assert_eq!(controller.generation(), 2);
        assert_eq!(sink.frames[0].pixel_field, sink.frames[1].pixel_field);
        assert_eq!(sink.frames[0].pixel_field.len(), 90 * 70);
    }
}
