use std::marker::PhantomData;
use std::time::{Duration, Instant};

use log::{error, info};
use winit::{
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::{
    ExplorerConfig, ExplorerController, InputEvent, LoopControl,
};
use crate::input::gui::{
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    errors::GuiError,
    events::{WheelAccumulator, click_event},
    ports::presenter::GuiPresenterPort,
};

const WINDOW_TITLE: &str = "Mandelbrot set";
const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 30);

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    config: ExplorerConfig,
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(config: ExplorerConfig, presenter_factory: F) -> Self {
        Self { config, presenter_factory, _phantom: PhantomData }
    }

    /// Opens the window and runs until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let mut controller = ExplorerController::new(self.config)?;
        let viewport = controller.viewport();

        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(viewport.width(), viewport.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let mut presenter: P = self.presenter_factory.build(window, viewport)?;

        info!("rendering {}x{} view...", viewport.width(), viewport.height());
        controller.present_current(&mut presenter);
        info!("done");

        let mut cursor: Option<PhysicalPosition<f64>> = None;
        let mut wheel = WheelAccumulator::default();
        let mut next_frame = Instant::now();
        let mut failure: Option<GuiError> = None;

        event_loop.run(|event, elwt| {
            match event {
                Event::WindowEvent {
                    ref event,
                    window_id,
                } if window_id == window.id() => {
                    let input = match event {
                        WindowEvent::CloseRequested => Some(InputEvent::Closed),
                        WindowEvent::CursorMoved { position, .. } => {
                            cursor = Some(*position);
                            None
                        }
                        WindowEvent::CursorLeft { .. } => {
                            cursor = None;
                            None
                        }
                        WindowEvent::MouseInput {
                            state: ElementState::Pressed,
                            button,
                            ..
                        } => click_event(
                            cursor.map(|position| presenter.window_pos_to_pixel(position)),
                            *button,
                        ),
                        WindowEvent::MouseWheel { delta, .. } => wheel
                            .push(*delta)
                            .map(|delta| InputEvent::WheelMoved { delta }),
                        WindowEvent::RedrawRequested => {
                            if let Err(err) = presenter.render() {
                                error!("render error: {err}");
                                failure = Some(err);
                                elwt.exit();
                            }
                            None
                        }
                        _ => None,
                    };

                    if let Some(input) = input {
                        if controller.handle_event(input, &mut presenter) == LoopControl::Exit {
                            elwt.exit();
                        }
                    }
                }
                Event::AboutToWait => {
                    // Presentation runs at a capped rate, independent of recomputes
                    let now = Instant::now();
                    if now >= next_frame {
                        window.request_redraw();
                        next_frame = now + FRAME_INTERVAL;
                    }
                    elwt.set_control_flow(ControlFlow::WaitUntil(next_frame));
                }
                _ => {}
            }
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
