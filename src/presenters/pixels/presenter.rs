use log::{debug, error};
use pixels::wgpu::Color;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalPosition;
use winit::window::Window;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::frame_sink::FrameSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_field::PixelFieldError;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::input::gui::errors::GuiError;
use crate::input::gui::ports::presenter::GuiPresenterPort;

/// Presents pixel fields through a `pixels` framebuffer sized to the viewport.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    last_presented_generation: u64,
    copy_error: Option<PixelFieldError>,
}

impl FrameSink for PixelsPresenter {
    fn present(&mut self, frame: FrameData) {
        if frame.generation <= self.last_presented_generation {
            return;
        }

        match frame.pixel_field.write_rgba(self.pixels.frame_mut()) {
            Ok(()) => {
                self.last_presented_generation = frame.generation;
                debug!(
                    "copied generation {} into framebuffer (evaluated in {:?})",
                    frame.generation, frame.render_duration
                );
            }
            Err(err) => {
                error!("dropping generation {}: {}", frame.generation, err);
                self.copy_error = Some(err);
            }
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(&mut self) -> Result<(), GuiError> {
        if let Some(err) = self.copy_error.take() {
            return Err(err.into());
        }

        Ok(self.pixels.render()?)
    }

    fn window_pos_to_pixel(&self, position: PhysicalPosition<f64>) -> Point {
        let (x, y) = match self
            .pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
        {
            Ok((x, y)) => (x as i64, y as i64),
            Err((x, y)) => (x as i64, y as i64),
        };

        Point {
            x: x.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            y: y.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
        }
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, viewport: Viewport) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = PixelsBuilder::new(viewport.width(), viewport.height(), surface_texture)
            .clear_color(Color::WHITE)
            .build()?;

        let mut presenter = Self {
            pixels,
            last_presented_generation: 0,
            copy_error: None,
        };
        presenter.fill(Colour::WHITE);

        Ok(presenter)
    }

    fn fill(&mut self, colour: Colour) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel[0] = colour.r;
            pixel[1] = colour.g;
            pixel[2] = colour.b;
            pixel[3] = 255;
        }
    }
}
