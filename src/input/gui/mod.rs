//! GUI input adapter for interactive exploration.
//!
//! This module provides a windowed interface using winit for window management
//! and pixels for framebuffer rendering.

pub mod commands;
pub mod errors;
pub mod events;
pub mod ports;

pub use commands::run_gui::RunGuiCommand;
pub use errors::GuiError;
