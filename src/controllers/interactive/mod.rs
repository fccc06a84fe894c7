//! Interactive controller for click-to-center and wheel-zoom exploration.
//!
//! The controller owns the view and turns each input event into a state transition,
//! a synchronous evaluation of the whole field, and a hand-off to the presentation
//! layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `InputEvent` values produced by a windowing adapter
//! - **Output**: `FrameSink` trait for receiving evaluated frames
//! - **Core**: `ViewState` and `FieldEvaluator` from `core/`

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::ExplorerController;
pub use data::explorer_config::{ConfigError, ExplorerConfig};
pub use data::frame_data::FrameData;
pub use events::input_event::{InputEvent, LoopControl, MouseButton};
pub use ports::frame_sink::FrameSink;
