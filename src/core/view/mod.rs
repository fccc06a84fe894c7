pub mod view_state;
pub mod zoom;

pub use view_state::{ViewState, ViewStateError};
pub use zoom::ZoomDirection;
