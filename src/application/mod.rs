pub mod coordinator;
pub mod input;
pub mod momentum;

pub use coordinator::*;
pub use input::{DragSample, DragState, InputController, InputState, VelocityHistory};
pub use momentum::{MomentumSimulator, MomentumStep, StopReason};
