pub mod errors;
pub mod logging;
pub mod scope;
pub mod waveform;
