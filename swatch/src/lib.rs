pub mod preview;
pub mod settings;
pub mod shader;

pub use swatch_gpu as gpu;
