//! UI input handling module

pub mod source;
pub mod processor;

// Re-export commonly used types
pub use source::{ButtonEdge, InputSource, MouseButton};
pub use processor::UIInputProcessor;
