//! UI rendering module
//!
//! Backend-agnostic draw call recording

pub mod commands;
pub mod data;

// Re-export commonly used types
pub use commands::UIRenderCommand;
pub use data::UIRenderData;
