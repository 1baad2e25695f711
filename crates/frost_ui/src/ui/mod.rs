//! UI System Module
//!
//! Windows, widgets and the per-frame dispatcher, kept apart from any
//! rendering backend or input device.
//!
//! Architecture:
//! - UIManager: owns windows, elements and groups; runs draw and input each frame
//! - window: draggable, closable, focusable windows
//! - widgets/: labels, buttons and checkboxes
//! - rendering/: draw call recording for hosts and tests
//! - input/: input source interface and edge tracking

pub mod manager;
pub mod backend;
pub mod error;
pub mod window;
pub mod registry;
pub mod widgets;
pub mod rendering;
pub mod input;

#[cfg(test)]
mod tests;

pub use manager::UIManager;
pub use backend::UIRenderBackend;
pub use error::UIError;
pub use window::{UIWindow, WindowKey};
pub use registry::ElementRegistry;

// Re-export widgets
pub use widgets::{
    ButtonState, CheckboxOrientation, CheckboxState, ElementDesc, ElementKind, UIButton, UICheckbox,
    UIElement, UILabel,
};

// Re-export rendering types
pub use rendering::{UIRenderCommand, UIRenderData};

// Re-export input types
pub use input::{ButtonEdge, InputSource, MouseButton, UIInputProcessor};

// Re-export events
pub use crate::events::EventSystem;
