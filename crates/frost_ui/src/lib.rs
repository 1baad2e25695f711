//! # Frost UI
//!
//! A retained-mode window and widget overlay for real-time rendered
//! applications.
//!
//! ## Features
//!
//! - **Windows**: draggable, closable, with a title bar and focus handling
//! - **Widgets**: labels, momentary and toggle buttons, checkboxes
//! - **Groups**: tag widgets and show one group at a time, e.g. for tabs
//! - **Backend agnostic**: draws through [`ui::UIRenderBackend`], reads
//!   input through [`ui::InputSource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use frost_ui::prelude::*;
//!
//! let mut ui = UIManager::default();
//! ui.create_window("main", Vec2::new(50.0, 50.0), Vec2::new(300.0, 200.0), "Main")?;
//! ui.set_active_window("main")?;
//! ui.add_checkbox("vsync", "VSync", Vec2::new(10.0, 10.0), Vec2::new(16.0, 16.0))?;
//!
//! let mut renderer = UIRenderData::new();
//! let mut input = UIInputProcessor::new();
//! input.update_mouse_position(120.0, 90.0);
//!
//! ui.run(&mut renderer, &input);
//! input.end_frame();
//!
//! for event in ui.dispatch_events() {
//!     println!("{:?}", event.event_type);
//! }
//! # Ok::<(), frost_ui::ui::UIError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod events;
pub mod ui;

/// Commonly used types
pub mod prelude {
    pub use crate::config::{ColorScheme, Config, UIConfig, WindowStyle};
    pub use crate::events::{Event, EventArg, EventHandler, EventSystem, EventType};
    pub use crate::foundation::math::{rgba8, Rect, Vec2, Vec4};
    pub use crate::ui::{
        CheckboxOrientation, ElementDesc, InputSource, MouseButton, UIElement, UIError,
        UIInputProcessor, UIManager, UIRenderBackend, UIRenderData, UIWindow,
    };
}
