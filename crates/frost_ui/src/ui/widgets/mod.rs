//! UI widgets module
//!
//! Contains all UI widget types (labels, buttons, checkboxes)

pub mod core;
pub mod desc;
pub mod label;
pub mod button;
pub mod checkbox;

// Re-export core types
pub use self::core::{ElementBase, ElementKind, UIElement, Widget, WidgetBody, WidgetEvent};
pub use desc::ElementDesc;

// Re-export widget types
pub use label::UILabel;
pub use button::{ButtonState, UIButton};
pub use checkbox::{CheckboxOrientation, CheckboxState, UICheckbox};
