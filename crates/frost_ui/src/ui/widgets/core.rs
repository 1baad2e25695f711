//! Core UI widget primitives
//!
//! Shared types and structures used by all UI widgets.

use std::fmt;

use super::button::UIButton;
use super::checkbox::{CheckboxOrientation, UICheckbox};
use super::label::UILabel;
use crate::config::ColorScheme;
use crate::foundation::math::{Vec2, Vec4};
use crate::ui::backend::UIRenderBackend;
use crate::ui::input::InputSource;
use crate::ui::window::WindowKey;

/// Widget kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Static text
    Label,
    /// Momentary or toggle button
    Button,
    /// Checkbox with a label
    Checkbox,
}

/// Base UI element properties shared by every widget kind
#[derive(Debug, Clone)]
pub struct ElementBase {
    /// Unique identifier across the whole registry
    pub id: String,

    /// Window whose content space this element lives in (`None` = standalone)
    pub parent: Option<WindowKey>,

    /// Visibility group (`None` = always visible)
    pub group: Option<String>,

    /// Position relative to the parent's content origin (or the screen)
    pub position: Vec2,

    /// Size in pixels (unused by labels)
    pub size: Vec2,

    /// Displayed text
    pub text: String,

    /// Text color (RGBA)
    pub text_color: Vec4,

    /// Per-axis text scale
    pub text_scale: Vec2,
}

impl ElementBase {
    /// Whether the element takes part in a frame with this active group
    ///
    /// An empty group on either side means "no group".
    pub fn is_visible_in(&self, active_group: Option<&str>) -> bool {
        let group = self.group.as_deref().filter(|group| !group.is_empty());
        let active = active_group.filter(|active| !active.is_empty());
        match (group, active) {
            (Some(group), Some(active)) => group == active,
            _ => true,
        }
    }
}

/// What a widget's input step reported this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// Momentary button fired its action
    Clicked,
    /// Toggle button changed to the given state
    Toggled(bool),
    /// Checkbox changed to the given state
    Checked(bool),
}

/// Draw and input behaviour of a widget kind
///
/// `origin` is the adaptive position: the parent window's content origin for
/// the current frame, or the screen origin for standalone elements. The
/// dispatcher always calls `draw` before `input` within a frame.
pub trait Widget {
    /// Emit draw calls for this frame
    fn draw(
        &mut self,
        base: &ElementBase,
        origin: Vec2,
        renderer: &mut dyn UIRenderBackend,
        colors: &ColorScheme,
    );

    /// React to pointer state for this frame
    fn input(
        &mut self,
        base: &ElementBase,
        origin: Vec2,
        input: &dyn InputSource,
    ) -> Option<WidgetEvent>;

    /// Boolean output, for widgets that have one
    fn value(&self) -> Option<bool> {
        None
    }
}

/// Kind-specific widget state
pub enum WidgetBody {
    /// Label state
    Label(UILabel),
    /// Button state
    Button(UIButton),
    /// Checkbox state
    Checkbox(UICheckbox),
}

impl WidgetBody {
    /// Kind tag of this body
    pub fn kind(&self) -> ElementKind {
        match self {
            WidgetBody::Label(_) => ElementKind::Label,
            WidgetBody::Button(_) => ElementKind::Button,
            WidgetBody::Checkbox(_) => ElementKind::Checkbox,
        }
    }

    fn widget_mut(&mut self) -> &mut dyn Widget {
        match self {
            WidgetBody::Label(label) => label,
            WidgetBody::Button(button) => button,
            WidgetBody::Checkbox(checkbox) => checkbox,
        }
    }

    fn widget(&self) -> &dyn Widget {
        match self {
            WidgetBody::Label(label) => label,
            WidgetBody::Button(button) => button,
            WidgetBody::Checkbox(checkbox) => checkbox,
        }
    }
}

impl fmt::Debug for WidgetBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetBody::Label(label) => f.debug_tuple("Label").field(label).finish(),
            WidgetBody::Button(button) => f.debug_tuple("Button").field(button).finish(),
            WidgetBody::Checkbox(checkbox) => f.debug_tuple("Checkbox").field(checkbox).finish(),
        }
    }
}

/// A registered widget: shared attributes plus kind-specific state
///
/// Setters return `&mut Self` so calls can be chained. Setters that only make
/// sense for one kind are silently ignored on the others.
#[derive(Debug)]
pub struct UIElement {
    base: ElementBase,
    body: WidgetBody,
}

impl UIElement {
    /// Assemble an element from its parts
    pub fn new(base: ElementBase, body: WidgetBody) -> Self {
        Self { base, body }
    }

    /// Element identifier
    pub fn id(&self) -> &str {
        &self.base.id
    }

    /// Widget kind
    pub fn kind(&self) -> ElementKind {
        self.body.kind()
    }

    /// Shared attributes
    pub fn base(&self) -> &ElementBase {
        &self.base
    }

    /// Kind-specific state
    pub fn body(&self) -> &WidgetBody {
        &self.body
    }

    /// Parent window key, if any
    pub fn parent(&self) -> Option<WindowKey> {
        self.base.parent
    }

    /// Visibility group, if any
    pub fn group(&self) -> Option<&str> {
        self.base.group.as_deref()
    }

    /// Local position
    pub fn position(&self) -> Vec2 {
        self.base.position
    }

    /// Size
    pub fn size(&self) -> Vec2 {
        self.base.size
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        &self.base.text
    }

    /// Boolean output of toggle buttons and checkboxes
    pub fn value(&self) -> Option<bool> {
        self.body.widget().value()
    }

    /// Whether the element takes part in a frame with this active group
    pub fn is_visible_in(&self, active_group: Option<&str>) -> bool {
        self.base.is_visible_in(active_group)
    }

    /// Resize
    pub fn set_size(&mut self, size: Vec2) -> &mut Self {
        self.base.size = size;
        self
    }

    /// Move within the parent's content space
    pub fn set_position(&mut self, position: Vec2) -> &mut Self {
        self.base.position = position;
        self
    }

    /// Replace the text
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.base.text = text.into();
        self
    }

    /// Change the text color
    pub fn set_text_color(&mut self, color: Vec4) -> &mut Self {
        self.base.text_color = color;
        self
    }

    /// Change the text scale
    pub fn scale_text(&mut self, scale: Vec2) -> &mut Self {
        self.base.text_scale = scale;
        self
    }

    /// Center a label on its position (labels only)
    pub fn set_centered(&mut self, centered: bool) -> &mut Self {
        if let WidgetBody::Label(label) = &mut self.body {
            label.centered = centered;
        }
        self
    }

    /// Set checkbox orientation from `"left"` or `"right"` (checkboxes only)
    ///
    /// Unknown values are reported and leave the orientation unchanged.
    pub fn set_checkbox_orientation(&mut self, orientation: &str) -> &mut Self {
        if let WidgetBody::Checkbox(checkbox) = &mut self.body {
            match orientation.parse::<CheckboxOrientation>() {
                Ok(parsed) => checkbox.orientation = parsed,
                Err(err) => {
                    err.report(&format!("set_checkbox_orientation ({})", self.base.id));
                }
            }
        }
        self
    }

    /// Set checkbox orientation (checkboxes only)
    pub fn set_orientation(&mut self, orientation: CheckboxOrientation) -> &mut Self {
        if let WidgetBody::Checkbox(checkbox) = &mut self.body {
            checkbox.orientation = orientation;
        }
        self
    }

    /// Gap between box and label (checkboxes only)
    pub fn set_checkbox_padding(&mut self, padding: f32) -> &mut Self {
        if let WidgetBody::Checkbox(checkbox) = &mut self.body {
            checkbox.padding = padding;
        }
        self
    }

    /// Turn a button into a toggle (buttons only)
    ///
    /// A toggle button flips its output on every press instead of firing its
    /// action. Read the output through [`value`](Self::value).
    pub fn make_toggleable(&mut self) -> &mut Self {
        if let WidgetBody::Button(button) = &mut self.body {
            button.toggleable = true;
        }
        self
    }

    /// Replace the action fired by a momentary button (buttons only)
    pub fn set_action(&mut self, action: impl FnMut() + 'static) -> &mut Self {
        if let WidgetBody::Button(button) = &mut self.body {
            button.action = Some(Box::new(action));
        }
        self
    }

    /// Draw at the given adaptive position
    pub fn draw(&mut self, origin: Vec2, renderer: &mut dyn UIRenderBackend, colors: &ColorScheme) {
        self.body.widget_mut().draw(&self.base, origin, renderer, colors);
    }

    /// Run input at the given adaptive position
    pub fn input(&mut self, origin: Vec2, input: &dyn InputSource) -> Option<WidgetEvent> {
        self.body.widget_mut().input(&self.base, origin, input)
    }
}
