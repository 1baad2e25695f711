//! Element descriptors
//!
//! An [`ElementDesc`] carries everything needed to create a widget. Parent
//! and group are optional: when left out, the manager fills them from its
//! active window and active group at creation time.

use std::fmt;

use super::button::UIButton;
use super::checkbox::UICheckbox;
use super::core::{ElementBase, ElementKind, UIElement, WidgetBody};
use super::label::UILabel;
use crate::config::UIConfig;
use crate::foundation::math::Vec2;
use crate::ui::window::WindowKey;

enum PendingBody {
    Label,
    Button(Box<dyn FnMut()>),
    Checkbox,
}

/// Creation parameters for a label, button or checkbox
pub struct ElementDesc {
    id: String,
    text: String,
    position: Vec2,
    size: Vec2,
    parent: Option<String>,
    group: Option<String>,
    body: PendingBody,
}

impl ElementDesc {
    fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        position: Vec2,
        size: Vec2,
        body: PendingBody,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            position,
            size,
            parent: None,
            group: None,
            body,
        }
    }

    /// Describe a label
    pub fn label(id: impl Into<String>, text: impl Into<String>, position: Vec2) -> Self {
        Self::new(id, text, position, Vec2::zeros(), PendingBody::Label)
    }

    /// Describe a momentary button that runs `action` on every press
    pub fn button(
        id: impl Into<String>,
        text: impl Into<String>,
        position: Vec2,
        size: Vec2,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self::new(id, text, position, size, PendingBody::Button(Box::new(action)))
    }

    /// Describe a checkbox; `size` is the size of the box
    pub fn checkbox(
        id: impl Into<String>,
        text: impl Into<String>,
        position: Vec2,
        size: Vec2,
    ) -> Self {
        Self::new(id, text, position, size, PendingBody::Checkbox)
    }

    /// Place the element in this window instead of the active one
    #[must_use]
    pub fn parent(mut self, window_id: impl Into<String>) -> Self {
        self.parent = Some(window_id.into());
        self
    }

    /// Tag the element with this group instead of the active one
    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Requested identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Kind that will be created
    pub fn kind(&self) -> ElementKind {
        match self.body {
            PendingBody::Label => ElementKind::Label,
            PendingBody::Button(_) => ElementKind::Button,
            PendingBody::Checkbox => ElementKind::Checkbox,
        }
    }

    /// Explicit parent window id, if one was given
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Explicit group, if one was given
    pub fn explicit_group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Build the element with resolved parent and group
    pub(crate) fn build(
        self,
        parent: Option<WindowKey>,
        group: Option<String>,
        config: &UIConfig,
    ) -> UIElement {
        let base = ElementBase {
            id: self.id,
            parent,
            group,
            position: self.position,
            size: self.size,
            text: self.text,
            text_color: config.colors.text,
            text_scale: config.text_scale,
        };

        let body = match self.body {
            PendingBody::Label => WidgetBody::Label(UILabel::default()),
            PendingBody::Button(action) => WidgetBody::Button(UIButton::new(action)),
            PendingBody::Checkbox => WidgetBody::Checkbox(UICheckbox::new(config.checkbox_padding)),
        };

        UIElement::new(base, body)
    }

    /// Standalone element with default configuration
    #[cfg(test)]
    pub(crate) fn into_element(self) -> UIElement {
        let group = self.group.clone();
        self.build(None, group, &UIConfig::default())
    }

    #[cfg(test)]
    pub(crate) fn into_element_base(self) -> ElementBase {
        self.into_element().base().clone()
    }
}

impl fmt::Debug for ElementDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDesc")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .field("text", &self.text)
            .field("parent", &self.parent)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}
