//! Checkbox widget - a box with a label that flips between checked and unchecked

use std::str::FromStr;

use super::core::{ElementBase, Widget, WidgetEvent};
use crate::config::ColorScheme;
use crate::foundation::math::{Rect, Vec2};
use crate::ui::backend::UIRenderBackend;
use crate::ui::error::UIError;
use crate::ui::input::InputSource;

/// Checkbox visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxState {
    /// Unchecked, pointer elsewhere
    #[default]
    Normal,
    /// Unchecked, pointer over the box
    Hovered,
    /// Checked
    Active,
}

/// Which side of the box the label sits on
///
/// Named after where the label text goes relative to the element position:
/// `Left` draws the label at the position with the box after it, `Right`
/// pins the box at the position with the label after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckboxOrientation {
    /// Label first, box to its right
    #[default]
    Left,
    /// Box first, label to its right
    Right,
}

impl FromStr for CheckboxOrientation {
    type Err = UIError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(UIError::InvalidOrientation(other.to_string())),
        }
    }
}

/// UI checkbox state
#[derive(Debug, Clone)]
pub struct UICheckbox {
    /// Current state
    pub state: CheckboxState,

    /// Label placement
    pub orientation: CheckboxOrientation,

    /// Gap between box and label in pixels
    pub padding: f32,

    /// Box position computed by the last draw, used for hit testing
    box_position: Vec2,
}

impl UICheckbox {
    /// Create an unchecked checkbox
    pub fn new(padding: f32) -> Self {
        Self {
            state: CheckboxState::Normal,
            orientation: CheckboxOrientation::Left,
            padding,
            box_position: Vec2::zeros(),
        }
    }

    /// Whether the checkbox is checked
    pub fn is_checked(&self) -> bool {
        self.state == CheckboxState::Active
    }
}

impl Widget for UICheckbox {
    fn draw(
        &mut self,
        base: &ElementBase,
        origin: Vec2,
        renderer: &mut dyn UIRenderBackend,
        colors: &ColorScheme,
    ) {
        let anchor = origin + base.position;
        // Layout uses the unscaled extent even when the text is drawn scaled
        let text_size = renderer.measure_text(&base.text);
        let text_y = anchor.y + base.size.y / 2.0 - text_size.y / 2.0;

        let text_position = match self.orientation {
            CheckboxOrientation::Left => {
                self.box_position = Vec2::new(anchor.x + text_size.x + self.padding, anchor.y);
                Vec2::new(anchor.x, text_y)
            }
            CheckboxOrientation::Right => {
                self.box_position = anchor;
                Vec2::new(anchor.x + base.size.x + self.padding, text_y)
            }
        };

        renderer.fill_rect(self.box_position, base.size, colors.checkbox_normal);
        renderer.draw_text(text_position, &base.text, base.text_color, base.text_scale);

        let inset = base.size / 10.0;
        let fill = match self.state {
            CheckboxState::Normal => None,
            CheckboxState::Hovered => Some(colors.checkbox_hover),
            CheckboxState::Active => Some(colors.checkbox_active),
        };
        if let Some(color) = fill {
            renderer.fill_rect(self.box_position + inset, base.size - inset * 2.0, color);
        }
    }

    fn input(
        &mut self,
        base: &ElementBase,
        _origin: Vec2,
        input: &dyn InputSource,
    ) -> Option<WidgetEvent> {
        let hovered = Rect::new(self.box_position, base.size).contains(input.mouse_position());
        let checked = self.is_checked();

        if hovered && input.primary().pressed {
            self.state = if checked { CheckboxState::Normal } else { CheckboxState::Active };
            return Some(WidgetEvent::Checked(!checked));
        }

        if !checked {
            self.state = if hovered { CheckboxState::Hovered } else { CheckboxState::Normal };
        }
        None
    }

    fn value(&self) -> Option<bool> {
        Some(self.is_checked())
    }
}
