//! Button widget - interactive clickable buttons

use std::fmt;

use super::core::{ElementBase, Widget, WidgetEvent};
use crate::config::ColorScheme;
use crate::foundation::math::{Rect, Vec2, Vec4};
use crate::ui::backend::UIRenderBackend;
use crate::ui::input::InputSource;

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Normal resting state
    #[default]
    Normal,
    /// Mouse is hovering over button
    Hovered,
    /// Button is being pressed (or latched on, for toggle buttons)
    Pressed,
}

/// UI button state
pub struct UIButton {
    /// Current button state
    pub state: ButtonState,

    /// Action fired on each press of a momentary button
    pub action: Option<Box<dyn FnMut()>>,

    /// Toggle mode: presses latch the state instead of firing the action
    pub toggleable: bool,
}

impl UIButton {
    /// Create a momentary button
    pub fn new(action: Box<dyn FnMut()>) -> Self {
        Self {
            state: ButtonState::Normal,
            action: Some(action),
            toggleable: false,
        }
    }

    /// Get the current color based on button state
    pub fn get_current_color(&self, colors: &ColorScheme) -> Vec4 {
        match self.state {
            ButtonState::Normal => colors.button_normal,
            ButtonState::Hovered => colors.button_hover,
            ButtonState::Pressed => colors.button_click,
        }
    }

    fn momentary_input(&mut self, hovered: bool, pressed: bool) -> Option<WidgetEvent> {
        if !hovered {
            self.state = ButtonState::Normal;
            return None;
        }

        if pressed {
            if let Some(action) = self.action.as_mut() {
                action();
            }
            Some(WidgetEvent::Clicked)
        } else {
            self.state = ButtonState::Hovered;
            None
        }
    }

    fn toggle_input(&mut self, hovered: bool, pressed: bool) -> Option<WidgetEvent> {
        let latched = self.state == ButtonState::Pressed;

        if hovered && pressed {
            self.state = if latched { ButtonState::Normal } else { ButtonState::Pressed };
            return Some(WidgetEvent::Toggled(!latched));
        }

        if !latched {
            self.state = if hovered { ButtonState::Hovered } else { ButtonState::Normal };
        }
        None
    }
}

impl Widget for UIButton {
    fn draw(
        &mut self,
        base: &ElementBase,
        origin: Vec2,
        renderer: &mut dyn UIRenderBackend,
        colors: &ColorScheme,
    ) {
        let position = origin + base.position;
        renderer.fill_rect(position, base.size, self.get_current_color(colors));

        // Text is centered on the body using its unscaled extent
        let text_size = renderer.measure_text(&base.text);
        let text_position = Vec2::new(
            position.x + base.size.x / 2.0 - text_size.x / 2.0,
            position.y + base.size.y / 2.0 - text_size.y / 2.0,
        );
        renderer.draw_text(text_position, &base.text, base.text_color, base.text_scale);
    }

    fn input(
        &mut self,
        base: &ElementBase,
        origin: Vec2,
        input: &dyn InputSource,
    ) -> Option<WidgetEvent> {
        let hovered = Rect::new(origin + base.position, base.size).contains(input.mouse_position());
        let pressed = input.primary().pressed;

        if self.toggleable {
            self.toggle_input(hovered, pressed)
        } else {
            self.momentary_input(hovered, pressed)
        }
    }

    fn value(&self) -> Option<bool> {
        self.toggleable.then_some(self.state == ButtonState::Pressed)
    }
}

impl fmt::Debug for UIButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UIButton")
            .field("state", &self.state)
            .field("has_action", &self.action.is_some())
            .field("toggleable", &self.toggleable)
            .finish()
    }
}
