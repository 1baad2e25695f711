//! Overlay windows
//!
//! A window is a draggable, closable, focusable rectangle with a title bar.
//! Widgets parented to a window are laid out in its content space, which
//! starts below the title bar and inside the side border.

use slotmap::new_key_type;

use super::backend::UIRenderBackend;
use super::input::InputSource;
use super::widgets::ButtonState;
use crate::config::{ColorScheme, WindowStyle};
use crate::foundation::math::{Rect, Vec2};

new_key_type! {
    /// Arena key of a window inside a [`UIManager`](crate::ui::UIManager)
    pub struct WindowKey;
}

/// What a window's input step did this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WindowResponse {
    /// The blocking window must lose focus to this one
    pub steal_focus: bool,
    /// Focus went from false to true
    pub gained_focus: bool,
    /// Focus went from true to false
    pub lost_focus: bool,
    /// The close control was released while focused
    pub closed: bool,
    /// A drag started this frame
    pub drag_started: bool,
    /// A drag in progress ended this frame
    pub drag_ended: bool,
}

/// A movable, closable window
#[derive(Debug, Clone)]
pub struct UIWindow {
    id: String,
    position: Vec2,
    size: Vec2,
    title: String,
    border_thickness: f32,
    top_border_thickness: f32,
    close_button_fraction: f32,
    focused: bool,
    closed: bool,
    close_state: ButtonState,
    dragging: bool,
    drag_offset: Vec2,
}

impl UIWindow {
    /// Create an open, unfocused window with the given chrome geometry
    pub fn new(
        id: impl Into<String>,
        position: Vec2,
        size: Vec2,
        title: impl Into<String>,
        style: &WindowStyle,
    ) -> Self {
        Self {
            id: id.into(),
            position,
            size,
            title: title.into(),
            border_thickness: style.border_thickness,
            top_border_thickness: style.top_border_thickness,
            close_button_fraction: style.close_button_fraction,
            focused: false,
            closed: false,
            close_state: ButtonState::Normal,
            dragging: false,
            drag_offset: Vec2::zeros(),
        }
    }

    /// Window identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-left corner in screen pixels
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Outer size including borders
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Title bar text
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Outer bounds
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Left, right and bottom border width
    pub fn border_thickness(&self) -> f32 {
        self.border_thickness
    }

    /// Title bar height
    pub fn top_border_thickness(&self) -> f32 {
        self.top_border_thickness
    }

    /// Size of the content area available to widgets
    pub fn window_space(&self) -> Vec2 {
        Vec2::new(
            self.size.x - self.border_thickness * 2.0,
            self.size.y - self.top_border_thickness,
        )
    }

    /// Screen position of the content area's top-left corner
    pub fn content_origin(&self) -> Vec2 {
        self.position + Vec2::new(self.border_thickness, self.top_border_thickness)
    }

    /// Whether this window currently has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether this window is closed (not drawn, no input)
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether a title bar drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Visual state of the close control
    pub fn close_state(&self) -> ButtonState {
        self.close_state
    }

    /// Move the window
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Resize the window
    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    /// Replace the title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Change the side and bottom border width
    pub fn set_border_thickness(&mut self, thickness: f32) {
        self.border_thickness = thickness;
    }

    /// Change the title bar height
    pub fn set_top_border_thickness(&mut self, thickness: f32) {
        self.top_border_thickness = thickness;
    }

    /// Close (`true`) or reopen (`false`) the window
    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Set the focus flag directly
    ///
    /// Prefer [`UIManager::focus_window`](crate::ui::UIManager::focus_window),
    /// which keeps at most one window focused.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Close control bounds, pinned to the right end of the title bar
    pub fn close_button_rect(&self) -> Rect {
        let width = self.size.x * self.close_button_fraction;
        Rect::new(
            Vec2::new(self.position.x + self.size.x - width, self.position.y),
            Vec2::new(width, self.top_border_thickness),
        )
    }

    /// Draggable part of the title bar (everything left of the close control)
    pub fn title_bar_rect(&self) -> Rect {
        let width = self.size.x - self.close_button_rect().size.x;
        Rect::new(self.position, Vec2::new(width, self.top_border_thickness))
    }

    /// Paint background, borders, title, close control and the focus overlay
    pub fn draw(&self, renderer: &mut dyn UIRenderBackend, colors: &ColorScheme) {
        let (pos, size) = (self.position, self.size);
        let border = self.border_thickness;
        let top = self.top_border_thickness;

        renderer.fill_rect(pos, size, colors.window_background);

        // Left, right, bottom, title bar
        renderer.fill_rect(pos, Vec2::new(border, size.y), colors.window_border);
        let right = Vec2::new(pos.x + size.x - border, pos.y);
        let bottom = Vec2::new(pos.x, pos.y + size.y - border);
        renderer.fill_rect(right, Vec2::new(border, size.y), colors.window_border);
        renderer.fill_rect(bottom, Vec2::new(size.x, border), colors.window_border);
        renderer.fill_rect(pos, Vec2::new(size.x, top), colors.window_border);

        let title_size = renderer.measure_text(&self.title);
        let title_position = Vec2::new(
            pos.x + size.x / 2.0 - title_size.x / 2.0,
            pos.y + top / 2.0 - title_size.y / 2.0,
        );
        renderer.draw_text(
            title_position,
            &self.title,
            colors.window_title_text,
            Vec2::new(1.0, 1.0),
        );

        let close = self.close_button_rect();
        let close_color = match self.close_state {
            ButtonState::Normal => colors.close_button_normal,
            ButtonState::Hovered => colors.close_button_hover,
            ButtonState::Pressed => colors.close_button_click,
        };
        renderer.fill_rect(close.position, close.size, close_color);

        let glyph_size = renderer.measure_text("X");
        let glyph_position = Vec2::new(
            close.position.x + close.size.x / 2.0 - glyph_size.x / 2.0,
            close.position.y + top / 2.0 - glyph_size.y / 2.0,
        );
        renderer.draw_text(glyph_position, "X", colors.close_button_glyph, Vec2::new(1.0, 1.0));

        if !self.focused {
            renderer.fill_rect(pos, Vec2::new(size.x, top), colors.window_inactive_overlay);
        }
    }

    /// Run close, drag and focus handling for one frame
    ///
    /// `blocker` is the bounds of another open, focused window overlapping
    /// this one, if any. A press inside the blocker belongs to it and is
    /// ignored here for focus purposes.
    pub(crate) fn input(
        &mut self,
        input: &dyn InputSource,
        blocker: Option<Rect>,
    ) -> WindowResponse {
        let mut response = WindowResponse::default();
        let mouse = input.mouse_position();
        let primary = input.primary();

        // Close control
        if self.close_button_rect().contains(mouse) {
            if primary.is_active() {
                if primary.released && self.focused {
                    self.closed = true;
                    response.closed = true;
                }
                self.close_state = ButtonState::Pressed;
            } else {
                self.close_state = ButtonState::Hovered;
            }
        } else {
            self.close_state = ButtonState::Normal;
        }

        // Title bar drag
        if self.title_bar_rect().contains(mouse) || self.dragging {
            if primary.pressed {
                response.drag_started = !self.dragging;
                self.dragging = true;
                self.drag_offset = mouse - self.position;
            }

            if primary.held && self.dragging && self.focused {
                self.position = mouse - self.drag_offset;
            }
        }

        if primary.released {
            response.drag_ended = self.dragging;
            self.dragging = false;
        }

        // Focus arbitration
        if primary.pressed {
            let inside = self.rect().contains(mouse);
            match blocker {
                Some(other) if other.contains(mouse) => {}
                Some(_) if inside => {
                    response.steal_focus = true;
                    self.gain_focus(&mut response);
                }
                None if inside => self.gain_focus(&mut response),
                _ => {
                    response.lost_focus = self.focused;
                    self.focused = false;
                }
            }
        }

        response
    }

    fn gain_focus(&mut self, response: &mut WindowResponse) {
        response.gained_focus = !self.focused;
        self.focused = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::input::{MouseButton, UIInputProcessor};
    use crate::ui::rendering::{UIRenderCommand, UIRenderData};
    use approx::assert_relative_eq;

    fn window() -> UIWindow {
        UIWindow::new(
            "main",
            Vec2::new(50.0, 25.0),
            Vec2::new(400.0, 250.0),
            "Main",
            &WindowStyle::default(),
        )
    }

    fn press_at(x: f32, y: f32) -> UIInputProcessor {
        let mut input = UIInputProcessor::new();
        input.update_mouse_position(x, y);
        input.update_mouse_button(MouseButton::Left, true);
        input
    }

    #[test]
    fn test_window_space_and_content_origin() {
        let window = window();
        assert_eq!(window.window_space(), Vec2::new(390.0, 230.0));
        assert_eq!(window.content_origin(), Vec2::new(55.0, 45.0));
    }

    #[test]
    fn test_close_and_title_regions_split_the_bar() {
        let window = window();
        let close = window.close_button_rect();
        let title = window.title_bar_rect();

        assert_relative_eq!(close.position.x, 410.0);
        assert_relative_eq!(close.size.x, 40.0);
        assert_relative_eq!(title.right(), close.position.x);
        assert!(!title.overlaps(&close));
    }

    #[test]
    fn test_close_control_states() {
        let mut window = window();
        window.set_focused(true);

        let mut input = UIInputProcessor::new();
        input.update_mouse_position(430.0, 30.0);
        window.input(&input, None);
        assert_eq!(window.close_state(), ButtonState::Hovered);

        input.update_mouse_button(MouseButton::Left, true);
        window.input(&input, None);
        assert_eq!(window.close_state(), ButtonState::Pressed);
        assert!(!window.is_closed());

        input.end_frame();
        input.update_mouse_button(MouseButton::Left, false);
        let response = window.input(&input, None);
        assert!(response.closed);
        assert!(window.is_closed());
    }

    #[test]
    fn test_unfocused_window_ignores_close_release() {
        let mut window = window();
        let mut input = UIInputProcessor::new();
        input.update_mouse_position(430.0, 30.0);
        input.update_mouse_button(MouseButton::Left, true);
        input.update_mouse_button(MouseButton::Left, false);

        // Press inside focuses during this same call, after the close check
        window.input(&input, None);
        assert!(!window.is_closed());
    }

    #[test]
    fn test_drag_moves_focused_window() {
        let mut window = window();
        window.set_focused(true);

        let mut input = press_at(100.0, 30.0);
        let response = window.input(&input, None);
        assert!(response.drag_started);
        assert!(window.is_dragging());
        assert_eq!(window.position(), Vec2::new(50.0, 25.0));

        input.end_frame();
        input.update_mouse_position(130.0, 70.0);
        window.input(&input, None);
        assert_eq!(window.position(), Vec2::new(80.0, 65.0));

        input.end_frame();
        input.update_mouse_position(900.0, 900.0);
        input.update_mouse_button(MouseButton::Left, false);
        let response = window.input(&input, None);
        assert!(response.drag_ended);
        assert!(!window.is_dragging());
        assert_eq!(window.position(), Vec2::new(80.0, 65.0));
    }

    #[test]
    fn test_unfocused_window_does_not_move() {
        let mut window = window();
        // Pointer inside the title bar but a blocker claims the press
        let blocker = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(200.0, 200.0));
        let mut input = press_at(100.0, 30.0);
        window.input(&input, Some(blocker));
        assert!(!window.is_focused());

        input.end_frame();
        input.update_mouse_position(150.0, 80.0);
        window.input(&input, Some(blocker));
        assert_eq!(window.position(), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn test_focus_without_blocker() {
        let mut window = window();

        let response = window.input(&press_at(200.0, 200.0), None);
        assert!(response.gained_focus);
        assert!(window.is_focused());

        let response = window.input(&press_at(5.0, 5.0), None);
        assert!(response.lost_focus);
        assert!(!window.is_focused());
    }

    #[test]
    fn test_press_inside_steals_from_blocker() {
        let mut window = window();
        let blocker = Rect::new(Vec2::new(300.0, 200.0), Vec2::new(300.0, 300.0));

        let response = window.input(&press_at(100.0, 100.0), Some(blocker));
        assert!(response.steal_focus);
        assert!(window.is_focused());
    }

    #[test]
    fn test_press_on_blocker_is_ignored() {
        let mut window = window();
        window.set_focused(true);
        let blocker = Rect::new(Vec2::new(300.0, 200.0), Vec2::new(300.0, 300.0));

        let response = window.input(&press_at(350.0, 250.0), Some(blocker));
        assert!(!response.steal_focus);
        assert!(window.is_focused());
    }

    #[test]
    fn test_draw_overlay_only_when_unfocused() {
        let colors = ColorScheme::default();
        let mut window = window();

        let mut data = UIRenderData::new();
        window.draw(&mut data, &colors);
        let last = data.commands.last().cloned();
        assert!(matches!(
            last,
            Some(UIRenderCommand::Rect { color, .. }) if color == colors.window_inactive_overlay
        ));

        window.set_focused(true);
        data.clear();
        window.draw(&mut data, &colors);
        assert!(matches!(
            data.commands.last(),
            Some(UIRenderCommand::Text { text, .. }) if text == "X"
        ));
        assert_eq!(data.text_index("Main"), Some(5));
    }
}
