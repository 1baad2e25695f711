//! Frame-level scenarios driving `UIManager::run` with recorded output

mod elements;

use crate::foundation::math::Vec2;
use crate::ui::input::{MouseButton, UIInputProcessor};
use crate::ui::rendering::UIRenderData;
use crate::ui::{UIManager, UIWindow};

/// A manager plus the backend and input it runs against
struct Harness {
    ui: UIManager,
    renderer: UIRenderData,
    input: UIInputProcessor,
}

impl Harness {
    fn new() -> Self {
        Self {
            ui: UIManager::default(),
            renderer: UIRenderData::new(),
            input: UIInputProcessor::new(),
        }
    }

    fn window(&mut self, id: &str, x: f32, y: f32, w: f32, h: f32) {
        self.ui.create_window(id, Vec2::new(x, y), Vec2::new(w, h), id).unwrap();
    }

    /// Run one frame, keeping only this frame's draw calls
    fn frame(&mut self) {
        self.renderer.clear();
        self.ui.run(&mut self.renderer, &self.input);
        self.input.end_frame();
    }

    fn hover(&mut self, x: f32, y: f32) {
        self.input.update_mouse_position(x, y);
        self.frame();
    }

    fn press(&mut self, x: f32, y: f32) {
        self.input.update_mouse_position(x, y);
        self.input.update_mouse_button(MouseButton::Left, true);
        self.frame();
    }

    fn release(&mut self, x: f32, y: f32) {
        self.input.update_mouse_position(x, y);
        self.input.update_mouse_button(MouseButton::Left, false);
        self.frame();
    }

    fn click(&mut self, x: f32, y: f32) {
        self.press(x, y);
        self.release(x, y);
    }

    fn focused(&self) -> Vec<&str> {
        self.ui.windows().filter(|w| w.is_focused()).map(UIWindow::id).collect()
    }

    fn drawn(&self, text: &str) -> bool {
        self.renderer.text_index(text).is_some()
    }
}
