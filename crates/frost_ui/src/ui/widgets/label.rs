//! Text widget - labels and text display

use super::core::{ElementBase, Widget, WidgetEvent};
use crate::config::ColorScheme;
use crate::foundation::math::Vec2;
use crate::ui::backend::UIRenderBackend;
use crate::ui::input::InputSource;

/// UI text label state
#[derive(Debug, Clone, Default)]
pub struct UILabel {
    /// Center the text on the element position instead of anchoring its top-left corner
    pub centered: bool,
}

impl Widget for UILabel {
    fn draw(
        &mut self,
        base: &ElementBase,
        origin: Vec2,
        renderer: &mut dyn UIRenderBackend,
        _colors: &ColorScheme,
    ) {
        let mut position = origin + base.position;

        if self.centered {
            let extent = renderer.measure_text(&base.text).component_mul(&base.text_scale);
            position -= extent / 2.0;
        }

        renderer.draw_text(position, &base.text, base.text_color, base.text_scale);
    }

    fn input(
        &mut self,
        _base: &ElementBase,
        _origin: Vec2,
        _input: &dyn InputSource,
    ) -> Option<WidgetEvent> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::rendering::UIRenderData;
    use crate::ui::widgets::ElementDesc;

    #[test]
    fn test_label_anchors_top_left() {
        let base = ElementDesc::label("l", "Score", Vec2::new(4.0, 6.0)).into_element_base();
        let mut data = UIRenderData::new();

        UILabel::default().draw(&base, Vec2::new(100.0, 50.0), &mut data, &ColorScheme::default());

        assert_eq!(data.texts().next(), Some((Vec2::new(104.0, 56.0), "Score")));
    }

    #[test]
    fn test_centered_label_uses_scaled_extent() {
        let mut base =
            ElementDesc::label("l", "Score", Vec2::new(100.0, 100.0)).into_element_base();
        base.text_scale = Vec2::new(2.0, 2.0);
        let mut data = UIRenderData::new();

        // "Score" is 40x8, scaled to 80x16
        UILabel { centered: true }.draw(&base, Vec2::zeros(), &mut data, &ColorScheme::default());

        assert_eq!(data.texts().next(), Some((Vec2::new(60.0, 92.0), "Score")));
    }
}
