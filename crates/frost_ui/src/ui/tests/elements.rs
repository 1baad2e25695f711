use std::cell::Cell;
use std::rc::Rc;

use super::Harness;
use crate::events::EventType;
use crate::foundation::math::Vec2;
use crate::ui::widgets::{CheckboxState, ElementDesc, WidgetBody};

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let clicks = Rc::new(Cell::new(0));
    let handle = clicks.clone();
    (clicks, move || handle.set(handle.get() + 1))
}

#[test]
fn test_group_filtering() {
    let mut h = Harness::new();
    h.window("main", 0.0, 0.0, 300.0, 200.0);
    h.ui.add_group("g1").unwrap();
    h.ui.add_group("g2").unwrap();
    h.ui.set_active_window("main").unwrap();

    let (clicks, action) = counter();
    h.ui.set_active_group("g1").unwrap();
    // Screen rect (15, 30)-(95, 50)
    h.ui.add_button("b1", "Apply", Vec2::new(10.0, 10.0), Vec2::new(80.0, 20.0), action)
        .unwrap();
    h.ui.set_active_group("g2").unwrap();
    h.ui.add_label("l2", "Second tab", Vec2::new(10.0, 60.0)).unwrap();

    h.ui.set_active_group("g1").unwrap();
    h.click(20.0, 35.0);
    assert_eq!(clicks.get(), 1);
    assert!(h.drawn("Apply"));
    assert!(!h.drawn("Second tab"));

    h.ui.set_active_group("g2").unwrap();
    h.click(20.0, 35.0);
    assert_eq!(clicks.get(), 1);
    assert!(!h.drawn("Apply"));
    assert!(h.drawn("Second tab"));

    h.ui.clear_active_group();
    h.click(20.0, 35.0);
    assert_eq!(clicks.get(), 2);
    assert!(h.drawn("Apply"));
    assert!(h.drawn("Second tab"));
}

#[test]
fn test_empty_group_is_shown_under_every_tab() {
    let mut h = Harness::new();
    h.ui.add_group("g1").unwrap();
    h.ui.add_group("g2").unwrap();
    h.ui.set_active_group("g1").unwrap();
    h.ui.add_element(ElementDesc::label("status", "Status", Vec2::zeros()).group(""))
        .unwrap();
    h.ui.add_label("page", "Page one", Vec2::new(0.0, 20.0)).unwrap();

    h.frame();
    assert!(h.drawn("Status"));
    assert!(h.drawn("Page one"));

    h.ui.set_active_group("g2").unwrap();
    h.frame();
    assert!(h.drawn("Status"));
    assert!(!h.drawn("Page one"));

    // An empty active group filters nothing
    h.ui.set_active_group("").unwrap();
    h.frame();
    assert_eq!(h.ui.active_group(), None);
    assert!(h.drawn("Status"));
    assert!(h.drawn("Page one"));
}

#[test]
fn test_tab_switch_through_events() {
    let mut h = Harness::new();
    h.window("main", 0.0, 0.0, 300.0, 200.0);
    h.ui.set_active_window("main").unwrap();
    for group in ["tab_1", "tab_2"] {
        h.ui.add_group(group).unwrap();
    }
    h.ui.add_button("tab_1", "One", Vec2::new(0.0, 0.0), Vec2::new(50.0, 20.0), || {})
        .unwrap();
    h.ui.add_button("tab_2", "Two", Vec2::new(60.0, 0.0), Vec2::new(50.0, 20.0), || {})
        .unwrap();
    h.ui.set_active_group("tab_1").unwrap();
    h.ui.add_label("page_1", "Page one", Vec2::new(0.0, 40.0)).unwrap();
    h.ui.set_active_group("tab_2").unwrap();
    h.ui.add_label("page_2", "Page two", Vec2::new(0.0, 40.0)).unwrap();
    h.ui.set_active_group("tab_1").unwrap();

    // "Two" covers (65, 20)-(115, 40) on screen
    h.press(70.0, 25.0);
    for event in h.ui.dispatch_events() {
        if event.event_type == EventType::ButtonClicked {
            let id = event.get_element_id().unwrap().to_string();
            h.ui.set_active_group(&id).unwrap();
        }
    }
    h.release(70.0, 25.0);

    assert_eq!(h.ui.active_group(), Some("tab_2"));
    assert!(h.drawn("Page two"));
    assert!(!h.drawn("Page one"));
    assert!(h.drawn("One"));
}

#[test]
fn test_checkbox_output_matches_state_every_frame() {
    let mut h = Harness::new();
    h.ui.add_checkbox("cb", "Music", Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0))
        .unwrap()
        .set_checkbox_orientation("right");

    let consistent = |h: &Harness| match h.ui.find_element("cb").unwrap().body() {
        WidgetBody::Checkbox(checkbox) => {
            h.ui.element_value("cb") == Some(checkbox.state == CheckboxState::Active)
        }
        _ => false,
    };

    // Box covers (10, 10)-(30, 30)
    let frames: [(f32, f32, Option<bool>); 7] = [
        (15.0, 15.0, None),
        (15.0, 15.0, Some(true)),
        (15.0, 15.0, Some(false)),
        (100.0, 100.0, None),
        (15.0, 15.0, Some(true)),
        (15.0, 15.0, Some(false)),
        (15.0, 15.0, None),
    ];

    let mut expected = false;
    for (x, y, button) in frames {
        h.input.update_mouse_position(x, y);
        if let Some(down) = button {
            h.input.update_mouse_button(crate::ui::input::MouseButton::Left, down);
            if down {
                expected = !expected;
            }
        }
        h.frame();
        assert!(consistent(&h));
        assert_eq!(h.ui.element_value("cb"), Some(expected));
    }

    let toggles: Vec<Option<bool>> = h
        .ui
        .dispatch_events()
        .iter()
        .filter(|e| e.event_type == EventType::CheckboxToggled)
        .map(|e| e.get_active())
        .collect();
    assert_eq!(toggles, [Some(true), Some(false)]);
}

#[test]
fn test_toggle_button_reports_through_value_and_events() {
    let mut h = Harness::new();
    let (clicks, action) = counter();
    h.ui.add_button("mute", "Mute", Vec2::new(0.0, 0.0), Vec2::new(60.0, 20.0), action)
        .unwrap()
        .make_toggleable();

    assert_eq!(h.ui.element_value("mute"), Some(false));
    h.click(10.0, 10.0);
    assert_eq!(h.ui.element_value("mute"), Some(true));
    h.hover(200.0, 200.0);
    assert_eq!(h.ui.element_value("mute"), Some(true));
    h.click(10.0, 10.0);
    assert_eq!(h.ui.element_value("mute"), Some(false));
    assert_eq!(clicks.get(), 0);

    let events = h.ui.dispatch_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event_type == EventType::ButtonToggled));
    assert_eq!(events[0].get_element_id(), Some("mute"));
}

#[test]
fn test_momentary_button_fires_once_per_press() {
    let mut h = Harness::new();
    let (clicks, action) = counter();
    h.ui.add_button("ok", "OK", Vec2::new(0.0, 0.0), Vec2::new(60.0, 20.0), action)
        .unwrap();

    h.press(10.0, 10.0);
    h.hover(10.0, 10.0);
    h.hover(12.0, 10.0);
    h.release(12.0, 10.0);
    assert_eq!(clicks.get(), 1);
    assert_eq!(h.ui.element_value("ok"), None);

    let events = h.ui.dispatch_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::ButtonClicked);
    assert!(events[0].timestamp > 0.0);
}

#[test]
fn test_draw_order_follows_registry_order() {
    let mut h = Harness::new();
    h.ui.add_label("l1", "Label one", Vec2::zeros()).unwrap();
    h.ui.add_button("b1", "Button one", Vec2::zeros(), Vec2::new(10.0, 10.0), || {})
        .unwrap();
    h.ui.add_label("l2", "Label two", Vec2::zeros()).unwrap();
    h.ui.add_button("b2", "Button two", Vec2::zeros(), Vec2::new(10.0, 10.0), || {})
        .unwrap();

    h.frame();

    let drawn: Vec<&str> = h.renderer.texts().map(|(_, text)| text).collect();
    assert_eq!(drawn, ["Button two", "Button one", "Label one", "Label two"]);
}

#[test]
fn test_standalone_elements_draw_before_windows() {
    let mut h = Harness::new();
    h.window("main", 0.0, 0.0, 100.0, 100.0);
    h.ui.add_label("hud", "HUD", Vec2::new(5.0, 5.0)).unwrap();

    h.frame();

    assert_eq!(h.renderer.text_index("HUD"), Some(0));
    assert_eq!(h.renderer.texts().next(), Some((Vec2::new(5.0, 5.0), "HUD")));
}

#[test]
fn test_removed_element_disappears() {
    let mut h = Harness::new();
    h.ui.add_element(ElementDesc::label("gone", "Gone", Vec2::zeros())).unwrap();
    h.frame();
    assert!(h.drawn("Gone"));

    h.ui.remove_element("gone").unwrap();
    h.frame();
    assert!(!h.drawn("Gone"));
    assert_eq!(h.ui.element_count(), 0);
}
