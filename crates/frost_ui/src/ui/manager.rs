//! UI Manager
//!
//! Central UI system that owns windows, elements and groups, and runs the
//! per-frame draw and input pass over all of them.

use slotmap::SlotMap;

use super::backend::UIRenderBackend;
use super::error::UIError;
use super::input::InputSource;
use super::registry::ElementRegistry;
use super::widgets::{ElementDesc, ElementKind, UIElement, WidgetEvent};
use super::window::{UIWindow, WindowKey, WindowResponse};
use crate::config::UIConfig;
use crate::events::{Event, EventArg, EventSystem, EventType};
use crate::foundation::math::{Rect, Vec2};

/// Central UI management system
///
/// Registration calls happen between frames; [`run`](Self::run) is called
/// exactly once per host frame. At most one window is focused after every
/// frame's input pass.
pub struct UIManager {
    /// Window storage
    windows: SlotMap<WindowKey, UIWindow>,

    /// Z-order, back to front
    window_order: Vec<WindowKey>,

    /// Elements in draw order
    elements: ElementRegistry,

    /// Registered group names
    groups: Vec<String>,

    /// Implicit parent for new elements
    active_window: Option<WindowKey>,

    /// Implicit group for new elements and the live visibility filter
    active_group: Option<String>,

    /// Colors and defaults
    config: UIConfig,

    /// Event system for UI interactions
    event_system: EventSystem,

    /// Frame counter for timestamps
    frame_counter: u64,
}

impl UIManager {
    /// Create a new UI manager
    pub fn new(config: UIConfig) -> Self {
        Self {
            windows: SlotMap::with_key(),
            window_order: Vec::new(),
            elements: ElementRegistry::new(),
            groups: Vec::new(),
            active_window: None,
            active_group: None,
            config,
            event_system: EventSystem::new(),
            frame_counter: 0,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &UIConfig {
        &self.config
    }

    /// Mutable configuration; color changes apply from the next frame
    pub fn config_mut(&mut self) -> &mut UIConfig {
        &mut self.config
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_counter
    }

    // ----- Windows -----

    /// Create a window with the configured chrome geometry
    ///
    /// The first window ever created starts focused.
    pub fn create_window(
        &mut self,
        id: impl Into<String>,
        position: Vec2,
        size: Vec2,
        title: impl Into<String>,
    ) -> Result<&mut UIWindow, UIError> {
        let id = id.into();
        if self.key_of(&id).is_some() {
            return Err(UIError::DuplicateWindow(id).report("create_window"));
        }

        let mut window = UIWindow::new(id, position, size, title, &self.config.window);
        if self.windows.is_empty() {
            window.set_focused(true);
        }

        log::debug!("Created window '{}'", window.id());
        let key = self.windows.insert(window);
        self.window_order.push(key);
        Ok(&mut self.windows[key])
    }

    /// Close a window: it stops drawing and taking input, but stays registered
    pub fn close_window(&mut self, id: &str) -> Result<(), UIError> {
        let window = self.window_mut_or_report(id, "close_window")?;
        window.set_closed(true);
        window.set_focused(false);
        log::debug!("Closed window '{id}'");
        Ok(())
    }

    /// Reopen a closed window (unfocused)
    pub fn reopen_window(&mut self, id: &str) -> Result<(), UIError> {
        let window = self.window_mut_or_report(id, "reopen_window")?;
        window.set_closed(false);
        log::debug!("Reopened window '{id}'");
        Ok(())
    }

    /// Give a window exclusive focus; it moves on top during the next frame
    pub fn focus_window(&mut self, id: &str) -> Result<(), UIError> {
        let key = self.key_or_report(id, "focus_window")?;
        for (other, window) in &mut self.windows {
            window.set_focused(other == key);
        }
        log::debug!("Focused window '{id}'");
        Ok(())
    }

    /// Look up a window, logging a diagnostic on a miss
    pub fn find_window(&self, id: &str) -> Option<&UIWindow> {
        let key = self.key_or_report(id, "find_window").ok()?;
        self.windows.get(key)
    }

    /// Look up a window mutably, logging a diagnostic on a miss
    pub fn find_window_mut(&mut self, id: &str) -> Option<&mut UIWindow> {
        self.window_mut_or_report(id, "find_window_mut").ok()
    }

    /// All windows back to front, closed ones included
    pub fn windows(&self) -> impl Iterator<Item = &UIWindow> {
        self.window_order.iter().filter_map(|key| self.windows.get(*key))
    }

    /// Number of registered windows
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// The focused window, if any
    pub fn focused_window(&self) -> Option<&UIWindow> {
        self.windows().find(|window| window.is_focused())
    }

    /// Make a window the implicit parent of new elements
    pub fn set_active_window(&mut self, id: &str) -> Result<(), UIError> {
        let key = self.key_or_report(id, "set_active_window")?;
        self.active_window = Some(key);
        Ok(())
    }

    /// New elements without an explicit parent become standalone
    pub fn clear_active_window(&mut self) {
        self.active_window = None;
    }

    /// Current implicit parent window
    pub fn active_window(&self) -> Option<&UIWindow> {
        self.active_window.and_then(|key| self.windows.get(key))
    }

    // ----- Groups -----

    /// Register a group name
    pub fn add_group(&mut self, name: impl Into<String>) -> Result<(), UIError> {
        let name = name.into();
        if self.groups.contains(&name) {
            return Err(UIError::DuplicateGroup(name).report("add_group"));
        }
        self.groups.push(name);
        Ok(())
    }

    /// Registered group names in registration order
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Select the group that is shown and tagged onto new elements
    ///
    /// Unknown groups are rejected and leave the active group unchanged.
    /// The empty name clears the active group.
    pub fn set_active_group(&mut self, name: &str) -> Result<(), UIError> {
        if name.is_empty() {
            self.clear_active_group();
            return Ok(());
        }
        if !self.groups.iter().any(|group| group == name) {
            return Err(UIError::MissingGroup(name.to_string()).report("set_active_group"));
        }
        log::debug!("Active group '{name}'");
        self.active_group = Some(name.to_string());
        Ok(())
    }

    /// Show every group and stop tagging new elements
    pub fn clear_active_group(&mut self) {
        log::debug!("Active group cleared");
        self.active_group = None;
    }

    /// Current active group
    pub fn active_group(&self) -> Option<&str> {
        self.active_group.as_deref()
    }

    // ----- Elements -----

    /// Register an element
    ///
    /// An explicit parent must name an existing window; without one the
    /// element goes into the active window, or stands alone if none is set.
    /// An explicit group wins over the active group, and an explicit empty
    /// group leaves the element ungrouped. Both are resolved now
    /// and do not follow later changes to the active window or group.
    pub fn add_element(&mut self, desc: ElementDesc) -> Result<&mut UIElement, UIError> {
        let operation = match desc.kind() {
            ElementKind::Label => "add_label",
            ElementKind::Button => "add_button",
            ElementKind::Checkbox => "add_checkbox",
        };

        let parent = match desc.parent_id() {
            Some(id) => Some(self.key_or_report(id, operation)?),
            None => self.active_window,
        };
        let group = match desc.explicit_group() {
            Some("") => None,
            Some(group) => Some(group.to_string()),
            None => self.active_group.clone(),
        };

        let element = desc.build(parent, group, &self.config);
        self.elements.insert(element).map_err(|err| err.report(operation))
    }

    /// Add a label to the active window and group
    pub fn add_label(
        &mut self,
        id: impl Into<String>,
        text: impl Into<String>,
        position: Vec2,
    ) -> Result<&mut UIElement, UIError> {
        self.add_element(ElementDesc::label(id, text, position))
    }

    /// Add a momentary button to the active window and group
    pub fn add_button(
        &mut self,
        id: impl Into<String>,
        text: impl Into<String>,
        position: Vec2,
        size: Vec2,
        action: impl FnMut() + 'static,
    ) -> Result<&mut UIElement, UIError> {
        self.add_element(ElementDesc::button(id, text, position, size, action))
    }

    /// Add a checkbox to the active window and group
    pub fn add_checkbox(
        &mut self,
        id: impl Into<String>,
        text: impl Into<String>,
        position: Vec2,
        size: Vec2,
    ) -> Result<&mut UIElement, UIError> {
        self.add_element(ElementDesc::checkbox(id, text, position, size))
    }

    /// Remove an element and hand it back
    pub fn remove_element(&mut self, id: &str) -> Result<UIElement, UIError> {
        self.elements
            .remove(id)
            .ok_or_else(|| UIError::MissingElement(id.to_string()).report("remove_element"))
    }

    /// Whether an element with this identifier exists (no diagnostic on a miss)
    pub fn contains_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    /// Look up an element, logging a diagnostic on a miss
    pub fn find_element(&self, id: &str) -> Option<&UIElement> {
        let element = self.elements.find(id);
        if element.is_none() {
            UIError::MissingElement(id.to_string()).report("find_element");
        }
        element
    }

    /// Look up an element mutably, e.g. to chain setters
    pub fn find_element_mut(&mut self, id: &str) -> Option<&mut UIElement> {
        if !self.elements.contains(id) {
            UIError::MissingElement(id.to_string()).report("find_element_mut");
        }
        self.elements.find_mut(id)
    }

    /// Number of registered elements
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Elements in draw order
    pub fn elements(&self) -> impl Iterator<Item = &UIElement> {
        self.elements.iter()
    }

    /// Boolean output of a toggle button or checkbox
    pub fn element_value(&self, id: &str) -> Option<bool> {
        self.elements.find(id).and_then(UIElement::value)
    }

    // ----- Events -----

    /// Get event system reference
    pub fn event_system(&self) -> &EventSystem {
        &self.event_system
    }

    /// Get event system mutable reference, e.g. to register handlers
    pub fn event_system_mut(&mut self) -> &mut EventSystem {
        &mut self.event_system
    }

    /// Deliver events raised by past frames and return them in order
    pub fn dispatch_events(&mut self) -> Vec<Event> {
        self.event_system.dispatch()
    }

    // ----- Frame -----

    /// Draw and update everything for one frame
    ///
    /// 1. Standalone elements draw, then take input, in registry order.
    /// 2. Open focused windows move to the top of the z-order.
    /// 3. Windows take input front to back, so a press on the top window is
    ///    never seen as a press on a window beneath it.
    /// 4. Windows draw back to front, each followed by its elements. Elements
    ///    only take input while their window is focused.
    ///
    /// Elements outside the active group are skipped in every step.
    pub fn run(&mut self, renderer: &mut dyn UIRenderBackend, input: &dyn InputSource) {
        self.frame_counter += 1;
        #[allow(clippy::cast_precision_loss)]
        let timestamp = self.frame_counter as f64;
        let mut raised = Vec::new();

        self.run_standalone(renderer, input, timestamp, &mut raised);
        self.raise_focused_windows();
        self.run_window_input(input, timestamp, &mut raised);
        self.draw_windows(renderer, input, timestamp, &mut raised);

        for event in raised {
            self.event_system.send(event);
        }
    }

    fn run_standalone(
        &mut self,
        renderer: &mut dyn UIRenderBackend,
        input: &dyn InputSource,
        timestamp: f64,
        raised: &mut Vec<Event>,
    ) {
        let colors = &self.config.colors;
        let active_group = self.active_group.as_deref();

        for element in self.elements.iter_mut() {
            if element.parent().is_some() || !element.is_visible_in(active_group) {
                continue;
            }
            element.draw(Vec2::zeros(), renderer, colors);
            if let Some(event) = element.input(Vec2::zeros(), input) {
                raised.push(widget_event(element.id(), event, timestamp));
            }
        }
    }

    fn raise_focused_windows(&mut self) {
        let windows = &self.windows;
        let (focused, rest): (Vec<WindowKey>, Vec<WindowKey>) = self
            .window_order
            .iter()
            .partition(|key| windows.get(**key).is_some_and(|w| w.is_focused() && !w.is_closed()));

        self.window_order = rest;
        self.window_order.extend(focused);
    }

    fn run_window_input(
        &mut self,
        input: &dyn InputSource,
        timestamp: f64,
        raised: &mut Vec<Event>,
    ) {
        for index in (0..self.window_order.len()).rev() {
            let key = self.window_order[index];
            let Some(window) = self.windows.get(key) else { continue };
            if window.is_closed() {
                continue;
            }

            let blocker = self.find_blocker(key, window.rect());
            let blocker_rect = blocker
                .and_then(|other| self.windows.get(other))
                .map(UIWindow::rect);

            let Some(window) = self.windows.get_mut(key) else { continue };
            let response = window.input(input, blocker_rect);
            window_events(window, response, timestamp, raised);

            if response.steal_focus {
                if let Some(other) = blocker.and_then(|other| self.windows.get_mut(other)) {
                    other.set_focused(false);
                    log::debug!("Window '{}' lost focus", other.id());
                }
            }
        }
    }

    /// First other window in z-order that is open, focused and overlaps `rect`
    fn find_blocker(&self, key: WindowKey, rect: Rect) -> Option<WindowKey> {
        self.window_order.iter().copied().find(|&other| {
            other != key
                && self
                    .windows
                    .get(other)
                    .is_some_and(|w| !w.is_closed() && w.is_focused() && w.rect().overlaps(&rect))
        })
    }

    fn draw_windows(
        &mut self,
        renderer: &mut dyn UIRenderBackend,
        input: &dyn InputSource,
        timestamp: f64,
        raised: &mut Vec<Event>,
    ) {
        let colors = &self.config.colors;
        let active_group = self.active_group.as_deref();

        for &key in &self.window_order {
            let Some(window) = self.windows.get_mut(key) else { continue };
            if window.is_closed() {
                window.set_focused(false);
                continue;
            }

            window.draw(renderer, colors);
            let origin = window.content_origin();
            let focused = window.is_focused();

            for element in self.elements.iter_mut() {
                if element.parent() != Some(key) || !element.is_visible_in(active_group) {
                    continue;
                }
                element.draw(origin, renderer, colors);
                if focused {
                    if let Some(event) = element.input(origin, input) {
                        raised.push(widget_event(element.id(), event, timestamp));
                    }
                }
            }
        }
    }

    fn key_of(&self, id: &str) -> Option<WindowKey> {
        self.window_order
            .iter()
            .copied()
            .find(|key| self.windows.get(*key).is_some_and(|w| w.id() == id))
    }

    fn key_or_report(&self, id: &str, operation: &str) -> Result<WindowKey, UIError> {
        self.key_of(id)
            .ok_or_else(|| UIError::MissingWindow(id.to_string()).report(operation))
    }

    fn window_mut_or_report(
        &mut self,
        id: &str,
        operation: &str,
    ) -> Result<&mut UIWindow, UIError> {
        let key = self.key_or_report(id, operation)?;
        self.windows
            .get_mut(key)
            .ok_or_else(|| UIError::MissingWindow(id.to_string()))
    }
}

impl Default for UIManager {
    fn default() -> Self {
        Self::new(UIConfig::default())
    }
}

fn widget_event(id: &str, event: WidgetEvent, timestamp: f64) -> Event {
    let (event_type, active) = match event {
        WidgetEvent::Clicked => (EventType::ButtonClicked, None),
        WidgetEvent::Toggled(active) => (EventType::ButtonToggled, Some(active)),
        WidgetEvent::Checked(active) => (EventType::CheckboxToggled, Some(active)),
    };
    log::debug!("{event_type:?} '{id}'");

    let event = Event::new(event_type, timestamp)
        .with_arg("element_id", EventArg::ElementId(id.to_string()));
    match active {
        Some(active) => event.with_arg("active", EventArg::Active(active)),
        None => event,
    }
}

fn window_events(
    window: &UIWindow,
    response: WindowResponse,
    timestamp: f64,
    raised: &mut Vec<Event>,
) {
    let window_id = || EventArg::WindowId(window.id().to_string());

    if response.gained_focus {
        log::debug!("Window '{}' gained focus", window.id());
        raised.push(
            Event::new(EventType::WindowFocused, timestamp).with_arg("window_id", window_id()),
        );
    }
    if response.lost_focus {
        log::debug!("Window '{}' lost focus", window.id());
    }
    if response.drag_started {
        log::debug!("Window '{}' drag started", window.id());
    }
    if response.drag_ended {
        let position = window.position();
        log::debug!("Window '{}' moved to ({}, {})", window.id(), position.x, position.y);
        raised.push(
            Event::new(EventType::WindowMoved, timestamp)
                .with_arg("window_id", window_id())
                .with_arg("position", EventArg::Position(position.x, position.y)),
        );
    }
    if response.closed {
        log::debug!("Window '{}' closed", window.id());
        raised.push(
            Event::new(EventType::WindowClosed, timestamp).with_arg("window_id", window_id()),
        );
    }
}
