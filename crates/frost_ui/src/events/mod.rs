//! Event system for overlay interactions
//!
//! Key principles:
//! - Key-value arguments (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Events raised during a frame are queued and delivered after it, so
//!   handlers and the host may freely change the registry in response

use std::collections::HashMap;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Momentary button fired its action
    ButtonClicked,
    /// Toggle button changed state
    ButtonToggled,
    /// Checkbox changed state
    CheckboxToggled,
    /// Window gained focus
    WindowFocused,
    /// Window was closed through its close control
    WindowClosed,
    /// Window drag finished
    WindowMoved,
}

/// Variant for type-safe event arguments
/// Uses key-value pairs to avoid order dependency problems
#[derive(Debug, Clone, PartialEq)]
pub enum EventArg {
    /// Element identifier
    ElementId(String),
    /// Window identifier
    WindowId(String),
    /// Toggle or checkbox output
    Active(bool),
    /// Position coordinates
    Position(f32, f32),
}

/// Event with type ID and key-value arguments
#[derive(Debug, Clone)]
pub struct Event {
    /// Type of event
    pub event_type: EventType,
    /// Frame number the event was raised in
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl Event {
    /// Create a new event with the given type and timestamp
    pub fn new(event_type: EventType, timestamp: f64) -> Self {
        Self {
            event_type,
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Add an argument to the event (builder pattern)
    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get element_id argument if present
    pub fn get_element_id(&self) -> Option<&str> {
        if let Some(EventArg::ElementId(id)) = self.get_arg("element_id") {
            Some(id)
        } else {
            None
        }
    }

    /// Get window_id argument if present
    pub fn get_window_id(&self) -> Option<&str> {
        if let Some(EventArg::WindowId(id)) = self.get_arg("window_id") {
            Some(id)
        } else {
            None
        }
    }

    /// Get active argument if present
    pub fn get_active(&self) -> Option<bool> {
        if let Some(EventArg::Active(active)) = self.get_arg("active") {
            Some(*active)
        } else {
            None
        }
    }

    /// Get position argument if present
    pub fn get_position(&self) -> Option<(f32, f32)> {
        if let Some(EventArg::Position(x, y)) = self.get_arg("position") {
            Some((*x, *y))
        } else {
            None
        }
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &Event) -> bool;
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
pub struct EventSystem {
    queue: Vec<Event>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific event type
    /// Only handlers registered for this type will be notified
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers
            .entry(event_type)
            .or_default()
            .push(handler);
    }

    /// Queue an event for delivery on the next dispatch
    pub fn send(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Number of events waiting for dispatch
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Dispatch all pending events
    ///
    /// Every queued event is offered to its registered handlers and then
    /// returned to the caller in the order it was raised.
    pub fn dispatch(&mut self) -> Vec<Event> {
        let events = std::mem::take(&mut self.queue);
        for event in &events {
            self.dispatch_event(event);
        }
        events
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &Event) {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    // Event consumed, stop forwarding
                    break;
                }
            }
        }
    }

    /// Clear all queued events
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}
