//! Ordered element storage
//!
//! Registry order is draw order among elements that share a parent. Buttons
//! and checkboxes go to the front, labels to the back, so labels stack on top
//! of the interactive widgets in creation order.

use std::collections::VecDeque;

use super::error::UIError;
use super::widgets::{ElementKind, UIElement};

/// Elements in draw order, unique by identifier
#[derive(Debug, Default)]
pub struct ElementRegistry {
    elements: VecDeque<UIElement>,
}

impl ElementRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element at its kind's end of the order
    ///
    /// Fails without touching the registry if the identifier is taken.
    pub fn insert(&mut self, element: UIElement) -> Result<&mut UIElement, UIError> {
        if self.contains(element.id()) {
            return Err(UIError::DuplicateElement(element.id().to_string()));
        }

        match element.kind() {
            ElementKind::Label => {
                self.elements.push_back(element);
                let last = self.elements.len() - 1;
                Ok(&mut self.elements[last])
            }
            ElementKind::Button | ElementKind::Checkbox => {
                self.elements.push_front(element);
                Ok(&mut self.elements[0])
            }
        }
    }

    /// Whether an element with this identifier exists
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Look up an element
    pub fn find(&self, id: &str) -> Option<&UIElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// Look up an element mutably
    pub fn find_mut(&mut self, id: &str) -> Option<&mut UIElement> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    /// Remove and return an element
    pub fn remove(&mut self, id: &str) -> Option<UIElement> {
        let index = self.position(id)?;
        self.elements.remove(index)
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in draw order
    pub fn iter(&self) -> impl Iterator<Item = &UIElement> {
        self.elements.iter()
    }

    /// Elements in draw order, mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut UIElement> {
        self.elements.iter_mut()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }
}
