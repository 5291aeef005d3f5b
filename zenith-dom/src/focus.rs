use crate::element::{walk, Element};

/// Collect the IDs of all elements that can take focus, in document order.
///
/// Disabled elements are skipped.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    walk(element, &mut |el| {
        if el.focusable && !el.disabled {
            result.push(el.id.clone());
        }
    });
    result
}

/// Mark the element with `id` as focused and every other element as not.
pub fn apply_focus(element: &mut Element, id: Option<&str>) {
    element.focused = id == Some(element.id.as_str());
    if let crate::element::Content::Children(children) = &mut element.content {
        for child in children {
            apply_focus(child, id);
        }
    }
}

/// Keyboard focus tracking across re-renders.
///
/// Focus is held by element ID, so it survives the tree being rebuilt as
/// long as the focused element keeps its ID.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Drop focus from an element that no longer exists, falling back to the
    /// first focusable element.
    pub fn sync(&mut self, root: &Element) {
        let focusable = collect_focusable(root);
        let still_there = self
            .focused
            .as_ref()
            .is_some_and(|id| focusable.iter().any(|f| f == id));
        if !still_there {
            self.focused = focusable.into_iter().next();
        }
    }

    /// Move focus to the next focusable element, wrapping around.
    pub fn focus_next(&mut self, root: &Element) {
        self.step(root, 1);
    }

    /// Move focus to the previous focusable element, wrapping around.
    pub fn focus_prev(&mut self, root: &Element) {
        self.step(root, -1);
    }

    fn step(&mut self, root: &Element, delta: isize) {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            self.focused = None;
            return;
        }

        let len = focusable.len() as isize;
        let next = match self
            .focused
            .as_ref()
            .and_then(|id| focusable.iter().position(|f| f == id))
        {
            Some(current) => (current as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.focused = Some(focusable[next as usize].clone());
    }
}
