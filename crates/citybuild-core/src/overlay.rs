//! Open/close state of a scoped overlay with an optional selected item.

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState<T> {
    is_open: bool,
    selected: Option<T>,
}

impl<T> Default for OverlayState<T> {
    fn default() -> Self {
        Self {
            is_open: false,
            selected: None,
        }
    }
}

impl<T> OverlayState<T> {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Opens the overlay without changing the selection.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Selects `item` and opens the overlay.
    pub fn open_with(&mut self, item: T) {
        self.selected = Some(item);
        self.is_open = true;
    }

    /// Closes the overlay and clears the selection.
    pub fn close(&mut self) {
        self.is_open = false;
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_with_and_close() {
        let mut overlay = OverlayState::default();
        assert!(!overlay.is_open());

        overlay.open_with("Riverside");
        assert!(overlay.is_open());
        assert_eq!(overlay.selected(), Some(&"Riverside"));

        overlay.close();
        assert!(!overlay.is_open());
        assert_eq!(overlay.selected(), None);
    }

    #[test]
    fn test_open_keeps_selection() {
        let mut overlay = OverlayState::default();
        overlay.open_with(3);
        overlay.open();
        assert_eq!(overlay.selected(), Some(&3));
    }
}
