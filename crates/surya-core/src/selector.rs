//! First-run system type picker.

use crate::navigation::{NavAction, SystemType};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemSelector {
    highlighted: usize,
}

impl SystemSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(&self) -> &'static [SystemType] {
        &SystemType::ALL
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn highlighted(&self) -> SystemType {
        SystemType::ALL[self.highlighted % SystemType::ALL.len()]
    }

    pub fn move_down(&mut self) {
        self.highlighted = (self.highlighted + 1) % SystemType::ALL.len();
    }

    pub fn move_up(&mut self) {
        let len = SystemType::ALL.len();
        self.highlighted = (self.highlighted + len - 1) % len;
    }

    pub fn confirm(&self) -> NavAction {
        NavAction::SelectSystem(self.highlighted())
    }

    /// Picks an option by zero-based position; `None` when out of range.
    pub fn choose(&mut self, index: usize) -> Option<NavAction> {
        SystemType::ALL.get(index)?;
        self.highlighted = index;
        Some(self.confirm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_highlighted() {
        let mut selector = SystemSelector::new();
        assert_eq!(selector.confirm(), NavAction::SelectSystem(SystemType::SharedGrid));
        selector.move_down();
        assert_eq!(selector.confirm(), NavAction::SelectSystem(SystemType::Private));
        selector.move_down();
        assert_eq!(selector.highlighted(), SystemType::SharedGrid);
        selector.move_up();
        assert_eq!(selector.highlighted(), SystemType::Private);
    }

    #[test]
    fn test_choose() {
        let mut selector = SystemSelector::new();
        assert_eq!(selector.choose(1), Some(NavAction::SelectSystem(SystemType::Private)));
        assert_eq!(selector.highlighted_index(), 1);
        assert_eq!(selector.choose(2), None);
        assert_eq!(selector.highlighted_index(), 1);
    }
}
