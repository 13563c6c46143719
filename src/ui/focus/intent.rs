use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    /// Tab: Filter → Name → Number → List → Filter.
    Next,
    /// Shift+Tab.
    Previous,
    /// Move the list selection up, wrapping at the top.
    SelectUp { rows: usize },
    /// Move the list selection down, wrapping at the bottom.
    SelectDown { rows: usize },
    /// Keep the selection inside a list that changed length.
    Clamp { rows: usize },
}

impl Intent for FocusIntent {}
