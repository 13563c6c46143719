use crate::ui::mvi::UiState;

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    Filter,
    #[default]
    Name,
    Number,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FocusState {
    pub field: Field,
    /// Index into the visible rows.
    pub selected: usize,
}

impl UiState for FocusState {}

impl FocusState {
    pub fn list_focused(&self) -> bool {
        self.field == Field::List
    }
}
