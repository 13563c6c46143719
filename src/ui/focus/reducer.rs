use crate::ui::mvi::Reducer;

use super::intent::FocusIntent;
use super::state::{Field, FocusState};

pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = FocusState;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FocusIntent::Next => FocusState {
                field: match state.field {
                    Field::Filter => Field::Name,
                    Field::Name => Field::Number,
                    Field::Number => Field::List,
                    Field::List => Field::Filter,
                },
                ..state
            },
            FocusIntent::Previous => FocusState {
                field: match state.field {
                    Field::Filter => Field::List,
                    Field::Name => Field::Filter,
                    Field::Number => Field::Name,
                    Field::List => Field::Number,
                },
                ..state
            },
            FocusIntent::SelectUp { rows } => {
                if rows == 0 {
                    return FocusState { selected: 0, ..state };
                }
                let current = state.selected.min(rows - 1);
                let selected = if current == 0 { rows - 1 } else { current - 1 };
                FocusState { selected, ..state }
            }
            FocusIntent::SelectDown { rows } => {
                if rows == 0 {
                    return FocusState { selected: 0, ..state };
                }
                let current = state.selected.min(rows - 1);
                let selected = if current + 1 >= rows { 0 } else { current + 1 };
                FocusState { selected, ..state }
            }
            FocusIntent::Clamp { rows } => FocusState {
                selected: state.selected.min(rows.saturating_sub(1)),
                ..state
            },
        }
    }
}
