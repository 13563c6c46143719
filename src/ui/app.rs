use crate::directory::EntryId;
use crate::phonebook::{Confirm, Effect, Event, Phonebook, View};
use crate::ui::focus::{Field, FocusIntent, FocusReducer, FocusState};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub view: View,
    pub focus: FocusState,
    /// Entries in the directory before filtering.
    pub total: usize,
}

pub struct App {
    should_quit: bool,
    phonebook: Phonebook,
    /// Focus and list selection (MVI pattern).
    focus: FocusState,
}

impl App {
    pub fn new(phonebook: Phonebook) -> Self {
        Self {
            should_quit: false,
            phonebook,
            focus: FocusState::default(),
        }
    }

    pub fn start(&self) -> Vec<Effect> {
        self.phonebook.start()
    }

    pub fn phonebook(&self) -> &Phonebook {
        &self.phonebook
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        Screen {
            view: self.phonebook.view(),
            focus: self.focus.clone(),
            total: self.phonebook.entries().len(),
        }
    }

    pub fn dispatch_focus(&mut self, intent: FocusIntent) {
        dispatch_mvi!(self, focus, FocusReducer, intent);
    }

    pub fn visible_rows(&self) -> usize {
        self.phonebook.visible_entries().len()
    }

    pub fn select_up(&mut self) {
        let rows = self.visible_rows();
        self.dispatch_focus(FocusIntent::SelectUp { rows });
    }

    pub fn select_down(&mut self) {
        let rows = self.visible_rows();
        self.dispatch_focus(FocusIntent::SelectDown { rows });
    }

    /// Append a typed character to the focused input.
    pub fn type_char(&mut self, ch: char) {
        self.edit_focused(|text| text.push(ch));
    }

    /// Drop the last character of the focused input.
    pub fn backspace(&mut self) {
        self.edit_focused(|text| {
            text.pop();
        });
    }

    pub fn submit(&mut self, confirm: &mut dyn Confirm) -> Vec<Effect> {
        self.phonebook.submit(confirm)
    }

    /// Delete the highlighted row of the filtered list.
    pub fn delete_selected(&mut self, confirm: &mut dyn Confirm) -> Vec<Effect> {
        let Some(id) = self.selected_id() else {
            return Vec::new();
        };
        let effects = self.phonebook.delete(&id, confirm);
        self.clamp_selection();
        effects
    }

    /// Feed a network or timer completion into the controller.
    pub fn on_event(&mut self, event: Event) -> Vec<Effect> {
        let effects = self.phonebook.handle(event);
        self.clamp_selection();
        effects
    }

    fn selected_id(&self) -> Option<EntryId> {
        self.phonebook
            .visible_entries()
            .get(self.focus.selected)
            .map(|entry| entry.id.clone())
    }

    fn clamp_selection(&mut self) {
        let rows = self.visible_rows();
        self.dispatch_focus(FocusIntent::Clamp { rows });
    }

    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        match self.focus.field {
            Field::Filter => {
                let mut filter = self.phonebook.filter().to_string();
                edit(&mut filter);
                self.phonebook.set_filter(&filter);
                self.clamp_selection();
            }
            Field::Name => {
                let mut name = self.phonebook.draft().name.clone();
                edit(&mut name);
                self.phonebook.set_name(name);
            }
            Field::Number => {
                let mut number = self.phonebook.draft().number.clone();
                edit(&mut number);
                self.phonebook.set_number(number);
            }
            Field::List => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Entry;
    use crate::phonebook::Request;
    use std::time::Duration;

    fn make_app(entries: Vec<Entry>) -> App {
        let mut app = App::new(Phonebook::new(Duration::from_millis(5000)));
        app.on_event(Event::Loaded(Ok(entries)));
        app
    }

    fn focus_on(app: &mut App, field: Field) {
        while app.focus().field != field {
            app.dispatch_focus(FocusIntent::Next);
        }
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut app = make_app(vec![]);
        for ch in "Ann".chars() {
            app.type_char(ch);
        }
        app.dispatch_focus(FocusIntent::Next);
        for ch in "12".chars() {
            app.type_char(ch);
        }
        app.backspace();

        let draft = &app.phonebook().draft();
        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.number, "1");
    }

    #[test]
    fn filter_input_lowercases_and_clamps_selection() {
        let mut app = make_app(vec![
            Entry::new(1, "Arto", "1"),
            Entry::new(2, "Ada", "2"),
            Entry::new(3, "Dan", "3"),
        ]);
        focus_on(&mut app, Field::List);
        app.select_down();
        app.select_down();
        assert_eq!(app.focus().selected, 2);

        focus_on(&mut app, Field::Filter);
        app.type_char('A');
        app.type_char('R');

        assert_eq!(app.phonebook().filter(), "ar");
        assert_eq!(app.focus().selected, 0);
        assert_eq!(app.screen().view.rows, vec![Entry::new(1, "Arto", "1")]);
        assert_eq!(app.screen().total, 3);
    }

    #[test]
    fn delete_selected_targets_filtered_row() {
        let mut app = make_app(vec![
            Entry::new(1, "Arto", "1"),
            Entry::new(2, "Ada", "2"),
            Entry::new(5, "Dan", "3"),
        ]);
        focus_on(&mut app, Field::Filter);
        app.type_char('d');
        focus_on(&mut app, Field::List);
        app.select_down();

        let effects = app.delete_selected(&mut |_: &str| true);

        assert_eq!(
            effects,
            vec![Effect::Request(Request::Remove { id: EntryId::from(5) })]
        );
        assert_eq!(app.phonebook().entries().len(), 2);
        assert_eq!(app.focus().selected, 0);
    }

    #[test]
    fn delete_on_empty_list_does_nothing() {
        let mut app = make_app(vec![]);
        focus_on(&mut app, Field::List);
        assert!(app.delete_selected(&mut |_: &str| true).is_empty());
    }

    #[test]
    fn typing_in_list_is_ignored() {
        let mut app = make_app(vec![Entry::new(1, "Arto", "1")]);
        focus_on(&mut app, Field::List);
        app.type_char('x');
        assert_eq!(app.phonebook().draft().name, "");
        assert_eq!(app.phonebook().filter(), "");
    }
}
