use crate::store::{Todo, TodoId, TodoStore};
use crate::ui::Theme;
use log::*;
use ratatui::widgets::ListState;

use super::editor::Editor;
use super::navigation::Focus;

/// Houses data representative of application state.
///
/// The store is the single authoritative owner of the record list; the
/// remaining fields are transient UI state. Selection is tracked by record
/// identifier rather than row index, so it survives re-renders and
/// deletions of other rows.
pub struct State {
    store: TodoStore,
    current_focus: Focus,
    input: String,
    selected_id: Option<TodoId>,
    todos_list_state: ListState,
    editor: Option<Editor>,
    log_visible: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            store: TodoStore::new(),
            current_focus: Focus::Input,
            input: String::new(),
            selected_id: None,
            todos_list_state: ListState::default(),
            editor: None,
            log_visible: false,
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(theme: Theme) -> Self {
        State {
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next theme in the palette list.
    ///
    pub fn next_theme(&mut self) -> &mut Self {
        let names = Theme::available_themes();
        let index = names
            .iter()
            .position(|name| *name == self.theme.name)
            .unwrap_or(0);
        if let Some(theme) = Theme::from_name(&names[(index + 1) % names.len()]) {
            info!("Switched theme to {}", theme.name);
            self.theme = theme;
        }
        self
    }

    /// Mutable access to the store, for wiring subscriptions.
    ///
    pub fn store_mut(&mut self) -> &mut TodoStore {
        &mut self.store
    }

    /// Return the current ordered snapshot of all records.
    ///
    pub fn todos(&self) -> &[Todo] {
        self.store.todos()
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Change focus to the creation form. Leaving the list is focus loss
    /// for an open editor, so it commits first.
    ///
    pub fn focus_input(&mut self) -> &mut Self {
        self.commit_editor();
        self.current_focus = Focus::Input;
        self
    }

    /// Change focus to the list.
    ///
    pub fn focus_list(&mut self) -> &mut Self {
        self.current_focus = Focus::List;
        if self.selected_id.is_none() {
            self.selected_id = self.store.todos().first().map(|todo| todo.id);
        }
        self
    }

    /// Return the creation form's pending text.
    ///
    pub fn get_input(&self) -> &str {
        &self.input
    }

    pub fn add_input_char(&mut self, c: char) -> &mut Self {
        self.input.push(c);
        self
    }

    pub fn remove_input_char(&mut self) -> &mut Self {
        self.input.pop();
        self
    }

    /// Submit the creation form. Non-blank pending text creates a record
    /// and clears the field; a blank submission leaves everything as is.
    ///
    pub fn submit_input(&mut self) -> &mut Self {
        match self.store.add_todo(&self.input) {
            Some(id) => {
                self.input.clear();
                if self.selected_id.is_none() {
                    self.selected_id = Some(id);
                }
            }
            None => debug!("Keeping blank input in place"),
        }
        self
    }

    /// Identifier of the selected record, if any.
    ///
    pub fn selected_id(&self) -> Option<TodoId> {
        self.selected_id
    }

    /// Position of the selected record in the current snapshot, if it is
    /// still present.
    ///
    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_id?;
        self.store.todos().iter().position(|todo| todo.id == id)
    }

    /// Move the selection to the next record, wrapping at the end. Moving
    /// away is focus loss for an open editor, so it commits first.
    ///
    pub fn next_todo(&mut self) -> &mut Self {
        self.commit_editor();
        let len = self.store.todos().len();
        if len == 0 {
            self.selected_id = None;
            return self;
        }
        let index = match self.selected_index() {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.selected_id = Some(self.store.todos()[index].id);
        self
    }

    /// Move the selection to the previous record, wrapping at the start.
    /// Commits an open editor like [`State::next_todo`].
    ///
    pub fn previous_todo(&mut self) -> &mut Self {
        self.commit_editor();
        let len = self.store.todos().len();
        if len == 0 {
            self.selected_id = None;
            return self;
        }
        let index = match self.selected_index() {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.selected_id = Some(self.store.todos()[index].id);
        self
    }

    /// Toggle the completion flag of the selected record.
    ///
    pub fn toggle_selected(&mut self) -> &mut Self {
        if let Some(id) = self.selected_id {
            self.store.toggle_todo(id);
        }
        self
    }

    /// Delete the selected record and move the selection to the nearest
    /// remaining neighbour.
    ///
    pub fn delete_selected(&mut self) -> &mut Self {
        if let Some(index) = self.selected_index() {
            let id = self.store.todos()[index].id;
            self.store.delete_todo(id);
            let todos = self.store.todos();
            self.selected_id = if todos.is_empty() {
                None
            } else {
                Some(todos[index.min(todos.len() - 1)].id)
            };
        }
        self
    }

    /// Enter edit mode for the selected record. The editor is constructed
    /// once here, on the transition, with the record's current text; a
    /// second request while one is open is ignored.
    ///
    pub fn edit_selected(&mut self) -> &mut Self {
        if self.editor.is_some() {
            return self;
        }
        if let Some(index) = self.selected_index() {
            let editor = Editor::open(&self.store.todos()[index]);
            debug!("Editing todo {}", editor.id());
            self.editor = Some(editor);
        }
        self
    }

    /// Return the open editor, if any.
    ///
    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// True while a record is being edited.
    ///
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    pub fn add_editor_char(&mut self, c: char) -> &mut Self {
        if let Some(editor) = self.editor.as_mut() {
            editor.push_char(c);
        }
        self
    }

    pub fn remove_editor_char(&mut self) -> &mut Self {
        if let Some(editor) = self.editor.as_mut() {
            editor.pop_char();
        }
        self
    }

    /// Commit the open editor: a non-blank buffer replaces the record's
    /// text, a blank buffer leaves the record untouched. Edit mode ends in
    /// both cases, so no path can store an empty text.
    ///
    pub fn commit_editor(&mut self) -> &mut Self {
        if let Some(editor) = self.editor.take() {
            match editor.take_commit() {
                Some((id, text)) => self.store.update_todo(id, &text),
                None => debug!("Discarding blank edit; record keeps its text"),
            }
        }
        self
    }

    /// Close the open editor, discarding the buffer.
    ///
    pub fn cancel_editor(&mut self) -> &mut Self {
        if self.editor.take().is_some() {
            debug!("Cancelled edit");
        }
        self
    }

    /// List widget state with the selection synchronized to the selected
    /// record's current position.
    ///
    pub fn todos_list_state(&mut self) -> &mut ListState {
        let index = self.selected_index();
        self.todos_list_state.select(index);
        &mut self.todos_list_state
    }

    /// True when the log pane is shown.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Toggle the log pane.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }
}
