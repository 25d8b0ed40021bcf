//! Shared to-do store.
//!
//! This module owns the authoritative record list and its mutation API.
//! Views never keep record data of their own; they read the current
//! snapshot on every draw and are told about changes through the
//! subscription mechanism. All failure modes (blank text, unknown
//! identifier) degrade to silent no-ops rather than errors, and no-op
//! mutations publish nothing.

use log::*;
use std::fmt;

/// Opaque identifier for a to-do record. Unique within the store and stable
/// for the lifetime of the record.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do record.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    pub is_completed: bool,
}

/// Handle returned by [`TodoStore::subscribe`], used to unsubscribe.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn FnMut(&[Todo])>;

/// Houses the ordered record list and its mutation API.
///
/// New records are appended at the end and identifiers are minted from a
/// monotone counter, so an identifier is never reused even after its record
/// is deleted.
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
    next_subscriber_id: u64,
    subscribers: Vec<(SubscriberId, Subscriber)>,
}

/// Defines an empty store.
///
impl Default for TodoStore {
    fn default() -> TodoStore {
        TodoStore {
            todos: vec![],
            next_id: 1,
            next_subscriber_id: 1,
            subscribers: vec![],
        }
    }
}

impl TodoStore {
    pub fn new() -> Self {
        TodoStore::default()
    }

    /// Return the current ordered snapshot of all records.
    ///
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Append a new record with the given text, a freshly minted identifier
    /// and the completion flag cleared. Blank text is a silent no-op.
    /// Returns the new record's identifier when one was created.
    ///
    pub fn add_todo(&mut self, text: &str) -> Option<TodoId> {
        if text.trim().is_empty() {
            debug!("Ignoring add with blank text");
            return None;
        }
        let id = TodoId(self.next_id);
        self.next_id += 1;
        self.todos.push(Todo {
            id,
            text: text.to_owned(),
            is_completed: false,
        });
        debug!("Added todo {}", id);
        self.publish();
        Some(id)
    }

    /// Remove the record with the given identifier. Unknown identifiers are
    /// a silent no-op, which makes repeated deletes idempotent.
    ///
    pub fn delete_todo(&mut self, id: TodoId) {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() == before {
            debug!("Ignoring delete for unknown todo {}", id);
            return;
        }
        debug!("Deleted todo {}", id);
        self.publish();
    }

    /// Replace the text of the record with the given identifier, preserving
    /// its identifier and completion flag. Blank text or an unknown
    /// identifier is a silent no-op.
    ///
    pub fn update_todo(&mut self, id: TodoId, text: &str) {
        if text.trim().is_empty() {
            debug!("Ignoring update with blank text for todo {}", id);
            return;
        }
        let updated = match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.text = text.to_owned();
                true
            }
            None => false,
        };
        if !updated {
            debug!("Ignoring update for unknown todo {}", id);
            return;
        }
        debug!("Updated todo {}", id);
        self.publish();
    }

    /// Flip the completion flag of the record with the given identifier.
    /// Unknown identifiers are a silent no-op.
    ///
    pub fn toggle_todo(&mut self, id: TodoId) {
        let toggled = match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.is_completed = !todo.is_completed;
                true
            }
            None => false,
        };
        if !toggled {
            debug!("Ignoring toggle for unknown todo {}", id);
            return;
        }
        debug!("Toggled todo {}", id);
        self.publish();
    }

    /// Register a subscriber to be notified with the new snapshot after
    /// each successful mutation. Returns a handle for
    /// [`TodoStore::unsubscribe`].
    ///
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriberId
    where
        F: FnMut(&[Todo]) + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a previously registered subscriber. Unknown handles are a
    /// silent no-op, matching the mutation API.
    ///
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.retain(|(subscriber_id, _)| *subscriber_id != id);
    }

    /// Notify all subscribers with the current snapshot.
    ///
    fn publish(&mut self) {
        let todos = &self.todos;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(todos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_add_appends_in_call_order() {
        let mut store = TodoStore::new();
        store.add_todo("first");
        store.add_todo("second");
        store.add_todo("third");
        let texts: Vec<&str> = store.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut store = TodoStore::new();
        assert_eq!(store.add_todo(""), None);
        assert_eq!(store.add_todo("   "), None);
        assert_eq!(store.add_todo("\t\n"), None);
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_add_preserves_text_as_typed() {
        let mut store = TodoStore::new();
        store.add_todo("  padded  ");
        assert_eq!(store.todos()[0].text, "  padded  ");
    }

    #[test]
    fn test_new_records_start_incomplete() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        assert_eq!(store.todos()[0].id, id);
        assert!(!store.todos()[0].is_completed);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        store.delete_todo(id);
        assert!(store.todos().is_empty());
        store.delete_todo(id);
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_delete_keeps_order_of_remaining() {
        let mut store = TodoStore::new();
        store.add_todo("first");
        let id = store.add_todo("second").unwrap();
        store.add_todo("third");
        store.delete_todo(id);
        let texts: Vec<&str> = store.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "third"]);
    }

    #[test]
    fn test_update_preserves_id_and_flag() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        store.toggle_todo(id);
        store.update_todo(id, "renamed");
        assert_eq!(store.todos()[0].id, id);
        assert_eq!(store.todos()[0].text, "renamed");
        assert!(store.todos()[0].is_completed);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        store.delete_todo(id);
        store.add_todo("other");
        store.update_todo(id, "renamed");
        assert_eq!(store.todos()[0].text, "other");
    }

    #[test]
    fn test_update_blank_is_noop() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        store.update_todo(id, "");
        store.update_todo(id, "   ");
        assert_eq!(store.todos()[0].text, "task");
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        store.toggle_todo(id);
        assert!(store.todos()[0].is_completed);
        store.toggle_todo(id);
        assert!(!store.todos()[0].is_completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        store.delete_todo(id);
        store.toggle_todo(id);
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_ids_unique_across_interleaved_add_delete() {
        let mut store = TodoStore::new();
        let first = store.add_todo("first").unwrap();
        store.delete_todo(first);
        let second = store.add_todo("second").unwrap();
        let third = store.add_todo("third").unwrap();
        assert_ne!(first, second);
        assert_ne!(second, third);
    }

    #[test]
    fn test_full_lifecycle_scenario() {
        let mut store = TodoStore::new();
        assert!(store.todos().is_empty());

        let id = store.add_todo("Buy milk").unwrap();
        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].text, "Buy milk");
        assert!(!store.todos()[0].is_completed);

        store.toggle_todo(id);
        assert!(store.todos()[0].is_completed);

        store.update_todo(id, "Buy oat milk");
        assert_eq!(store.todos()[0].text, "Buy oat milk");
        assert!(store.todos()[0].is_completed);

        store.delete_todo(id);
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_subscribers_notified_per_successful_mutation() {
        let mut store = TodoStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |todos| sink.borrow_mut().push(todos.len()));

        let id = store.add_todo("task").unwrap();
        store.toggle_todo(id);
        store.update_todo(id, "renamed");
        store.delete_todo(id);
        assert_eq!(*seen.borrow(), vec![1, 1, 1, 0]);
    }

    #[test]
    fn test_noop_mutations_publish_nothing() {
        let mut store = TodoStore::new();
        let id = store.add_todo("task").unwrap();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add_todo("");
        store.add_todo("   ");
        store.update_todo(id, "");
        store.delete_todo(TodoId(9999));
        store.toggle_todo(TodoId(9999));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = TodoStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let subscription = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.add_todo("one");
        store.unsubscribe(subscription);
        store.add_todo("two");
        assert_eq!(*count.borrow(), 1);
    }
}
