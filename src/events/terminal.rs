use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Resize,
    Tick,
}

/// Outcome of processing one terminal event.
///
#[derive(Debug, PartialEq, Eq)]
pub enum Next {
    /// Something was processed; the interface should redraw.
    Redraw,
    /// A periodic tick with no input.
    Tick,
    /// An exit was requested.
    Exit,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            let pending = match event::poll(tick_rate) {
                Ok(pending) => pending,
                Err(_) => break,
            };
            if pending {
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => tx_clone.send(Event::Input(key)),
                    Ok(CrosstermEvent::Resize(_, _)) => tx_clone.send(Event::Resize),
                    Ok(_) => Ok(()),
                    Err(_) => break,
                };
                if forwarded.is_err() {
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive the next terminal event and handle it accordingly.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<Next> {
        match self.rx.recv()? {
            Event::Input(event) => {
                if handle_key(state, event) {
                    Ok(Next::Redraw)
                } else {
                    Ok(Next::Exit)
                }
            }
            Event::Resize => {
                debug!("Processing terminal resize event...");
                Ok(Next::Redraw)
            }
            Event::Tick => Ok(Next::Tick),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Route a key event to the appropriate state mutation. Returns false when
/// an exit was requested. Mode-specific arms come first so that printable
/// keys reach the active text buffer before any command binding.
///
fn handle_key(state: &mut State, event: KeyEvent) -> bool {
    if event.kind != KeyEventKind::Press {
        return true;
    }
    match event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('l'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing toggle log pane event '{:?}'...", event);
            state.toggle_log();
        }
        // Edit mode captures all printable keys.
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            ..
        } if state.is_editing() => {
            state.add_editor_char(c);
        }
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::SHIFT,
            ..
        } if state.is_editing() => {
            state.add_editor_char(c);
        }
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } if state.is_editing() => {
            state.remove_editor_char();
        }
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } if state.is_editing() => {
            debug!("Processing edit submit event '{:?}'...", event);
            state.commit_editor();
        }
        KeyEvent {
            code: KeyCode::Esc, ..
        } if state.is_editing() => {
            debug!("Processing edit cancel event '{:?}'...", event);
            state.cancel_editor();
        }
        KeyEvent {
            code: KeyCode::Tab, ..
        } if state.is_editing() => {
            // Focus loss commits.
            state.focus_input();
        }
        KeyEvent {
            code: KeyCode::Down,
            ..
        } if state.is_editing() => {
            state.next_todo();
        }
        KeyEvent {
            code: KeyCode::Up, ..
        } if state.is_editing() => {
            state.previous_todo();
        }
        // Creation form captures all printable keys while focused.
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE,
            ..
        } if *state.current_focus() == Focus::Input => {
            state.add_input_char(c);
        }
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::SHIFT,
            ..
        } if *state.current_focus() == Focus::Input => {
            state.add_input_char(c);
        }
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } if *state.current_focus() == Focus::Input => {
            state.remove_input_char();
        }
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } if *state.current_focus() == Focus::Input => {
            debug!("Processing create submit event '{:?}'...", event);
            state.submit_input();
        }
        KeyEvent {
            code: KeyCode::Esc | KeyCode::Tab | KeyCode::Down,
            ..
        } if *state.current_focus() == Focus::Input => {
            state.focus_list();
        }
        KeyEvent { .. } if *state.current_focus() == Focus::Input => {
            debug!("Skipping processing of terminal event '{:?}'...", event);
        }
        // Normal list commands.
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            state.next_todo();
        }
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            state.previous_todo();
        }
        KeyEvent {
            code: KeyCode::Char(' ') | KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            debug!("Processing toggle completion event '{:?}'...", event);
            state.toggle_selected();
        }
        KeyEvent {
            code: KeyCode::Char('d'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            debug!("Processing delete todo event '{:?}'...", event);
            state.delete_selected();
        }
        KeyEvent {
            code: KeyCode::Char('e') | KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            debug!("Processing edit todo event '{:?}'...", event);
            state.edit_selected();
        }
        KeyEvent {
            code: KeyCode::Char('i') | KeyCode::Tab,
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            state.focus_input();
        }
        KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::NONE,
            ..
        } => {
            debug!("Processing switch theme event '{:?}'...", event);
            state.next_theme();
        }
        _ => {
            debug!("Skipping processing of terminal event '{:?}'...", event);
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            assert!(handle_key(state, key(KeyCode::Char(c))));
        }
    }

    #[test]
    fn test_create_flow_adds_record_and_clears_input() {
        let mut state = State::new(Theme::default());
        type_text(&mut state, "Buy milk");
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.todos().len(), 1);
        assert_eq!(state.todos()[0].text, "Buy milk");
        assert!(state.get_input().is_empty());
    }

    #[test]
    fn test_blank_submit_changes_nothing() {
        let mut state = State::new(Theme::default());
        type_text(&mut state, "   ");
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(state.todos().is_empty());
        assert_eq!(state.get_input(), "   ");
    }

    #[test]
    fn test_quit_only_outside_input_mode() {
        let mut state = State::new(Theme::default());
        // 'q' while the creation form is focused is just a character.
        assert!(handle_key(&mut state, key(KeyCode::Char('q'))));
        assert_eq!(state.get_input(), "q");

        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!handle_key(&mut state, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_toggle_and_delete_from_list() {
        let mut state = State::new(Theme::default());
        type_text(&mut state, "task");
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Esc));

        handle_key(&mut state, key(KeyCode::Char(' ')));
        assert!(state.todos()[0].is_completed);
        handle_key(&mut state, key(KeyCode::Char('x')));
        assert!(!state.todos()[0].is_completed);

        handle_key(&mut state, key(KeyCode::Char('d')));
        assert!(state.todos().is_empty());
    }

    #[test]
    fn test_edit_flow_commits_on_enter() {
        let mut state = State::new(Theme::default());
        type_text(&mut state, "task");
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Esc));

        handle_key(&mut state, key(KeyCode::Char('e')));
        assert!(state.is_editing());
        type_text(&mut state, "!!");
        handle_key(&mut state, key(KeyCode::Enter));
        assert!(!state.is_editing());
        assert_eq!(state.todos()[0].text, "task!!");
    }

    #[test]
    fn test_edit_captures_command_characters() {
        let mut state = State::new(Theme::default());
        type_text(&mut state, "a");
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Esc));

        handle_key(&mut state, key(KeyCode::Char('e')));
        // 'd', 'j' and 'q' must be typed, not interpreted as commands.
        type_text(&mut state, "djq");
        assert_eq!(state.todos().len(), 1);
        assert!(state.is_editing());
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(state.todos()[0].text, "adjq");
    }

    #[test]
    fn test_blank_edit_reverts_on_focus_loss() {
        let mut state = State::new(Theme::default());
        type_text(&mut state, "ab");
        handle_key(&mut state, key(KeyCode::Enter));
        type_text(&mut state, "cd");
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Esc));

        handle_key(&mut state, key(KeyCode::Char('e')));
        handle_key(&mut state, key(KeyCode::Backspace));
        handle_key(&mut state, key(KeyCode::Backspace));
        handle_key(&mut state, key(KeyCode::Down));
        assert!(!state.is_editing());
        assert_eq!(state.todos()[0].text, "ab");
        assert_eq!(state.selected_index(), Some(1));
    }

    #[test]
    fn test_escape_cancels_edit_without_commit() {
        let mut state = State::new(Theme::default());
        type_text(&mut state, "task");
        handle_key(&mut state, key(KeyCode::Enter));
        handle_key(&mut state, key(KeyCode::Esc));

        handle_key(&mut state, key(KeyCode::Char('e')));
        type_text(&mut state, "zzz");
        handle_key(&mut state, key(KeyCode::Esc));
        assert!(!state.is_editing());
        assert_eq!(state.todos()[0].text, "task");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut state = State::new(Theme::default());
        assert_eq!(*state.current_focus(), Focus::Input);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(*state.current_focus(), Focus::List);
        handle_key(&mut state, key(KeyCode::Tab));
        assert_eq!(*state.current_focus(), Focus::Input);
    }

    #[test]
    fn test_released_keys_are_ignored() {
        let mut state = State::new(Theme::default());
        let mut event = key(KeyCode::Char('a'));
        event.kind = KeyEventKind::Release;
        assert!(handle_key(&mut state, event));
        assert!(state.get_input().is_empty());
    }
}
