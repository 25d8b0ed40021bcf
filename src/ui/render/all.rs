use super::*;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the complete interface according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![
        Constraint::Length(3), // Creation form
        Constraint::Min(1),    // List
    ];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(8)); // Log pane
    }
    constraints.push(Constraint::Length(1)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    input(frame, chunks[0], state);
    list(frame, chunks[1], state);
    if state.is_log_visible() {
        log(frame, chunks[2], state);
        footer(frame, chunks[3], state);
    } else {
        footer(frame, chunks[2], state);
    }
}
