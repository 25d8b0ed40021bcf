use super::Frame;
use crate::state::{Focus, State};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (label, label_bg, controls_text) = if state.is_editing() {
        (
            "EDIT:",
            theme.footer_edit.to_color(),
            " Type to edit, Enter: save, Esc: discard, Tab ↑ ↓: save and move",
        )
    } else if *state.current_focus() == Focus::Input {
        (
            "INPUT:",
            theme.footer_input.to_color(),
            " Type a task, Enter: add, Esc/Tab: to list",
        )
    } else {
        (
            "NORMAL:",
            theme.footer_normal.to_color(),
            " j k: navigate, space: toggle, e: edit, d: delete, i/Tab: new todo, t: theme, ctrl-l: logs, q: quit",
        )
    };

    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.text.to_color())
                .bg(label_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            controls_text,
            Style::default().fg(theme.warning.to_color()),
        ),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    let right_content = Line::from(vec![Span::styled(
        format!(" {}", env!("CARGO_PKG_VERSION")),
        Style::default().fg(theme.secondary.to_color()),
    )]);
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
