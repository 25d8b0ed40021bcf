use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BLOCK_TITLE: &str = "New Todo";
const PLACEHOLDER: &str = "Enter a task";

/// Render the creation form according to state.
///
pub fn input(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let focused = *state.current_focus() == Focus::Input;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    } else {
        block = block.title(BLOCK_TITLE);
    }

    let pending = state.get_input();
    let text = if focused {
        Line::from(vec![
            Span::styled(pending, styling::normal_text_style(theme)),
            Span::styled("█", styling::editing_text_style(theme)),
        ])
    } else if pending.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, styling::muted_text_style(theme)))
    } else {
        Line::from(Span::styled(pending, styling::normal_text_style(theme)))
    };

    frame.render_widget(Paragraph::new(text).block(block), size);
}
