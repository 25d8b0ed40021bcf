use super::Frame;
use crate::state::{Focus, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

const BLOCK_TITLE: &str = "Todos";

/// Render the to-do list according to state. One row per record, keyed by
/// identifier through the state's selection; the row being edited swaps its
/// text for the editor buffer and a cursor.
///
pub fn list(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let focused = *state.current_focus() == Focus::List;

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));
    if focused {
        block = block
            .border_style(styling::active_block_border_style(&theme))
            .title(Span::styled(BLOCK_TITLE, styling::active_block_title_style()));
    } else {
        block = block.title(BLOCK_TITLE);
    }

    let editing_id = state.editor().map(|editor| editor.id());
    let items: Vec<ListItem> = state
        .todos()
        .iter()
        .map(|todo| {
            if editing_id == Some(todo.id) {
                let buffer = state
                    .editor()
                    .map(|editor| editor.text())
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled("[~] ", styling::editing_text_style(&theme)),
                    Span::styled(buffer.to_owned(), styling::editing_text_style(&theme)),
                    Span::styled("█", styling::editing_text_style(&theme)),
                ]))
            } else if todo.is_completed {
                ListItem::new(Line::from(vec![
                    Span::styled("[x] ", styling::normal_text_style(&theme).fg(theme.success.to_color())),
                    Span::styled(
                        todo.text.clone(),
                        styling::muted_text_style(&theme).add_modifier(Modifier::CROSSED_OUT),
                    ),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("[ ] "),
                    Span::styled(todo.text.clone(), styling::normal_text_style(&theme)),
                ]))
            }
        })
        .collect();

    let items = if items.is_empty() {
        vec![ListItem::new(Span::styled(
            "No todos yet",
            styling::muted_text_style(&theme),
        ))]
    } else {
        items
    };

    let list_item_style = if focused {
        styling::active_list_item_style(&theme)
    } else {
        styling::current_list_item_style(&theme)
    };
    let list = List::new(items)
        .style(styling::normal_text_style(&theme))
        .highlight_style(list_item_style)
        .highlight_symbol("▸ ")
        .block(block);

    frame.render_stateful_widget(list, size, state.todos_list_state());
}
