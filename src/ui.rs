//! The UI renders the browser state into something visible.
//!
//! The draw function dispatches based on the current view (file list or outline).
//! The outline view shows the heading tree using box-drawing characters.

use crate::app_state::{AppState, FileMode, View};
use crate::render;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Renders the active view based on current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    match app.current_view {
        View::FileList => draw_file_list(f, app),
        View::Outline => draw_outline(f, app),
    }
}

fn draw_file_list(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let items: Vec<ListItem> = app
        .files
        .iter()
        .zip(&app.forests)
        .map(|(path, forest)| {
            let spans = vec![
                Span::styled(
                    format!("📄 {}", path.display()),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} headings", forest.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = format!("Files ({})", app.files.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.current_file_index));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let help = Paragraph::new("↑/↓: Navigate | Enter: Open | q: Quit")
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn draw_outline(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let rows = app.forest().map(render::rows).unwrap_or_default();
    let items: Vec<ListItem> = rows
        .iter()
        .filter_map(|row| {
            let node = app.forest()?.node(row.id);
            let spans = vec![
                Span::styled(row.prefix.clone(), Style::default().fg(Color::DarkGray)),
                Span::raw(node.title().to_string()),
            ];
            Some(ListItem::new(Line::from(spans)))
        })
        .collect();

    let file_name = app
        .files
        .get(app.current_file_index)
        .map(|path| path.display().to_string())
        .unwrap_or_default();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(file_name))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(app.current_node_index));
    f.render_stateful_widget(list, chunks[0], &mut state);

    let status = if let Some(message) = &app.message {
        message.clone()
    } else if let Some(node) = app.current_node() {
        format!(
            "#{} | ↑/↓: Navigate | ←/→: Parent/Child | Shift+↑/↓: Sibling | {}",
            node.slug(),
            quit_hint(app)
        )
    } else {
        quit_hint(app).to_string()
    };
    let help = Paragraph::new(status).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[1]);
}

fn quit_hint(app: &AppState) -> &'static str {
    if app.file_mode == FileMode::Multi {
        "q: Back"
    } else {
        "q: Quit"
    }
}
