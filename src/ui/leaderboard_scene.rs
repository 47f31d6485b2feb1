//! Leaderboard screen: the persisted top-10, with an explicit clear action.

use crate::leaderboard::Leaderboard;
use crate::ui::game_common::render_status_bar;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_leaderboard(frame: &mut Frame, area: Rect, board: &Leaderboard, confirm_clear: bool) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Leaderboard ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(inner);

    render_entries(frame, v_chunks[0], board);

    if confirm_clear {
        render_status_bar(
            frame,
            v_chunks[1],
            "Erase all scores?",
            Color::Red,
            &[("[Y]", "Confirm"), ("[Any]", "Cancel")],
        );
    } else {
        render_status_bar(
            frame,
            v_chunks[1],
            "",
            Color::White,
            &[("[C]", "Clear"), ("[Esc]", "Back")],
        );
    }
}

fn render_entries(frame: &mut Frame, area: Rect, board: &Leaderboard) {
    if board.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No scores yet - go fly!",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines = vec![Line::from("")];
    for (rank, entry) in board.entries.iter().enumerate() {
        let style = match rank {
            0 => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            1 | 2 => Style::default().fg(Color::White),
            _ => Style::default().fg(Color::Gray),
        };
        lines.push(Line::from(Span::styled(
            format!("{:>2}.  {:>5}   {}", rank + 1, entry.score, entry.date),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
