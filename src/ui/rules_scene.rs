//! Static "How to Play" screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_rules(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" How to Play ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Keep the bird in the air.",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Gravity pulls the bird down every frame."),
        Line::from("Space or ↑ flaps: an instant hop upward."),
        Line::from(""),
        Line::from("Pipes scroll in from the right. Slip through"),
        Line::from("the gap between each pair - touching a pipe"),
        Line::from("or the ground ends the run."),
        Line::from(""),
        Line::from("Each pipe you pass is worth one point."),
        Line::from("Your ten best runs are kept on the local"),
        Line::from("leaderboard."),
        Line::from(""),
        Line::from(Span::styled(
            "The visible bird is bigger than the part that",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "can crash. Close calls are encouraged.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc/Enter] Back to menu",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
