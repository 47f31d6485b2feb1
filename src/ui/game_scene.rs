//! Rendering for the game screen. Consumes a `SimSnapshot` and scales the
//! pixel-space playfield onto whatever cell grid the terminal provides; no
//! simulation logic lives here.

use crate::sim::{Mode, SimSnapshot};
use crate::ui::game_common::{render_game_over_overlay, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the game scene (play area, status bar, info panel).
pub fn render_game(frame: &mut Frame, area: Rect, snap: &SimSnapshot) {
    if snap.mode == Mode::GameOver {
        render_crash_overlay(frame, area, snap);
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Game area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(22)])
        .split(inner);

    // Play area (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(h_chunks[0]);

    render_play_area(frame, v_chunks[0], snap);
    render_status_bar_content(frame, v_chunks[1], snap);
    render_info_panel(frame, h_chunks[1], snap);
}

/// What occupies one display cell, in paint priority order.
enum Cell {
    Bird,
    Pipe,
    Ground,
    Sky,
}

/// Render the scrolling playfield cell by cell.
fn render_play_area(frame: &mut Frame, area: Rect, snap: &SimSnapshot) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let c = &snap.config;
    // Pixels per display cell on each axis
    let x_scale = c.width / width as f64;
    let y_scale = c.height / height as f64;

    let bird_col = ((snap.bird.x / x_scale) as usize).min(width - 1);
    let bird_row = ((snap.bird.y / y_scale) as usize).min(height - 1);

    let bird_glyph = if snap.bird.rotation < -5.0 {
        "▲" // climbing
    } else if snap.bird.rotation > 45.0 {
        "▼" // nose-dive
    } else {
        "►"
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let game_y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let game_x = (col as f64 + 0.5) * x_scale;

            let cell = if row == bird_row && col == bird_col {
                Cell::Bird
            } else if game_y >= c.height - c.ground_margin {
                Cell::Ground
            } else if covers_hazard(snap, game_x, game_y) {
                Cell::Pipe
            } else {
                Cell::Sky
            };

            spans.push(match cell {
                Cell::Bird => Span::styled(
                    bird_glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::Ground => {
                    // Tick-phase offset scrolls the ground texture with the pipes
                    let phase = (col as u64 + snap.tick_count / 4) % 2;
                    let glyph = if phase == 0 { "▓" } else { "▒" };
                    Span::styled(glyph, Style::default().fg(Color::Green))
                }
                Cell::Sky => Span::raw(" "),
            });
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

/// True when the pixel position lies inside any pipe's hazard columns.
fn covers_hazard(snap: &SimSnapshot, game_x: f64, game_y: f64) -> bool {
    let c = &snap.config;
    for pipe in &snap.pipes {
        if game_x >= pipe.x && game_x < pipe.x + c.pipe_width {
            return game_y < pipe.gap_top || game_y >= pipe.gap_top + c.pipe_gap;
        }
    }
    false
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snap: &SimSnapshot) {
    match snap.mode {
        Mode::Ready => render_status_bar(
            frame,
            area,
            "Press Space to flap!",
            Color::Yellow,
            &[("[Space/Up]", "Flap"), ("[Esc]", "Menu")],
        ),
        _ => render_status_bar(
            frame,
            area,
            &format!("Score: {}", snap.score),
            Color::Green,
            &[("[Space/Up]", "Flap"), ("[Esc]", "Menu")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &SimSnapshot) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snap.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snap.high_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            " Slip through the",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " gaps. Don't touch",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " anything.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

fn render_crash_overlay(frame: &mut Frame, area: Rect, snap: &SimSnapshot) {
    let message = match snap.score {
        0 => "You didn't make it past the first pipe.".to_string(),
        1 => "You passed 1 pipe before crashing.".to_string(),
        n => format!("You passed {} pipes before crashing.", n),
    };
    let callout = if snap.score > snap.high_score && snap.score > 0 {
        "New best score!"
    } else {
        ""
    };
    render_game_over_overlay(
        frame,
        area,
        "CRASHED!",
        &message,
        callout,
        &[("[Enter]", "Play again"), ("[Esc]", "Menu")],
    );
}
