//! Main menu screen.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Menu destinations, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Rules,
    Leaderboard,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Play,
        MenuItem::Rules,
        MenuItem::Leaderboard,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Rules => "How to Play",
            MenuItem::Leaderboard => "Leaderboard",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Menu navigation state.
pub struct MenuScreen {
    pub selected_index: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_index + 1 < MenuItem::ALL.len() {
            self.selected_index += 1;
        }
    }

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.selected_index]
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, high_score: u32) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Skyward ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Centered column for the title art, menu list, and footer
        let content_height: u16 = 4 + MenuItem::ALL.len() as u16 + 3;
        let y = inner.y + inner.height.saturating_sub(content_height) / 2;

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "~ S K Y W A R D ~",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "a one-button bird",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(
            header,
            Rect::new(inner.x, y, inner.width, 3.min(inner.height)),
        );

        let items: Vec<ListItem> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let prefix = if i == self.selected_index { "> " } else { "  " };
                let style = if i == self.selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(format!("{}{}", prefix, item.label())).style(style)
            })
            .collect();

        let list_width = 16u16.min(inner.width);
        let list_x = inner.x + inner.width.saturating_sub(list_width) / 2;
        let list_y = y + 4;
        let bottom = inner.y + inner.height;
        if list_y < bottom {
            let list_area = Rect::new(
                list_x,
                list_y,
                list_width,
                (MenuItem::ALL.len() as u16).min(bottom - list_y),
            );
            frame.render_widget(List::new(items), list_area);
        }

        // Footer: best score + controls
        if inner.height > 2 {
            let footer_area = Rect {
                x: inner.x,
                y: inner.y + inner.height - 2,
                width: inner.width,
                height: 2,
            };
            let best = if high_score > 0 {
                format!("Best: {}", high_score)
            } else {
                "No scores yet".to_string()
            };
            let footer = Paragraph::new(vec![
                Line::from(Span::styled(best, Style::default().fg(Color::Yellow))),
                Line::from(Span::styled(
                    "[↑/↓] Navigate  [Enter] Select  [Q] Quit",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(footer, footer_area);
        }
    }
}
