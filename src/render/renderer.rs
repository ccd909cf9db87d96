use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::frame::RenderFrame;
use crate::game::{self, Direction, GRID_SIZE, Position, RoundEnd};
use crate::metrics::GameMetrics;

/// Each tile is two terminal columns wide so cells look square
const TILE_WIDTH: u16 = 2;

fn rgb(color: game::Color) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^^",
        Direction::Down => "vv",
        Direction::Left => "<<",
        Direction::Right => ">>",
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderFrame<'_>, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(view, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = centered(
            chunks[1],
            GRID_SIZE as u16 * TILE_WIDTH + 2,
            GRID_SIZE as u16 + 2,
        );
        frame.render_widget(self.render_grid(view), board_area);

        if view.is_game_over() {
            let overlay = centered(board_area, board_area.width.saturating_sub(4), 8);
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.render_game_over(view), overlay);
        }

        // Render footer with controls
        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, view: &RenderFrame<'_>) -> Paragraph<'_> {
        let head = view.head();
        let snake = Style::default().bg(rgb(game::Color::SNAKE_BLUE));

        let lines: Vec<Line> = view
            .tiles
            .rows()
            .enumerate()
            .map(|(y, row)| {
                let spans: Vec<Span> = row
                    .iter()
                    .enumerate()
                    .map(|(x, tile)| {
                        let pos = Position::new(x as i32, y as i32);

                        if Some(pos) == head {
                            Span::styled(
                                head_glyph(view.direction),
                                snake.fg(Color::White).add_modifier(Modifier::BOLD),
                            )
                        } else if view.body.contains(&pos) {
                            Span::styled("  ", snake)
                        } else if Some(pos) == view.food {
                            Span::styled(
                                "()",
                                Style::default()
                                    .fg(rgb(game::Color::APPLE_RED))
                                    .bg(rgb(*tile))
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled("  ", Style::default().bg(rgb(*tile)))
                        }
                    })
                    .collect();

                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(rgb(game::Color::DARKER_GREEN)))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, view: &RenderFrame<'_>, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(view.body.len().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("FPS: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.fps.to_string(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, view: &RenderFrame<'_>) -> Paragraph<'_> {
        let (headline, color) = match view.round_end {
            Some(RoundEnd::BoardCleared) => ("BOARD CLEARED", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };
        let final_score = view.final_score.unwrap_or(view.score);

        let text = vec![
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    final_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" restart  ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(rgb(game::Color::DARKEST_GREEN))),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
