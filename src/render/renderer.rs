use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::canvas::CanvasBuffer;
use crate::game::{Paint, Point, Referee};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        referee: &Referee,
        canvas: &CanvasBuffer,
        metrics: &GameMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(referee, metrics);
        frame.render_widget(stats, chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(referee, canvas);
        frame.render_widget(grid, game_area);

        // Text painted on the canvas (the game over message) floats above the grid
        if !canvas.text_lines().is_empty() {
            let popup = centered_rect(canvas, game_area);
            frame.render_widget(Clear, popup);
            frame.render_widget(self.render_text_overlay(canvas), popup);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, referee: &Referee, canvas: &CanvasBuffer) -> Paragraph<'_> {
        let head = referee.is_running().then(|| referee.snake().head());
        let mut lines = Vec::with_capacity(canvas.rows());

        for y in 0..canvas.rows() {
            let mut spans = Vec::with_capacity(canvas.columns());

            for x in 0..canvas.columns() {
                let pos = Point::new(x as i32, y as i32);
                let paint = canvas.cell(pos).unwrap_or_default();

                let cell = match paint {
                    Paint::Snake if Some(pos) == head => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Paint::Snake => Span::styled("□ ", Style::default().fg(Color::Green)),
                    Paint::Food => Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    ),
                    Paint::Text => Span::styled("  ", Style::default().bg(Color::White)),
                    Paint::Background => {
                        Span::styled(". ", Style::default().fg(Color::DarkGray))
                    }
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, referee: &Referee, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                referee.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Tick: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{:.0}ms", referee.interval_ms()),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_text_overlay(&self, canvas: &CanvasBuffer) -> Paragraph<'_> {
        let mut text = vec![Line::from("")];
        for line in canvas.text_lines() {
            // Larger fonts are the headline
            let style = if line.font_px > 20 {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            text.push(Line::from(Span::styled(line.text.clone(), style)));
        }
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" or mouse swipe to move | "),
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

/// Box for the text overlay, centered on the row of the first text line
fn centered_rect(canvas: &CanvasBuffer, area: Rect) -> Rect {
    let lines = canvas.text_lines();
    let longest = lines.iter().map(|l| l.text.chars().count()).max().unwrap_or(0);
    let width = ((longest + 6) as u16).max(20).min(area.width);
    let height = ((lines.len() + 5) as u16).min(area.height);

    // The grid block has a one-row border above the first canvas row
    let anchor_row = lines
        .first()
        .map(|l| canvas.text_row(l) as u16 + 1)
        .unwrap_or(area.height / 2);
    let top = anchor_row
        .saturating_sub(height / 2)
        .min(area.height.saturating_sub(height));

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + top,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, RenderSurface};

    #[test]
    fn test_overlay_fits_inside_area() {
        let mut canvas = CanvasBuffer::new(400, 400, 20);
        canvas.fill_text("Game over", 200, 200, 30, Paint::Text);
        canvas.fill_text("Score: 12", 200, 230, 20, Paint::Text);

        let area = Rect::new(4, 3, 60, 22);
        let popup = centered_rect(&canvas, area);

        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.height, 7);
    }

    #[test]
    fn test_render_into_test_backend() {
        use ratatui::{Terminal, backend::TestBackend};

        let config = GameConfig {
            seed: Some(3),
            ..GameConfig::small()
        };
        let referee = Referee::from_config(&config);
        let mut canvas = CanvasBuffer::for_board(referee.board());
        referee.start(&mut canvas);

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &referee, &canvas, &GameMetrics::new());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("Score: "));
        assert!(content.contains("■"));
    }
}
