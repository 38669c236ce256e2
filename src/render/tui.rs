use std::collections::HashMap;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Position, Session};
use crate::metrics::GameMetrics;

use super::surface::{Surface, TileColor, TileId};

struct Tile {
    pos: Position,
    color: TileColor,
}

/// A `Surface` backed by a terminal: a retained set of tiles redrawn
/// from scratch each render frame.
///
/// One grid cell maps to a 2x1 character block, so the reported pixel
/// dimensions are exact cell multiples and the playable rectangle always
/// lands on character boundaries.
pub struct TerminalSurface {
    cell: i32,
    px_width: i32,
    px_height: i32,
    tiles: HashMap<TileId, Tile>,
    next_id: u32,
}

impl TerminalSurface {
    /// Build a surface covering `cols` x `rows` terminal characters
    pub fn new(cols: u16, rows: u16, cell: i32) -> Self {
        Self {
            cell,
            px_width: (cols as i32 / 2) * cell,
            px_height: rows as i32 * cell,
            tiles: HashMap::new(),
            next_id: 0,
        }
    }

    fn cell_colors(&self) -> HashMap<(i32, i32), TileColor> {
        self.tiles
            .values()
            .map(|tile| ((tile.pos.x / self.cell, tile.pos.y / self.cell), tile.color))
            .collect()
    }
}

impl Surface for TerminalSurface {
    fn dimensions(&self) -> (i32, i32) {
        (self.px_width, self.px_height)
    }

    fn create_tile(&mut self, pos: Position, _size: i32, color: TileColor) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        self.tiles.insert(id, Tile { pos, color });
        id
    }

    fn move_tile(&mut self, id: TileId, pos: Position) {
        if let Some(tile) = self.tiles.get_mut(&id) {
            tile.pos = pos;
        }
    }

    fn recolor_tile(&mut self, id: TileId, color: TileColor) {
        if let Some(tile) = self.tiles.get_mut(&id) {
            tile.color = color;
        }
    }

    fn destroy_tile(&mut self, id: TileId) {
        self.tiles.remove(&id);
    }
}

fn tile_style(color: TileColor) -> Style {
    match color {
        TileColor::Green => Style::default().fg(Color::Green),
        TileColor::Yellow => Style::default().fg(Color::Yellow),
        TileColor::Red => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        surface: &TerminalSurface,
        session: &Session,
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

        let stats = self.render_stats(chunks[0], session, metrics);
        frame.render_widget(stats, chunks[0]);

        let grid = self.render_grid(chunks[1], surface);
        frame.render_widget(grid, chunks[1]);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, surface: &TerminalSurface) -> Paragraph<'_> {
        let occupied = surface.cell_colors();
        let (px_width, px_height) = surface.dimensions();
        let cols = px_width / surface.cell;
        let rows = px_height / surface.cell;

        let mut lines = Vec::new();
        for row in 0..rows {
            let mut spans = Vec::new();
            for col in 0..cols {
                let span = match occupied.get(&(col, row)) {
                    Some(&color) => Span::styled("██", tile_style(color)),
                    None => Span::styled("· ", Style::default().fg(Color::DarkGray)),
                };
                spans.push(span);
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

    fn render_stats(
        &self,
        _area: Rect,
        session: &Session,
        metrics: &GameMetrics,
    ) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score.value().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("High: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.rounds_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
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
