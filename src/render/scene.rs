use crate::game::{ColorTag, Session};

use super::surface::{Surface, TileColor, TileId};

impl From<ColorTag> for TileColor {
    fn from(tag: ColorTag) -> Self {
        match tag {
            ColorTag::Normal => TileColor::Green,
            ColorTag::Alert => TileColor::Yellow,
        }
    }
}

/// Maps the session onto reusable surface tiles.
///
/// One tile per snake segment plus one for the fruit. On every sync
/// existing tiles are repositioned in place; tiles are created only when
/// the snake grew and destroyed only when a reset shrank it, so a death
/// never tears the whole scene down.
pub struct Scene {
    segment_tiles: Vec<TileId>,
    fruit_tile: Option<TileId>,
    cell: i32,
    body_color: TileColor,
}

impl Scene {
    pub fn new(cell: i32) -> Self {
        Self {
            segment_tiles: Vec::new(),
            fruit_tile: None,
            cell,
            body_color: TileColor::Green,
        }
    }

    /// Bring the surface's tiles in line with the session state
    pub fn sync<S: Surface>(&mut self, surface: &mut S, session: &Session) {
        let segments = session.snake.segments();
        let color = TileColor::from(session.color);

        // Shrink after a round reset
        while self.segment_tiles.len() > segments.len() {
            let id = self.segment_tiles.pop().unwrap();
            surface.destroy_tile(id);
        }

        let recolor = color != self.body_color;
        for (i, &pos) in segments.iter().enumerate() {
            match self.segment_tiles.get(i) {
                Some(&id) => {
                    surface.move_tile(id, pos);
                    if recolor {
                        surface.recolor_tile(id, color);
                    }
                }
                None => {
                    let id = surface.create_tile(pos, self.cell, color);
                    self.segment_tiles.push(id);
                }
            }
        }
        self.body_color = color;

        match self.fruit_tile {
            Some(id) => surface.move_tile(id, session.fruit.pos),
            None => {
                let id = surface.create_tile(session.fruit.pos, self.cell, TileColor::Red);
                self.fruit_tile = Some(id);
            }
        }
    }
}
