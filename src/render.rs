use crossterm::style::Color;
use crossterm::Result;

use crate::state::GameState;
use crate::term::Screen;
use crate::vec2::Vec2;
use crate::Coords;

const BOARD_BG: Color = Color::White;
const SNAKE_BG: Color = Color::Green;
const FOOD_BG: Color = Color::Red;

/// Paints one full frame: background fill, bounding frame, snake and food.
/// Stateless; the board origin is recomputed from the current surface size
/// so the board stays centered across resizes.
pub fn draw(screen: &mut Screen, game: &GameState) -> Result<()> {
    let origin = board_origin(screen.size(), (game.width(), game.height()));

    for y in 0..=game.height() {
        for x in 0..=game.width() {
            screen.put_cell(to_screen(origin, Vec2::new(x, y)), ' ', BOARD_BG)?;
        }
    }

    draw_frame(screen, origin, game.width(), game.height())?;

    for &segment in game.snake() {
        screen.put_cell(to_screen(origin, segment), ' ', SNAKE_BG)?;
    }
    screen.put_cell(to_screen(origin, game.food()), ' ', FOOD_BG)?;

    Ok(())
}

fn draw_frame(screen: &mut Screen, origin: Coords, width: i32, height: i32) -> Result<()> {
    for x in 0..=width {
        let ch = if x == 0 || x == width { '+' } else { '-' };
        screen.put_at(to_screen(origin, Vec2::new(x, 0)), ch)?;
        screen.put_at(to_screen(origin, Vec2::new(x, height)), ch)?;
    }

    for y in 1..height {
        screen.put_at(to_screen(origin, Vec2::new(0, y)), '|')?;
        screen.put_at(to_screen(origin, Vec2::new(width, y)), '|')?;
    }

    Ok(())
}

// Centers the board on the surface; clamps at the top-left corner when the
// terminal is smaller than the board.
fn board_origin(surface: Coords, board: (i32, i32)) -> Coords {
    let ox = (surface.0 / 2).saturating_sub(board.0 as u16 / 2);
    let oy = (surface.1 / 2).saturating_sub(board.1 as u16 / 2);
    (ox, oy)
}

fn to_screen(origin: Coords, pos: Vec2) -> Coords {
    (origin.0 + pos.x as u16, origin.1 + pos.y as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_is_centered_on_a_large_surface() {
        assert_eq!(board_origin((120, 40), (50, 20)), (35, 10));
        assert_eq!(board_origin((51, 21), (50, 20)), (0, 0));
    }

    #[test]
    fn origin_clamps_on_an_undersized_surface() {
        assert_eq!(board_origin((30, 10), (50, 20)), (0, 0));
        assert_eq!(board_origin((0, 0), (50, 20)), (0, 0));
    }

    #[test]
    fn game_cells_offset_by_the_origin() {
        assert_eq!(to_screen((35, 10), Vec2::new(0, 0)), (35, 10));
        assert_eq!(to_screen((35, 10), Vec2::new(50, 20)), (85, 30));
    }
}
