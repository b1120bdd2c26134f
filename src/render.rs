use std::fmt::Write;

use crate::game::GameState;

const BORDER_CHAR: char = '#';
const FOOD_CHAR: char = 'F';
const SNAKE_CHAR: char = 'O';

/// Project the game state onto a full text frame: border rows top and
/// bottom, `#` side columns, food and snake markers, then the score and the
/// control hint. Read-only, so the same state always yields the same frame.
/// Lines end in `\r\n` because the terminal is in raw mode.
pub fn frame(state: &GameState) -> String {
    let width = state.width() as usize;
    let height = state.height() as usize;
    let mut out = String::with_capacity((width + 2) * (height + 4));

    border_row(&mut out, width);

    for y in 0..state.height() {
        for x in 0..state.width() {
            let ch = if x == 0 || x == state.width() - 1 {
                BORDER_CHAR
            } else if (x, y) == state.food() {
                FOOD_CHAR
            } else if state.snake().contains((x, y)) {
                SNAKE_CHAR
            } else {
                ' '
            };
            out.push(ch);
        }
        out.push_str("\r\n");
    }

    border_row(&mut out, width);

    let _ = write!(out, "Score: {}\r\n", state.score());
    out.push_str("Arrows or WASD to steer, Esc to quit\r\n");
    out
}

fn border_row(out: &mut String, width: usize) {
    for _ in 0..width {
        out.push(BORDER_CHAR);
    }
    out.push_str("\r\n");
}
