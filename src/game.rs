use rand::seq::SliceRandom;
use rand::Rng;

use crate::snake::{Direction, Snake};
use crate::{Coords, GridInt};

/// The whole game in one place: grid size, snake, heading, food, score and
/// the terminal game-over flag. All transitions go through `steer`, `quit`
/// and `tick`; rendering only ever reads.
pub struct GameState {
    width: GridInt,
    height: GridInt,
    snake: Snake,
    direction: Direction,
    food: Coords,
    score: u32,
    over: bool,
}

impl GameState {
    /// Single-segment snake at the grid center heading right, food on a
    /// random free interior cell.
    pub fn new<R: Rng>(width: GridInt, height: GridInt, rng: &mut R) -> Self {
        let mut state = GameState {
            width,
            height,
            snake: Snake::new((width / 2, height / 2)),
            direction: Direction::Right,
            food: (0, 0),
            score: 0,
            over: false,
        };

        match state.spawn_food(rng) {
            Some(pos) => state.food = pos,
            None => state.over = true, // grid too small to even hold food
        }

        state
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Change heading. A steer straight back into the snake's neck would be
    /// an instant self-collision, so exact reversals are dropped silently.
    pub fn steer(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.direction = direction;
        }
    }

    pub fn quit(&mut self) {
        self.over = true;
    }

    /// Advance one step: move the head, end the game on a wall or body hit,
    /// otherwise grow onto food (respawning it) or translate along.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if self.over {
            return;
        }

        let (dx, dy) = self.direction.delta();
        let head = self.snake.head();
        let new_head = (head.0 + dx, head.1 + dy);

        if !self.in_bounds(new_head) || self.snake.contains(new_head) {
            self.over = true;
            return;
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.score += 1;
            match self.spawn_food(rng) {
                Some(pos) => self.food = pos,
                None => self.over = true, // board full, nowhere left to go
            }
        } else {
            self.snake.pop_tail();
        }
    }

    fn in_bounds(&self, (x, y): Coords) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Uniform pick over the free interior cells, None when the snake covers
    /// them all.
    fn spawn_food<R: Rng>(&self, rng: &mut R) -> Option<Coords> {
        let free: Vec<Coords> = (1..self.height - 1)
            .flat_map(|y| (1..self.width - 1).map(move |x| (x, y)))
            .filter(|&pos| !self.snake.contains(pos))
            .collect();

        free.choose(rng).copied()
    }
}
