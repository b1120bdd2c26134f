use crate::Coords;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit movement vector, y growing downwards.
    pub fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// The snake body: head at index 0, tail at the end. Length is always >= 1
/// and segments never overlap while the game is live.
pub struct Snake {
    body: Vec<Coords>,
}

impl Snake {
    pub fn new(head: Coords) -> Self {
        Snake { body: vec![head] }
    }

    #[cfg(test)]
    pub(crate) fn from_body(body: Vec<Coords>) -> Self {
        Snake { body }
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    pub fn push_head(&mut self, pos: Coords) {
        self.body.insert(0, pos);
    }

    pub fn pop_tail(&mut self) -> Option<Coords> {
        self.body.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_unit_vectors() {
        for dir in [Up, Down, Left, Right] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in [Up, Down, Left, Right] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn head_prepends_and_tail_pops() {
        let mut snake = Snake::new((3, 3));
        snake.push_head((4, 3));
        snake.push_head((5, 3));
        assert_eq!(snake.head(), (5, 3));
        assert_eq!(snake.body(), &[(5, 3), (4, 3), (3, 3)]);
        assert_eq!(snake.pop_tail(), Some((3, 3)));
        assert_eq!(snake.len(), 2);
        assert!(snake.contains((4, 3)));
        assert!(!snake.contains((3, 3)));
    }
}
