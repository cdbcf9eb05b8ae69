use std::collections::{HashSet, VecDeque};

use super::types::{Direction, GridSize, Point};

/// Outcome of advancing the snake by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Alive,
    Collided,
}

#[derive(Clone, Debug)]
pub struct Snake {
    /// Body cells, head at the front.
    body: VecDeque<Point>,
    direction: Direction,
    pending_direction: Direction,
    /// Target body length. The body catches up to it one cell per tick, which
    /// is what makes growth a one-tick tail hold rather than a splice.
    target_len: usize,
    pub score: u32,
}

impl Snake {
    /// A new snake: a single cell at the grid center, heading right, with the
    /// body still to grow out to `target_len`.
    pub fn new(grid: GridSize, target_len: usize) -> Self {
        let mut body = VecDeque::new();
        body.push_back(grid.center());
        Self {
            body,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            target_len,
            score: 0,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn occupied_set(&self) -> HashSet<Point> {
        self.body.iter().copied().collect()
    }

    /// Buffers `direction` for the next tick. A request to reverse straight
    /// into the neck is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = direction;
        }
    }

    /// Applies the buffered direction and moves one cell, wrapping at the
    /// grid edges. On self-collision nothing is mutated and the caller gets
    /// `Collided`; otherwise the head advances and the tail is trimmed back
    /// to the target length.
    pub fn advance(&mut self, grid: GridSize) -> StepOutcome {
        self.direction = self.pending_direction;
        let next_head = grid.step(self.head(), self.direction);

        // The head cell and the one right behind it are skipped: with one
        // step per tick the neck is always adjacent, never a real collision.
        if self.body.iter().skip(2).any(|cell| *cell == next_head) {
            return StepOutcome::Collided;
        }

        self.body.push_front(next_head);
        if self.body.len() > self.target_len {
            self.body.pop_back();
        }
        StepOutcome::Alive
    }

    /// Raises the target length by one; the tail stays put for exactly one
    /// subsequent tick.
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    #[cfg(test)]
    pub(crate) fn from_body(cells: Vec<Point>, direction: Direction) -> Self {
        let target_len = cells.len();
        Self {
            body: cells.into(),
            direction,
            pending_direction: direction,
            target_len,
            score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    #[test]
    fn test_new_snake_is_single_cell_at_center() {
        let snake = Snake::new(GRID, 3);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Point::new(5, 5));
        assert_eq!(snake.target_len(), 3);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.score, 0);
    }

    #[test]
    fn test_body_grows_out_to_target_length() {
        let mut snake = Snake::new(GRID, 3);
        snake.advance(GRID);
        assert_eq!(snake.len(), 2);
        snake.advance(GRID);
        assert_eq!(snake.len(), 3);
        snake.advance(GRID);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_reversal_request_is_ignored() {
        let mut snake = Snake::new(GRID, 3);
        snake.set_pending_direction(Direction::Left);
        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.head(), Point::new(6, 5));
    }

    #[test]
    fn test_reversal_check_uses_current_direction_not_pending() {
        let mut snake = Snake::new(GRID, 3);
        // Up is accepted, then Left is checked against Right (the direction
        // actually travelled last tick) and still accepted.
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Left);
        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_perpendicular_turn_applies_next_tick() {
        let mut snake = Snake::new(GRID, 3);
        snake.set_pending_direction(Direction::Down);
        snake.advance(GRID);
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.head(), Point::new(5, 6));
    }

    #[test]
    fn test_wraps_right_edge() {
        let mut snake = Snake::from_body(vec![Point::new(9, 4)], Direction::Right);
        snake.advance(GRID);
        assert_eq!(snake.head(), Point::new(0, 4));
    }

    #[test]
    fn test_wraps_left_edge() {
        let mut snake = Snake::from_body(vec![Point::new(0, 4)], Direction::Left);
        snake.advance(GRID);
        assert_eq!(snake.head(), Point::new(9, 4));
    }

    #[test]
    fn test_wraps_top_edge() {
        let mut snake = Snake::from_body(vec![Point::new(4, 0)], Direction::Up);
        snake.advance(GRID);
        assert_eq!(snake.head(), Point::new(4, 9));
    }

    #[test]
    fn test_wraps_bottom_edge() {
        let mut snake = Snake::from_body(vec![Point::new(4, 9)], Direction::Down);
        snake.advance(GRID);
        assert_eq!(snake.head(), Point::new(4, 0));
    }

    #[test]
    fn test_collision_with_third_body_cell() {
        // Moving up from (5,6) lands on (5,5), the third body cell.
        let mut snake = Snake::from_body(
            vec![
                Point::new(5, 6),
                Point::new(6, 6),
                Point::new(6, 5),
                Point::new(5, 5),
            ],
            Direction::Up,
        );
        let before: Vec<Point> = snake.cells().collect();
        assert_eq!(snake.advance(GRID), StepOutcome::Collided);
        let after: Vec<Point> = snake.cells().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_neck_cell_is_not_a_collision() {
        // A two-cell loop on a width-2 ring: the new head lands on the cell
        // right behind the head, which is excluded from the check.
        let grid = GridSize::new(2, 10);
        let mut snake =
            Snake::from_body(vec![Point::new(0, 4), Point::new(1, 4)], Direction::Right);
        assert_eq!(snake.advance(grid), StepOutcome::Alive);
        assert_eq!(snake.head(), Point::new(1, 4));
    }

    #[test]
    fn test_grow_defers_tail_removal_one_tick() {
        let mut snake = Snake::from_body(
            vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
        );
        snake.grow();
        snake.advance(GRID);
        assert_eq!(snake.len(), 4);
        snake.advance(GRID);
        assert_eq!(snake.len(), 4);
    }
}
