use std::collections::HashSet;

use super::session_rng::SessionRng;
use super::types::{GridSize, Point};

/// Random placements tried before falling back to a scan of free cells.
const SPAWN_ATTEMPTS: usize = 100;

#[derive(Clone, Debug)]
pub struct Food {
    pub position: Point,
}

impl Food {
    /// Places food on a uniformly random cell outside `occupied`. Rejection
    /// sampling does the work on any board that is not nearly full; the scan
    /// fallback keeps placement terminating on dense boards. `None` means
    /// every cell is occupied and the board is full.
    pub fn spawn(grid: GridSize, occupied: &HashSet<Point>, rng: &mut SessionRng) -> Option<Self> {
        for _ in 0..SPAWN_ATTEMPTS {
            let candidate = Point::new(
                rng.random_range(0..grid.width),
                rng.random_range(0..grid.height),
            );
            if !occupied.contains(&candidate) {
                return Some(Self {
                    position: candidate,
                });
            }
        }

        let free: Vec<Point> = (0..grid.height)
            .flat_map(|y| (0..grid.width).map(move |x| Point::new(x, y)))
            .filter(|cell| !occupied.contains(cell))
            .collect();

        if free.is_empty() {
            return None;
        }
        Some(Self {
            position: free[rng.random_range(0..free.len())],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_spawns_on_occupied_cells() {
        let grid = GridSize::new(6, 6);
        let occupied: HashSet<Point> = (0..6).map(|x| Point::new(x, 2)).collect();
        let mut rng = SessionRng::new(42);

        for _ in 0..1000 {
            let food = Food::spawn(grid, &occupied, &mut rng).unwrap();
            assert!(!occupied.contains(&food.position));
            assert!(food.position.x < 6);
            assert!(food.position.y < 6);
        }
    }

    #[test]
    fn test_finds_the_single_free_cell() {
        let grid = GridSize::new(3, 3);
        let occupied: HashSet<Point> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Point::new(x, y)))
            .filter(|cell| *cell != Point::new(1, 1))
            .collect();
        let mut rng = SessionRng::new(42);

        for _ in 0..50 {
            let food = Food::spawn(grid, &occupied, &mut rng).unwrap();
            assert_eq!(food.position, Point::new(1, 1));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let grid = GridSize::new(3, 3);
        let occupied: HashSet<Point> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Point::new(x, y)))
            .collect();
        let mut rng = SessionRng::new(42);
        assert!(Food::spawn(grid, &occupied, &mut rng).is_none());
    }
}
