use super::state::GameState;
use super::types::{Direction, Point, Rgb};

/// One particle as the renderer sees it: cell-unit position, color, and how
/// much life it has left for the fade.
#[derive(Clone, Copy, Debug)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub life_fraction: f32,
}

/// Read-only view of one tick, handed to the renderer. The simulation keeps
/// no reference to it and the renderer gets no way to mutate the simulation.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    /// Snake body cells, head first.
    pub body: Vec<Point>,
    pub direction: Direction,
    pub food: Point,
    pub particles: Vec<ParticleView>,
    pub score: u32,
    pub level: u32,
    pub tick_rate: u32,
    pub game_over: bool,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            body: self.snake().cells().collect(),
            direction: self.snake().direction(),
            food: self.food().position,
            particles: self
                .particles()
                .iter()
                .map(|p| ParticleView {
                    x: p.x,
                    y: p.y,
                    color: p.color,
                    life_fraction: p.life_fraction(),
                })
                .collect(),
            score: self.score(),
            level: self.level(),
            tick_rate: self.tick_rate(),
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::session_rng::SessionRng;
    use super::super::settings::GameSettings;
    use super::super::snake::Snake;
    use super::super::types::{GridSize, Point};
    use super::*;

    #[test]
    fn test_snapshot_reflects_state() {
        let settings = GameSettings {
            grid: GridSize::new(10, 10),
            ..GameSettings::default()
        };
        let mut rng = SessionRng::new(42);
        let mut state = GameState::new(settings, &mut rng);
        state.set_snake(Snake::from_body(
            vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)],
            Direction::Right,
        ));
        state.set_food(Point::new(6, 5));

        state.update(&mut rng);
        let snapshot = state.snapshot();

        assert_eq!(snapshot.body[0], Point::new(6, 5));
        assert_eq!(snapshot.body.len(), 3);
        assert_eq!(snapshot.direction, Direction::Right);
        assert_eq!(snapshot.score, 1);
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.tick_rate, 12);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.particles.len(), 10);
        for view in &snapshot.particles {
            assert!(view.life_fraction > 0.9);
            assert!(view.color.r >= 200);
        }
    }
}
