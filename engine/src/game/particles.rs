use super::session_rng::SessionRng;
use super::types::{ColorRange, Point, Rgb};

/// Top particle speed per axis, in cells per tick.
const MAX_AXIS_SPEED: f32 = 0.1;

/// A burst fragment. Positions and velocities are continuous and measured in
/// cell units; the renderer scales them to pixels.
#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub age: u32,
    pub lifespan: u32,
}

impl Particle {
    fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.age += 1;
    }

    fn expired(&self) -> bool {
        self.age >= self.lifespan
    }

    /// Remaining life in [0, 1]; drives the renderer's fade-out.
    pub fn life_fraction(&self) -> f32 {
        (1.0 - self.age as f32 / self.lifespan as f32).max(0.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawns `count` particles at the center of `origin`, each with its own
    /// random velocity and a color drawn from `colors`.
    pub fn spawn_burst(
        &mut self,
        origin: Point,
        count: usize,
        lifespan: u32,
        colors: ColorRange,
        rng: &mut SessionRng,
    ) {
        let center_x = origin.x as f32 + 0.5;
        let center_y = origin.y as f32 + 0.5;
        for _ in 0..count {
            self.particles.push(Particle {
                x: center_x,
                y: center_y,
                vx: rng.random_range(-1.0..1.0f32) * MAX_AXIS_SPEED,
                vy: rng.random_range(-1.0..1.0f32) * MAX_AXIS_SPEED,
                color: colors.sample(rng),
                age: 0,
                lifespan,
            });
        }
    }

    /// Moves and ages every particle, then drops the expired ones. One pass;
    /// retain does the filtering after all mutation is done.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.advance();
        }
        self.particles.retain(|particle| !particle.expired());
    }
}
