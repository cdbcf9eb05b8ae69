use serde::{Deserialize, Serialize};

use super::session_rng::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }

    /// One cell in `direction` with toroidal wraparound: stepping off an edge
    /// re-enters from the opposite edge.
    pub fn step(&self, from: Point, direction: Direction) -> Point {
        match direction {
            Direction::Up => Point::new(from.x, Self::wrapping_dec(from.y, self.height)),
            Direction::Down => Point::new(from.x, Self::wrapping_inc(from.y, self.height)),
            Direction::Left => Point::new(Self::wrapping_dec(from.x, self.width), from.y),
            Direction::Right => Point::new(Self::wrapping_inc(from.x, self.width), from.y),
        }
    }

    fn wrapping_inc(value: usize, max: usize) -> usize {
        if value + 1 >= max { 0 } else { value + 1 }
    }

    fn wrapping_dec(value: usize, max: usize) -> usize {
        if value == 0 { max - 1 } else { value - 1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Inclusive per-channel bounds to sample burst colors from.
#[derive(Clone, Copy, Debug)]
pub struct ColorRange {
    pub r: (u8, u8),
    pub g: (u8, u8),
    pub b: (u8, u8),
}

impl ColorRange {
    pub fn sample(&self, rng: &mut SessionRng) -> Rgb {
        Rgb::new(
            rng.random_range(self.r.0..=self.r.1),
            rng.random_range(self.g.0..=self.g.1),
            rng.random_range(self.b.0..=self.b.1),
        )
    }
}
