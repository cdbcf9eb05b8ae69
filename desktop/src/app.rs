use std::time::Instant;

use eframe::egui;
use engine::game::{Direction, GameSnapshot, GameState, SessionRng, TickClock};

use crate::config::DisplayConfig;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(50, 50, 50);
const GRID_LINE: egui::Color32 = egui::Color32::from_rgb(100, 100, 100);
const SNAKE_HEAD: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const SNAKE_TAIL: egui::Color32 = egui::Color32::from_rgb(0, 150, 0);
const FOOD: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);

pub struct ArcadeApp {
    state: GameState,
    rng: SessionRng,
    clock: TickClock,
    last_frame: Instant,
    display: DisplayConfig,
}

impl ArcadeApp {
    pub fn new(state: GameState, rng: SessionRng, display: DisplayConfig) -> Self {
        Self {
            state,
            rng,
            clock: TickClock::new(),
            last_frame: Instant::now(),
            display,
        }
    }

    /// Keyboard is polled here and forwarded as intents; the simulation only
    /// sees them at the next tick boundary.
    fn handle_input(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if self.state.is_game_over() {
                if i.key_pressed(egui::Key::Space) {
                    self.state.reset(&mut self.rng);
                    self.clock.reset();
                }
                return;
            }

            if i.key_pressed(egui::Key::ArrowUp) {
                self.state.set_direction(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                self.state.set_direction(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                self.state.set_direction(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                self.state.set_direction(Direction::Right);
            }
        });
    }

    fn step_simulation(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let ticks = self.clock.advance(elapsed, self.state.tick_rate());
        for _ in 0..ticks {
            self.state.update(&mut self.rng);
        }
    }

    fn paint_board(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let cell = self.display.cell_size_px;
        let grid = self.state.settings().grid;
        let canvas_width = grid.width as f32 * cell;
        let canvas_height = grid.height as f32 * cell;

        let (response, painter) = ui.allocate_painter(
            egui::Vec2::new(canvas_width, canvas_height),
            egui::Sense::hover(),
        );
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, BACKGROUND);

        if self.display.show_grid_lines {
            let stroke = egui::Stroke::new(1.0, GRID_LINE);
            for x in 0..=grid.width {
                let px = origin.x + x as f32 * cell;
                painter.line_segment(
                    [egui::pos2(px, origin.y), egui::pos2(px, origin.y + canvas_height)],
                    stroke,
                );
            }
            for y in 0..=grid.height {
                let py = origin.y + y as f32 * cell;
                painter.line_segment(
                    [egui::pos2(origin.x, py), egui::pos2(origin.x + canvas_width, py)],
                    stroke,
                );
            }
        }

        // body shades from a bright head to a darker tail
        let len = snapshot.body.len().max(1);
        for (i, segment) in snapshot.body.iter().enumerate() {
            let t = i as f32 / len as f32;
            let rounding = if i == 0 { 4.0 } else { 2.0 };
            painter.rect_filled(
                cell_rect(origin, cell, segment.x, segment.y),
                rounding,
                lerp_color(SNAKE_HEAD, SNAKE_TAIL, t),
            );
        }

        // a pupil on the head shows the travel direction
        if let Some(head) = snapshot.body.first() {
            let head_center = cell_rect(origin, cell, head.x, head.y).center();
            let (dx, dy) = match snapshot.direction {
                Direction::Up => (0.0, -1.0),
                Direction::Down => (0.0, 1.0),
                Direction::Left => (-1.0, 0.0),
                Direction::Right => (1.0, 0.0),
            };
            painter.circle_filled(
                head_center + egui::vec2(dx * cell * 0.25, dy * cell * 0.25),
                cell * 0.12,
                egui::Color32::BLACK,
            );
        }

        painter.rect_filled(
            cell_rect(origin, cell, snapshot.food.x, snapshot.food.y),
            cell / 2.0,
            FOOD,
        );

        // particles fade out with their remaining life
        for view in &snapshot.particles {
            let alpha = (view.life_fraction * 255.0) as u8;
            let center = egui::pos2(origin.x + view.x * cell, origin.y + view.y * cell);
            painter.rect_filled(
                egui::Rect::from_center_size(center, egui::vec2(cell / 2.0, cell / 2.0)),
                cell / 4.0,
                egui::Color32::from_rgba_unmultiplied(
                    view.color.r,
                    view.color.g,
                    view.color.b,
                    alpha,
                ),
            );
        }

        if snapshot.game_over {
            let center = response.rect.center();
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                "GAME OVER",
                egui::FontId::proportional(48.0),
                FOOD,
            );
            painter.text(
                center + egui::vec2(0.0, 48.0),
                egui::Align2::CENTER_CENTER,
                "Press Space to restart",
                egui::FontId::proportional(20.0),
                egui::Color32::WHITE,
            );
        }
    }
}

impl eframe::App for ArcadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.step_simulation();
        let snapshot = self.state.snapshot();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("Score: {}", snapshot.score));
                ui.separator();
                ui.label(format!("Level: {}", snapshot.level));
                ui.separator();
                ui.label(format!("Speed: {} ticks/s", snapshot.tick_rate));
            });
            ui.separator();
            self.paint_board(ui, &snapshot);
        });

        ctx.request_repaint();
    }
}

fn cell_rect(origin: egui::Pos2, cell: f32, x: usize, y: usize) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(origin.x + x as f32 * cell, origin.y + y as f32 * cell),
        egui::vec2(cell, cell),
    )
}

fn lerp_color(from: egui::Color32, to: egui::Color32, t: f32) -> egui::Color32 {
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
    egui::Color32::from_rgb(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}
