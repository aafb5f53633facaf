use macroquad::prelude::*;

use crate::geometry::{Cell, Grid, food_block_rect};

pub const SNAKE_HEAD: Color = YELLOW;
pub const SNAKE_BODY: Color = GREEN;
pub const FOOD: Color = RED;
const BOARD: Color = Color::new(0.05, 0.05, 0.05, 1.0);
const BOARD_EDGE: Color = Color::new(0.25, 0.25, 0.25, 1.0);

/// Drawing primitives the game needs from a display
pub trait RenderSurface {
    fn clear(&mut self);
    fn draw_cell(&mut self, cell: Cell, color: Color);
    /// `size` is in unscaled pixels; the block is centred on `cell`
    fn draw_food_block(&mut self, cell: Cell, size: f32, color: Color);
}

/// The macroquad window, with the grid scaled to fit and centred
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSurface {
    grid: Grid,
    cell_size: f32,
    scale: f32,
    off_x: f32,
    off_y: f32,
}

impl ScreenSurface {
    /// Layout for a `screen_w` x `screen_h` window
    pub fn fit(grid: Grid, cell_size: f32, screen_w: f32, screen_h: f32) -> Self {
        let (board_w, board_h) = grid.pixel_size(cell_size);
        // Target 90% of the screen, keep the grid aspect
        let scale = ((screen_w * 0.9) / board_w).min((screen_h * 0.9) / board_h).max(0.01);
        Self {
            grid,
            cell_size,
            scale,
            off_x: (screen_w - board_w * scale) * 0.5,
            off_y: (screen_h - board_h * scale) * 0.5,
        }
    }

    pub fn fit_window(grid: Grid, cell_size: f32) -> Self {
        Self::fit(grid, cell_size, screen_width(), screen_height())
    }

    /// Screen position of an unscaled board pixel
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (self.off_x + x * self.scale, self.off_y + y * self.scale)
    }
}

impl RenderSurface for ScreenSurface {
    fn clear(&mut self) {
        clear_background(BLACK);
        let (w, h) = self.grid.pixel_size(self.cell_size);
        draw_rectangle(self.off_x, self.off_y, w * self.scale, h * self.scale, BOARD);
        draw_rectangle_lines(
            self.off_x,
            self.off_y,
            w * self.scale,
            h * self.scale,
            2.0,
            BOARD_EDGE,
        );
    }

    fn draw_cell(&mut self, cell: Cell, color: Color) {
        let (px, py) = cell.to_pixel(self.cell_size);
        let (x, y) = self.to_screen(px, py);
        let side = self.cell_size * self.scale;
        draw_rectangle(x, y, side, side, color);
    }

    fn draw_food_block(&mut self, cell: Cell, size: f32, color: Color) {
        let (px, py, side) = food_block_rect(cell, size, self.cell_size);
        let (x, y) = self.to_screen(px, py);
        draw_rectangle(x, y, side * self.scale, side * self.scale, color);
    }
}

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, font_size as f32, color);
}

pub fn draw_hud(score: u32, best: u32) {
    draw_text(&format!("Score: {score}"), 8.0, 20.0, 24.0, WHITE);
    let best_s = format!("Best: {best}");
    let m = measure_text(&best_s, None, 24, 1.0);
    draw_text(&best_s, screen_width() - m.width - 8.0, 20.0, 24.0, WHITE);
}

pub fn draw_game_over(score: u32, best: u32, headline: &str) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), Color::new(0.0, 0.0, 0.0, 0.6));
    let sh = screen_height();
    draw_centered(headline, sh * 0.4, 36, SNAKE_HEAD);
    draw_centered(&format!("Your score: {score}"), sh * 0.4 + 40.0, 24, WHITE);
    draw_centered(&format!("Best: {best}"), sh * 0.4 + 68.0, 20, GRAY);
    draw_centered("R / Enter / tap: Restart   Q: Quit", sh * 0.4 + 100.0, 18, GRAY);
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Clear,
    Cell(Cell, Color),
    Food(Cell, f32, Color),
}

/// Surface that records what was drawn
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
impl RenderSurface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn draw_cell(&mut self, cell: Cell, color: Color) {
        self.ops.push(DrawOp::Cell(cell, color));
    }

    fn draw_food_block(&mut self, cell: Cell, size: f32, color: Color) {
        self.ops.push(DrawOp::Food(cell, size, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_centres_board() {
        // 400x400 board in an 800x400 window: height limits the scale
        let s = ScreenSurface::fit(Grid::new(40, 40), 10.0, 800.0, 400.0);
        assert!((s.scale - 0.9).abs() < 1e-6);
        let (x, y) = s.to_screen(0.0, 0.0);
        assert!((x - 220.0).abs() < 1e-3);
        assert!((y - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_fit_keeps_aspect() {
        let s = ScreenSurface::fit(Grid::new(40, 20), 10.0, 1000.0, 1000.0);
        let (x0, y0) = s.to_screen(0.0, 0.0);
        let (x1, y1) = s.to_screen(400.0, 200.0);
        assert!(((x1 - x0) / (y1 - y0) - 2.0).abs() < 1e-4);
    }
}
