//! Terminal cell raster that the starfield paints onto.
//!
//! Each terminal cell covers `cell_width` x `cell_height` surface pixels.
//! A cell holds a background color and at most one foreground glyph; the
//! brightest glyph drawn into a cell during a frame wins.

use std::f32::consts::PI;

use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use starfield_core::{Dimensions, GradientStop, Point, Rgb, Rgba, Surface};

use crate::chars::{
    STAR_CHARS, STAR_RADIUS_STEPS, TRAIL_FALLING, TRAIL_HORIZONTAL, TRAIL_RISING, TRAIL_VERTICAL,
};

/// A foreground character and its resolved color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub bg: Rgb,
    pub glyph: Option<Glyph>,
}

impl Cell {
    /// Keep the brighter of the current glyph and `glyph`.
    fn offer(&mut self, glyph: Glyph) {
        match self.glyph {
            Some(current) if current.fg.luminance() >= glyph.fg.luminance() => {}
            _ => self.glyph = Some(glyph),
        }
    }
}

/// Grid of cells sized to the terminal.
#[derive(Debug, Clone)]
pub struct SkyCanvas {
    cols: u16,
    rows: u16,
    cell_width: f32,
    cell_height: f32,
    cells: Vec<Cell>,
}

impl SkyCanvas {
    pub fn new(cols: u16, rows: u16, cell_width: f32, cell_height: f32) -> Self {
        Self {
            cols,
            rows,
            cell_width,
            cell_height,
            cells: vec![Cell::default(); cols as usize * rows as usize],
        }
    }

    /// Reallocate for a new terminal size. All cells are cleared.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![Cell::default(); cols as usize * rows as usize];
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&Cell> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(self.index(col, row))
    }

    /// Surface-pixel centre of a cell. Used to map mouse events.
    pub fn cell_center(&self, col: u16, row: u16) -> Point {
        Point::new(
            (col as f32 + 0.5) * self.cell_width,
            (row as f32 + 0.5) * self.cell_height,
        )
    }

    /// Cell containing `point`, if it is on the canvas.
    pub fn cell_at(&self, point: Point) -> Option<(u16, u16)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / self.cell_width) as u32;
        let row = (point.y / self.cell_height) as u32;
        if col >= self.cols as u32 || row >= self.rows as u32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    fn index(&self, col: u16, row: u16) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    fn cell_mut(&mut self, col: u16, row: u16) -> &mut Cell {
        let index = self.index(col, row);
        &mut self.cells[index]
    }

    /// Cells whose area comes within `radius` of `center`, with that distance.
    fn cells_near(&self, center: Point, radius: f32) -> Vec<(u16, u16, f32)> {
        if self.cols == 0 || self.rows == 0 {
            return Vec::new();
        }
        let min_col = ((center.x - radius) / self.cell_width).floor().max(0.0) as u32;
        let max_col = ((center.x + radius) / self.cell_width).floor();
        let min_row = ((center.y - radius) / self.cell_height).floor().max(0.0) as u32;
        let max_row = ((center.y + radius) / self.cell_height).floor();
        if max_col < 0.0 || max_row < 0.0 {
            return Vec::new();
        }
        let max_col = (max_col as u32).min(self.cols.saturating_sub(1) as u32);
        let max_row = (max_row as u32).min(self.rows.saturating_sub(1) as u32);

        let mut near = Vec::new();
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let left = col as f32 * self.cell_width;
                let top = row as f32 * self.cell_height;
                let nearest = Point::new(
                    center.x.clamp(left, left + self.cell_width),
                    center.y.clamp(top, top + self.cell_height),
                );
                let distance = center.distance(nearest);
                if distance <= radius {
                    near.push((col as u16, row as u16, distance));
                }
            }
        }
        near
    }

    /// Convert the grid into styled lines, one per row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.rows)
            .map(|row| {
                let spans: Vec<Span> = (0..self.cols)
                    .map(|col| {
                        let cell = self.cells[self.index(col, row)];
                        match cell.glyph {
                            Some(glyph) => Span::styled(
                                glyph.ch.to_string(),
                                Style::new().fg(Color::from(glyph.fg)).bg(Color::from(cell.bg)),
                            ),
                            None => Span::styled(" ", Style::new().bg(Color::from(cell.bg))),
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Render the canvas over the whole frame.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Paragraph::new(self.to_lines()), area);
    }
}

/// Star glyph for a circle of `radius`.
fn star_char(radius: f32) -> char {
    let tier = STAR_RADIUS_STEPS
        .iter()
        .position(|&step| radius < step)
        .unwrap_or(STAR_RADIUS_STEPS.len());
    STAR_CHARS[tier]
}

/// Trail glyph for a step of (`dx`, `dy`) measured in cells.
fn trail_char(dx: f32, dy: f32) -> char {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ay < ax * 0.5 {
        TRAIL_HORIZONTAL
    } else if ax < ay * 0.5 {
        TRAIL_VERTICAL
    } else if (dx > 0.0) == (dy > 0.0) {
        TRAIL_FALLING
    } else {
        TRAIL_RISING
    }
}

impl Surface for SkyCanvas {
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(
            self.cols as f32 * self.cell_width,
            self.rows as f32 * self.cell_height,
        )
    }

    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]) {
        let rows = self.rows.max(1) as f32;
        for row in 0..self.rows {
            let bg = GradientStop::sample(stops, (row as f32 + 0.5) / rows);
            for col in 0..self.cols {
                *self.cell_mut(col, row) = Cell { bg, glyph: None };
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        if radius * 2.0 < self.cell_width.min(self.cell_height) {
            let Some((col, row)) = self.cell_at(center) else {
                return;
            };
            let cell = self.cell_mut(col, row);
            let fg = color.over(cell.bg);
            cell.offer(Glyph {
                ch: star_char(radius),
                fg,
            });
            return;
        }

        for (col, row, distance) in self.cells_near(center, radius) {
            if distance < radius {
                let cell = self.cell_mut(col, row);
                cell.bg = color.over(cell.bg);
            }
        }
    }

    fn fill_radial_glow(&mut self, center: Point, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        // A glow smaller than a cell only tints it in proportion to its area.
        let coverage = (PI * radius * radius / (self.cell_width * self.cell_height)).min(1.0);
        for (col, row, distance) in self.cells_near(center, radius) {
            let falloff = 1.0 - distance / radius;
            let tint = color.with_opacity(color.opacity * falloff * coverage);
            let cell = self.cell_mut(col, row);
            cell.bg = tint.over(cell.bg);
        }
    }

    fn stroke_line(&mut self, start: Point, end: Point, width: f32, from: Rgba, to: Rgba) {
        let dx = (end.x - start.x) / self.cell_width;
        let dy = (end.y - start.y) / self.cell_height;
        let ch = trail_char(dx, dy);
        let strength = (width / 0.5).clamp(0.0, 1.0);
        let steps = (dx.abs().max(dy.abs()) * 2.0).ceil().max(1.0) as u32;

        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            let point = Point::new(
                start.x + (end.x - start.x) * t,
                start.y + (end.y - start.y) * t,
            );
            let Some((col, row)) = self.cell_at(point) else {
                continue;
            };
            let opacity = (from.opacity + (to.opacity - from.opacity) * t) * strength;
            let rgb = from.rgb.lerp(to.rgb, t);
            let cell = self.cell_mut(col, row);
            let fg = rgb.with_opacity(opacity).over(cell.bg);
            cell.offer(Glyph { ch, fg });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> SkyCanvas {
        SkyCanvas::new(10, 4, 8.0, 16.0)
    }

    #[test]
    fn test_dimensions_in_pixels() {
        assert_eq!(canvas().dimensions(), Dimensions::new(80.0, 64.0));
    }

    #[test]
    fn test_cell_mapping() {
        let canvas = canvas();
        assert_eq!(canvas.cell_at(Point::new(0.0, 0.0)), Some((0, 0)));
        assert_eq!(canvas.cell_at(Point::new(17.0, 40.0)), Some((2, 2)));
        assert_eq!(canvas.cell_at(Point::new(80.0, 0.0)), None);
        assert_eq!(canvas.cell_at(Point::new(-0.5, 0.0)), None);
        assert_eq!(canvas.cell_center(1, 1), Point::new(12.0, 24.0));
    }

    #[test]
    fn test_gradient_rows_and_clear() {
        let mut canvas = canvas();
        canvas.fill_circle(Point::new(4.0, 8.0), 0.5, Rgb::WHITE.with_opacity(1.0));
        let stops = [
            GradientStop::new(0.0, Rgb::new(0, 0, 0)),
            GradientStop::new(1.0, Rgb::new(80, 80, 80)),
        ];
        canvas.fill_vertical_gradient(&stops);
        let top = canvas.cell(0, 0).unwrap();
        let bottom = canvas.cell(0, 3).unwrap();
        assert_eq!(top.bg, Rgb::new(10, 10, 10));
        assert_eq!(bottom.bg, Rgb::new(70, 70, 70));
        assert!(top.glyph.is_none());
    }

    #[test]
    fn test_star_glyph_by_radius() {
        assert_eq!(star_char(0.2), '·');
        assert_eq!(star_char(0.7), '•');
        assert_eq!(star_char(1.0), '*');
        assert_eq!(star_char(2.0), '✦');
        assert_eq!(STAR_CHARS.len(), STAR_RADIUS_STEPS.len() + 1);
    }

    #[test]
    fn test_brighter_glyph_wins() {
        let mut canvas = canvas();
        let at = Point::new(4.0, 8.0);
        canvas.fill_circle(at, 1.0, Rgb::WHITE.with_opacity(0.9));
        canvas.fill_circle(at, 0.3, Rgb::WHITE.with_opacity(0.2));
        assert_eq!(canvas.cell(0, 0).unwrap().glyph.unwrap().ch, '*');
    }

    #[test]
    fn test_glow_tints_background() {
        let mut canvas = canvas();
        canvas.fill_radial_glow(Point::new(4.0, 8.0), 3.0, Rgb::WHITE.with_opacity(1.0));
        let tinted = canvas.cell(0, 0).unwrap();
        assert!(tinted.bg.r > 0);
        assert!(tinted.glyph.is_none());
        assert_eq!(canvas.cell(5, 3).unwrap().bg, Rgb::BLACK);
    }

    #[test]
    fn test_line_glyph_direction() {
        assert_eq!(trail_char(3.0, 0.0), TRAIL_HORIZONTAL);
        assert_eq!(trail_char(0.0, -2.0), TRAIL_VERTICAL);
        assert_eq!(trail_char(1.0, 1.0), TRAIL_FALLING);
        assert_eq!(trail_char(-1.0, 1.0), TRAIL_RISING);
    }

    #[test]
    fn test_stroke_marks_cells_along_segment() {
        let mut canvas = canvas();
        let white = Rgb::WHITE.with_opacity(1.0);
        canvas.stroke_line(Point::new(4.0, 8.0), Point::new(76.0, 8.0), 0.5, white, white);
        for col in 0..10 {
            let glyph = canvas.cell(col, 0).unwrap().glyph.expect("trail glyph");
            assert_eq!(glyph.ch, TRAIL_HORIZONTAL);
        }
        assert!(canvas.cell(0, 1).unwrap().glyph.is_none());
    }

    #[test]
    fn test_resize_clears() {
        let mut canvas = canvas();
        canvas.fill_circle(Point::new(4.0, 8.0), 0.5, Rgb::WHITE.with_opacity(1.0));
        canvas.resize(20, 5);
        assert_eq!(canvas.cols(), 20);
        assert_eq!(canvas.rows(), 5);
        assert!(canvas.cell(0, 0).unwrap().glyph.is_none());
        assert_eq!(canvas.to_lines().len(), 5);
    }
}
