//! UI rendering for the street.
//!
//! Layout in terminal cells, relative to the drawing area:
//! walls on row 1 and row `height + 2`, column 1 and column `width + 2`;
//! the grid starts at (2, 2); the level label sits on the bottom wall
//! from column 3.

use crate::core::constants::{GRID_OFFSET, LEVEL_LABEL_COLUMN, WALL_OFFSET};
use crate::core::game_state::{Scene, WallTint};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
    Terminal,
};
use std::io;

mod symbols {
    pub const FILLED: &str = "█";
    pub const EMPTY: &str = " ";
}

fn wall_color(tint: WallTint) -> Color {
    match tint {
        WallTint::Plain => Color::White,
        WallTint::Win => Color::Green,
        WallTint::Loss => Color::Red,
    }
}

/// Widget drawing one `Scene`.
pub struct StreetWidget<'a> {
    scene: &'a Scene,
}

impl<'a> StreetWidget<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    /// Terminal size needed to show the whole street.
    pub fn required_size(scene: &Scene) -> (u16, u16) {
        (
            scene.width() as u16 + GRID_OFFSET * 2,
            scene.height() as u16 + GRID_OFFSET * 2,
        )
    }
}

/// Write one cell, clipped to `area`.
fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, symbol: &str, style: Style) {
    if x >= area.width || y >= area.height {
        return;
    }
    buf.get_mut(area.x + x, area.y + y)
        .set_symbol(symbol)
        .set_style(style);
}

impl Widget for StreetWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.scene.width() as u16;
        let height = self.scene.height() as u16;

        // Walls
        let color = wall_color(self.scene.walls);
        let wall_style = Style::default().fg(color).bg(color);
        let far_col = width + GRID_OFFSET;
        let bottom_row = height + GRID_OFFSET;
        for x in WALL_OFFSET..=far_col {
            put(buf, area, x, WALL_OFFSET, symbols::EMPTY, wall_style);
            put(buf, area, x, bottom_row, symbols::EMPTY, wall_style);
        }
        for y in GRID_OFFSET..bottom_row {
            put(buf, area, WALL_OFFSET, y, symbols::EMPTY, wall_style);
            put(buf, area, far_col, y, symbols::EMPTY, wall_style);
        }

        // Street
        let obstacle = Style::default().fg(Color::White).bg(Color::Black);
        let open = Style::default().fg(Color::Black).bg(Color::Black);
        for (row, lane) in self.scene.rows.iter().enumerate() {
            for (col, &occupied) in lane.iter().enumerate() {
                let (symbol, style) = if occupied {
                    (symbols::FILLED, obstacle)
                } else {
                    (symbols::EMPTY, open)
                };
                put(
                    buf,
                    area,
                    col as u16 + GRID_OFFSET,
                    row as u16 + GRID_OFFSET,
                    symbol,
                    style,
                );
            }
        }

        // Player
        let (px, py) = self.scene.player;
        put(
            buf,
            area,
            px as u16 + GRID_OFFSET,
            py as u16 + GRID_OFFSET,
            symbols::FILLED,
            Style::default().fg(Color::Magenta).bg(Color::Black),
        );

        // Level label
        let label = &self.scene.label;
        let label_style = Style::default().fg(Color::White).bg(Color::Black);
        for (i, c) in label.chars().enumerate() {
            let mut tmp = [0u8; 4];
            put(
                buf,
                area,
                LEVEL_LABEL_COLUMN + i as u16,
                bottom_row,
                c.encode_utf8(&mut tmp),
                label_style,
            );
        }
    }
}

/// A ratatui terminal presenting street scenes.
pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    clipped: bool,
}

impl<B: Backend> Screen<B> {
    pub fn new(backend: B) -> io::Result<Self> {
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            clipped: false,
        })
    }

    /// Draw and flush one frame.
    ///
    /// Warns once each time the terminal becomes too small for the street.
    pub fn present(&mut self, scene: &Scene) -> io::Result<()> {
        let (need_w, need_h) = StreetWidget::required_size(scene);
        let mut area = Rect::default();
        self.terminal.draw(|frame| {
            area = frame.size();
            frame.render_widget(StreetWidget::new(scene), area);
        })?;

        let clipped = area.width < need_w || area.height < need_h;
        if clipped && !self.clipped {
            log::warn!(
                "terminal is {}x{}, street needs {}x{}; the street is clipped",
                area.width,
                area.height,
                need_w,
                need_h
            );
        }
        self.clipped = clipped;
        Ok(())
    }

    /// Whether the last frame did not fit the terminal.
    pub fn clipped(&self) -> bool {
        self.clipped
    }

    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn scene() -> Scene {
        let mut rows = vec![vec![false; 6]; 4];
        rows[1][0] = true;
        rows[2][5] = true;
        Scene {
            rows,
            player: (3, 3),
            label: " LEVEL: 7 ".to_string(),
            walls: WallTint::Plain,
        }
    }

    fn draw(scene: &Scene) -> Screen<TestBackend> {
        let (w, h) = StreetWidget::required_size(scene);
        let mut screen = Screen::new(TestBackend::new(w, h)).unwrap();
        screen.present(scene).unwrap();
        screen
    }

    #[test]
    fn test_required_size_includes_walls() {
        assert_eq!(StreetWidget::required_size(&scene()), (10, 8));
    }

    #[test]
    fn test_obstacles_and_player_are_drawn_at_grid_offset() {
        let screen = draw(&scene());
        let buf = screen.backend().buffer();

        assert_eq!(buf.get(2, 3).symbol(), "█");
        assert_eq!(buf.get(2, 3).fg, Color::White);
        assert_eq!(buf.get(7, 4).symbol(), "█");
        assert_eq!(buf.get(3, 3).symbol(), " ");

        let player = buf.get(5, 5);
        assert_eq!(player.symbol(), "█");
        assert_eq!(player.fg, Color::Magenta);
    }

    #[test]
    fn test_walls_follow_tint() {
        let mut tinted = scene();
        tinted.walls = WallTint::Loss;
        let screen = draw(&tinted);
        let buf = screen.backend().buffer();

        assert_eq!(buf.get(1, 1).bg, Color::Red);
        assert_eq!(buf.get(8, 3).bg, Color::Red);
        assert_eq!(buf.get(1, 4).bg, Color::Red);
    }

    #[test]
    fn test_level_label_on_bottom_wall() {
        let mut wide = scene();
        wide.rows = vec![vec![false; 20]; 4];
        let screen = draw(&wide);
        let buf = screen.backend().buffer();

        let label: String = (3..13).map(|x| buf.get(x, 6).symbol().to_string()).collect();
        assert_eq!(label, " LEVEL: 7 ");
        assert_eq!(buf.get(2, 6).bg, Color::White);
    }

    #[test]
    fn test_small_terminal_clips_without_panic() {
        let scene = scene();
        let mut screen = Screen::new(TestBackend::new(4, 3)).unwrap();
        screen.present(&scene).unwrap();
        assert!(screen.clipped());
    }

    #[test]
    fn test_full_size_terminal_is_not_clipped() {
        let screen = draw(&scene());
        assert!(!screen.clipped());
    }
}
