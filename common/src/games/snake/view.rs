use super::types::{Cell, CellKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub color: [u8; 3],
    pub align: TextAlign,
}

pub const GAME_OVER_TEXT: &str = "GAME OVER!";

pub const GAME_OVER_STYLE: TextStyle = TextStyle {
    font_size: 70.0,
    color: [255, 0, 0],
    align: TextAlign::Center,
};

/// Drawing surface in board pixel coordinates.
pub trait GameRenderer {
    fn clear(&mut self);
    fn draw_cell(&mut self, cell: Cell, kind: CellKind);
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle);
    /// Marks the end of a frame.
    fn present(&mut self) {}
}

pub trait ScoreDisplay {
    fn set_current_score(&mut self, score: u32);
    fn set_high_score(&mut self, score: u32);
    fn set_high_score_highlighted(&mut self, highlighted: bool);
    fn show_reset_confirmation(&mut self, visible: bool);
}

pub trait GameView: GameRenderer + ScoreDisplay {}

impl<T: GameRenderer + ScoreDisplay> GameView for T {}
