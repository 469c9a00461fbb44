use common::games::snake::{Cell, CellKind, GameRenderer, ScoreDisplay, TextStyle};

use crate::state::{DrawOp, SharedState};

/// Collects a frame of draw calls and publishes it to the UI on `present`.
pub struct CanvasView {
    shared_state: SharedState,
    pending: Vec<DrawOp>,
}

impl CanvasView {
    pub fn new(shared_state: SharedState) -> Self {
        Self {
            shared_state,
            pending: Vec::new(),
        }
    }
}

impl GameRenderer for CanvasView {
    fn clear(&mut self) {
        self.pending.clear();
    }

    fn draw_cell(&mut self, cell: Cell, kind: CellKind) {
        self.pending.push(DrawOp::Cell { cell, kind });
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle) {
        self.pending.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }

    fn present(&mut self) {
        self.shared_state.publish_frame(self.pending.clone());
    }
}

impl ScoreDisplay for CanvasView {
    fn set_current_score(&mut self, score: u32) {
        self.shared_state.update_score_panel(|panel| panel.current = score);
    }

    fn set_high_score(&mut self, score: u32) {
        self.shared_state.update_score_panel(|panel| panel.high = score);
    }

    fn set_high_score_highlighted(&mut self, highlighted: bool) {
        self.shared_state
            .update_score_panel(|panel| panel.high_highlighted = highlighted);
    }

    fn show_reset_confirmation(&mut self, visible: bool) {
        self.shared_state
            .update_score_panel(|panel| panel.reset_confirmation_visible = visible);
    }
}
