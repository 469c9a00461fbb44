use std::sync::{Arc, Mutex, MutexGuard};

use common::games::snake::{Cell, CellKind, TextStyle};
use eframe::egui;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Cell { cell: Cell, kind: CellKind },
    Text { text: String, x: i32, y: i32, style: TextStyle },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScorePanel {
    pub current: u32,
    pub high: u32,
    pub high_highlighted: bool,
    pub reset_confirmation_visible: bool,
}

/// State shared between the game thread and the UI thread.
#[derive(Clone, Default)]
pub struct SharedState {
    frame: Arc<Mutex<Vec<DrawOp>>>,
    score_panel: Arc<Mutex<ScorePanel>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }

    pub fn publish_frame(&self, ops: Vec<DrawOp>) {
        *lock(&self.frame) = ops;
        self.request_repaint();
    }

    pub fn frame(&self) -> Vec<DrawOp> {
        lock(&self.frame).clone()
    }

    pub fn update_score_panel(&self, update: impl FnOnce(&mut ScorePanel)) {
        update(&mut lock(&self.score_panel));
        self.request_repaint();
    }

    pub fn score_panel(&self) -> ScorePanel {
        lock(&self.score_panel).clone()
    }
}
