use crate::config::GameConfig;
use crate::games::SessionRng;
use crate::storage::{HighScoreStore, KeyValueStore};
use crate::{debug_log, log};

use super::game_state::SnakeGameState;
use super::input::InputEvent;
use super::score::ScoreBoard;
use super::types::{CellKind, GameStatus};
use super::view::{GAME_OVER_STYLE, GAME_OVER_TEXT, GameView};

/// Owns one game plus its score bridge and drives the view hooks.
pub struct SnakeController<V: GameView, S: KeyValueStore> {
    state: SnakeGameState,
    scores: ScoreBoard,
    high_score_store: HighScoreStore<S>,
    view: V,
    rng: SessionRng,
    awaiting_reset_confirmation: bool,
}

impl<V: GameView, S: KeyValueStore> SnakeController<V, S> {
    pub fn new(config: &GameConfig, view: V, store: S, mut rng: SessionRng) -> Self {
        let high_score_store = HighScoreStore::new(store);
        let high = high_score_store.load_or_default();
        let state = SnakeGameState::new(config.grid(), config.initial_length as usize, &mut rng);
        log!(
            "New snake game on {}x{} board, high score {}, seed {}",
            config.board_width,
            config.board_height,
            high,
            rng.seed()
        );

        let mut controller = Self {
            state,
            scores: ScoreBoard::new(high),
            high_score_store,
            view,
            rng,
            awaiting_reset_confirmation: false,
        };
        controller.view.set_current_score(0);
        controller.view.set_high_score(high);
        controller.view.set_high_score_highlighted(false);
        controller.render_idle_frame();
        controller
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut SnakeGameState {
        &mut self.state
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn is_awaiting_reset_confirmation(&self) -> bool {
        self.awaiting_reset_confirmation
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Turn(direction) => {
                if self.state.apply_direction(direction) {
                    log!("Game started heading {:?}", direction);
                    self.scores.on_game_started();
                    self.view.set_high_score_highlighted(false);
                }
            }
            InputEvent::Restart => self.restart(),
            InputEvent::RequestHighScoreReset => {
                if !self.state.is_running() {
                    self.awaiting_reset_confirmation = true;
                    self.view.show_reset_confirmation(true);
                }
            }
            InputEvent::ConfirmHighScoreReset => {
                if self.awaiting_reset_confirmation {
                    self.awaiting_reset_confirmation = false;
                    self.view.show_reset_confirmation(false);
                    self.reset_high_score();
                }
            }
            InputEvent::CancelHighScoreReset => {
                if self.awaiting_reset_confirmation {
                    self.awaiting_reset_confirmation = false;
                    self.view.show_reset_confirmation(false);
                }
            }
        }
    }

    /// clear, food, move, snake, termination check.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }

        self.view.clear();
        self.draw_food();
        let outcome = self.state.tick(&mut self.rng);
        if outcome.ate_food {
            self.scores.set_current(self.state.score());
            self.view.set_current_score(self.scores.current());
            debug_log!(
                "Food eaten at ({}, {}), score {}",
                self.state.snake().head().x,
                self.state.snake().head().y,
                self.scores.current()
            );
        }
        self.draw_snake();

        if let Some(reason) = outcome.game_over {
            log!("Game over ({:?}) with score {}", reason, self.scores.current());
            self.finish_game();
        }
        self.view.present();
    }

    pub fn restart(&mut self) {
        if !self.state.restart(&mut self.rng) {
            return;
        }
        self.scores.reset_current();
        self.view.set_current_score(0);
        self.render_idle_frame();
    }

    fn reset_high_score(&mut self) {
        self.scores.reset_high();
        self.persist_high_score();
        self.view.set_high_score(0);
        log!("High score reset");
        self.restart();
    }

    fn finish_game(&mut self) {
        if self.scores.on_game_over() {
            log!("New high score {}", self.scores.high());
            self.view.set_high_score(self.scores.high());
            self.view.set_high_score_highlighted(true);
        }
        self.persist_high_score();

        let (x, y) = self.state.grid().center();
        self.view.draw_text(GAME_OVER_TEXT, x, y, &GAME_OVER_STYLE);
    }

    fn persist_high_score(&mut self) {
        if let Err(e) = self.high_score_store.save_high_score(self.scores.high()) {
            log!("Failed to save high score: {}", e);
        }
    }

    fn render_idle_frame(&mut self) {
        debug_assert!(self.state.status() != GameStatus::Running);
        self.view.clear();
        self.draw_food();
        self.draw_snake();
        self.view.present();
    }

    fn draw_food(&mut self) {
        if let Some(food) = self.state.food() {
            self.view.draw_cell(food, CellKind::Food);
        }
    }

    fn draw_snake(&mut self) {
        for (index, segment) in self.state.snake().segments().enumerate() {
            let kind = if index == 0 {
                CellKind::SnakeHead
            } else {
                CellKind::SnakeBody
            };
            self.view.draw_cell(*segment, kind);
        }
    }
}
