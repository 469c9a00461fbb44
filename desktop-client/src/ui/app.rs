use std::time::Duration;

use common::games::snake::{Direction, Grid, InputEvent};
use eframe::egui;
use egui::{Align2, Vec2};

use crate::colors::HIGH_SCORE_HIGHLIGHT;
use crate::command_sender::CommandSender;
use crate::state::{ScorePanel, SharedState};

use super::board::paint_board;
use super::keys::pressed_events;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    grid: Grid,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender, grid: Grid) -> Self {
        Self {
            shared_state,
            command_sender,
            grid,
        }
    }

    fn send(&self, event: InputEvent) {
        self.command_sender.send(event);
    }

    fn render_scores(&self, ui: &mut egui::Ui, panel: &ScorePanel) {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", panel.current));
            ui.add_space(30.0);
            let high = egui::RichText::new(format!("High Score: {}", panel.high)).heading();
            let high = if panel.high_highlighted {
                high.color(HIGH_SCORE_HIGHLIGHT).strong()
            } else {
                high
            };
            ui.label(high);
        });
    }

    fn render_controls(&self, ui: &mut egui::Ui) {
        let button_size = egui::vec2(48.0, 36.0);
        let direction_button = |ui: &mut egui::Ui, label: &str, direction: Direction| {
            if ui.add_sized(button_size, egui::Button::new(label)).clicked() {
                self.send(InputEvent::Turn(direction));
            }
        };

        ui.vertical_centered(|ui| {
            direction_button(ui, "▲", Direction::Up);
            ui.horizontal(|ui| {
                let offset = (ui.available_width() - button_size.x * 3.0) / 2.0;
                ui.add_space(offset.max(0.0));
                direction_button(ui, "◀", Direction::Left);
                direction_button(ui, "▼", Direction::Down);
                direction_button(ui, "▶", Direction::Right);
            });
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                let offset = (ui.available_width() - 260.0) / 2.0;
                ui.add_space(offset.max(0.0));
                if ui.button("Restart (Space)").clicked() {
                    self.send(InputEvent::Restart);
                }
                if ui.button("Reset High Score").clicked() {
                    self.send(InputEvent::RequestHighScoreReset);
                }
            });
        });
    }

    fn render_reset_confirmation(&self, ctx: &egui::Context) {
        egui::Window::new("Reset high score")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to reset the high score?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        self.send(InputEvent::ConfirmHighScoreReset);
                    }
                    if ui.button("No").clicked() {
                        self.send(InputEvent::CancelHighScoreReset);
                    }
                });
            });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        for event in ctx.input(pressed_events) {
            self.send(event);
        }

        let panel = self.shared_state.score_panel();
        let frame = self.shared_state.frame();

        egui::TopBottomPanel::top("scores").show(ctx, |ui| {
            self.render_scores(ui, &panel);
        });

        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.render_controls(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                paint_board(ui, &self.grid, &frame);
            });
        });

        if panel.reset_confirmation_visible {
            self.render_reset_confirmation(ctx);
        }

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}
