use common::games::snake::{Grid, TextAlign};
use eframe::egui;

use crate::colors::{BOARD_BACKGROUND, cell_color, rgb};
use crate::state::DrawOp;

/// Paints the last published frame, scaled to fit the available space.
pub fn paint_board(ui: &mut egui::Ui, grid: &Grid, frame: &[DrawOp]) {
    let available = ui.available_size();
    let board_w = grid.width() as f32;
    let board_h = grid.height() as f32;
    let scale = (available.x / board_w).min(available.y / board_h).clamp(0.25, 1.0);

    let (response, painter) =
        ui.allocate_painter(egui::vec2(board_w * scale, board_h * scale), egui::Sense::hover());
    let origin = response.rect.min;
    painter.rect_filled(response.rect, 0.0, BOARD_BACKGROUND);

    let unit = grid.unit_size() as f32;
    for op in frame {
        match op {
            DrawOp::Cell { cell, kind } => {
                let center = origin
                    + egui::vec2(
                        (cell.x as f32 + unit / 2.0) * scale,
                        (cell.y as f32 + unit / 2.0) * scale,
                    );
                painter.circle_filled(center, unit / 2.0 * scale, cell_color(*kind));
            }
            DrawOp::Text { text, x, y, style } => {
                let anchor = match style.align {
                    TextAlign::Left => egui::Align2::LEFT_CENTER,
                    TextAlign::Center => egui::Align2::CENTER_CENTER,
                };
                painter.text(
                    origin + egui::vec2(*x as f32 * scale, *y as f32 * scale),
                    anchor,
                    text,
                    egui::FontId::proportional(style.font_size * scale),
                    rgb(style.color),
                );
            }
        }
    }
}
