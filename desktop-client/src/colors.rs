use common::games::snake::CellKind;
use eframe::egui;

pub const BOARD_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(173, 216, 230);
pub const HIGH_SCORE_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);

pub fn cell_color(kind: CellKind) -> egui::Color32 {
    match kind {
        CellKind::Food => egui::Color32::RED,
        CellKind::SnakeHead => egui::Color32::LIGHT_GRAY,
        CellKind::SnakeBody => egui::Color32::BLACK,
    }
}

pub fn rgb(color: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(color[0], color[1], color[2])
}
