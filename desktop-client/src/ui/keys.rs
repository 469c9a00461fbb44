use common::games::snake::{InputEvent, from_key};
use eframe::egui;

const WATCHED_KEYS: [egui::Key; 5] = [
    egui::Key::ArrowUp,
    egui::Key::ArrowDown,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::Space,
];

/// Browser-style key name used by the input bindings.
pub fn key_name(key: egui::Key) -> Option<&'static str> {
    match key {
        egui::Key::ArrowUp => Some("ArrowUp"),
        egui::Key::ArrowDown => Some("ArrowDown"),
        egui::Key::ArrowLeft => Some("ArrowLeft"),
        egui::Key::ArrowRight => Some("ArrowRight"),
        egui::Key::Space => Some(" "),
        _ => None,
    }
}

pub fn pressed_events(input: &egui::InputState) -> Vec<InputEvent> {
    WATCHED_KEYS
        .iter()
        .filter(|key| input.key_pressed(**key))
        .filter_map(|key| key_name(*key))
        .filter_map(from_key)
        .collect()
}
