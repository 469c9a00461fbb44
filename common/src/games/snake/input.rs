use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    Restart,
    RequestHighScoreReset,
    ConfirmHighScoreReset,
    CancelHighScoreReset,
}

const KEY_BINDINGS: &[(&str, InputEvent)] = &[
    ("ArrowUp", InputEvent::Turn(Direction::Up)),
    ("ArrowDown", InputEvent::Turn(Direction::Down)),
    ("ArrowLeft", InputEvent::Turn(Direction::Left)),
    ("ArrowRight", InputEvent::Turn(Direction::Right)),
    (" ", InputEvent::Restart),
];

const BUTTON_BINDINGS: &[(&str, InputEvent)] = &[
    ("up", InputEvent::Turn(Direction::Up)),
    ("down", InputEvent::Turn(Direction::Down)),
    ("left", InputEvent::Turn(Direction::Left)),
    ("right", InputEvent::Turn(Direction::Right)),
    ("restart", InputEvent::Restart),
    ("reset", InputEvent::RequestHighScoreReset),
    ("yes", InputEvent::ConfirmHighScoreReset),
    ("no", InputEvent::CancelHighScoreReset),
];

/// Maps a key name (`ArrowUp`, `" "`, ...) to an event. Unknown keys map to `None`.
pub fn from_key(key: &str) -> Option<InputEvent> {
    lookup(KEY_BINDINGS, key)
}

/// Maps a button id token (`up`, `restart`, `yes`, ...) to an event.
pub fn from_button(button_id: &str) -> Option<InputEvent> {
    lookup(BUTTON_BINDINGS, button_id)
}

fn lookup(bindings: &[(&str, InputEvent)], token: &str) -> Option<InputEvent> {
    bindings
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, event)| *event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(from_key("ArrowUp"), Some(InputEvent::Turn(Direction::Up)));
        assert_eq!(from_key("ArrowLeft"), Some(InputEvent::Turn(Direction::Left)));
        assert_eq!(from_key(" "), Some(InputEvent::Restart));
        assert_eq!(from_key("Enter"), None);
        assert_eq!(from_key("arrowup"), None);
    }

    #[test]
    fn test_buttons_match_keys() {
        for (button, key) in [("up", "ArrowUp"), ("down", "ArrowDown"), ("left", "ArrowLeft"), ("right", "ArrowRight")] {
            assert_eq!(from_button(button), from_key(key));
        }
        assert_eq!(from_button("restart"), from_key(" "));
        assert_eq!(from_button("reset"), Some(InputEvent::RequestHighScoreReset));
        assert_eq!(from_button("bogus"), None);
    }
}
