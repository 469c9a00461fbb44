/// Current and best score plus the "new record" highlight shown next to the best score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    current: u32,
    high: u32,
    high_highlighted: bool,
}

impl ScoreBoard {
    pub fn new(high: u32) -> Self {
        Self {
            current: 0,
            high,
            high_highlighted: false,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    pub fn is_high_highlighted(&self) -> bool {
        self.high_highlighted
    }

    pub fn set_current(&mut self, score: u32) {
        self.current = score;
    }

    pub fn on_game_started(&mut self) {
        self.high_highlighted = false;
    }

    /// Promotes the current score to the high score if it beats it.
    pub fn on_game_over(&mut self) -> bool {
        if self.current > self.high {
            self.high = self.current;
            self.high_highlighted = true;
            return true;
        }
        false
    }

    pub fn reset_current(&mut self) {
        self.current = 0;
    }

    pub fn reset_high(&mut self) {
        self.high = 0;
    }
}
