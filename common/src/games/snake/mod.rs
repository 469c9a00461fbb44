mod collision;
mod controller;
mod food;
mod game_state;
mod grid;
mod input;
mod score;
mod session;
mod snake;
mod types;
mod view;

pub use collision::{check_collision, is_game_over};
pub use controller::SnakeController;
pub use food::{MAX_PLACEMENT_ATTEMPTS, place_food};
pub use game_state::{SnakeGameState, TickOutcome};
pub use grid::Grid;
pub use input::{InputEvent, from_button, from_key};
pub use score::ScoreBoard;
pub use session::SnakeSession;
pub use snake::{Snake, advance, set_direction};
pub use types::{Cell, CellKind, Direction, GameOverReason, GameStatus, Velocity};
pub use view::{GAME_OVER_STYLE, GAME_OVER_TEXT, GameRenderer, GameView, ScoreDisplay, TextAlign, TextStyle};
