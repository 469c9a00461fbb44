mod app;
mod board;
mod keys;

pub use app::SnakeApp;
