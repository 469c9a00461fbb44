use super::grid::Grid;
use super::snake::Snake;
use super::types::GameOverReason;

pub fn check_collision(snake: &Snake, grid: &Grid) -> Option<GameOverReason> {
    let head = snake.head();
    if !grid.contains(head) {
        return Some(GameOverReason::WallCollision);
    }
    if snake.segments().skip(1).any(|segment| *segment == head) {
        return Some(GameOverReason::SelfCollision);
    }
    None
}

pub fn is_game_over(snake: &Snake, grid: &Grid) -> bool {
    check_collision(snake, grid).is_some()
}
