use common::games::SessionRng;
use common::games::snake::{InputEvent, SnakeController, SnakeSession};
use common::log;
use common::storage::YamlFileStore;
use tokio::sync::mpsc;

use crate::canvas::CanvasView;
use crate::config::Config;
use crate::state::SharedState;

pub async fn local_game_task(
    config: Config,
    seed: Option<u64>,
    shared_state: SharedState,
    input_rx: mpsc::UnboundedReceiver<InputEvent>,
) {
    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let high_score_path = config.high_score_path();
    log!("High scores stored in {}", high_score_path.display());

    let store = YamlFileStore::open(high_score_path);
    let view = CanvasView::new(shared_state);
    let controller = SnakeController::new(&config.game, view, store, rng);

    let controller = SnakeSession::run(controller, input_rx, config.game.tick_interval()).await;
    log!(
        "Session finished, last score {}, high score {}",
        controller.scores().current(),
        controller.scores().high()
    );
}
