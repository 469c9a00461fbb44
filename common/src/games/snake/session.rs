use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::log;
use crate::storage::KeyValueStore;

use super::controller::SnakeController;
use super::input::InputEvent;
use super::view::GameView;

pub struct SnakeSession;

impl SnakeSession {
    /// Drives `controller` until the input channel closes, then hands it back.
    ///
    /// Inputs and ticks are handled on this one task, so an input always lands between two
    /// ticks. The timer only fires while the game is running and restarts its period when a
    /// game starts.
    pub async fn run<V, S>(
        mut controller: SnakeController<V, S>,
        mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
        tick_interval: Duration,
    ) -> SnakeController<V, S>
    where
        V: GameView,
        S: KeyValueStore,
    {
        let mut ticker = interval_at(Instant::now() + tick_interval, tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick(), if controller.is_running() => {
                    controller.tick();
                }
                event = input_rx.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    let was_running = controller.is_running();
                    controller.handle_input(event);
                    if !was_running && controller.is_running() {
                        ticker.reset();
                    }
                }
            }
        }

        log!("Input channel closed, stopping snake session");
        controller
    }
}
