use common::games::snake::InputEvent;
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::UnboundedSender<InputEvent>,
}

impl CommandSender {
    pub fn new(tx: mpsc::UnboundedSender<InputEvent>) -> Self {
        Self { tx }
    }

    pub fn send(&self, event: InputEvent) {
        // The game thread is gone only while the window is shutting down.
        let _ = self.tx.send(event);
    }
}
