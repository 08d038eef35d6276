//! Per-session intent pump.
//!
//! Owns a session on a dedicated task and drains a single-consumer inbox,
//! so intents from any number of concurrent producers are applied strictly
//! in arrival order without shared locking. This is the queue-per-session
//! alternative to holding the session behind a lock.

use crate::intent::Intent;
use crate::session::{GameSession, RenderRequest};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Handle for queueing intents on a pumped session. Cloneable across
/// producers; all clones feed the same inbox.
#[derive(Debug, Clone)]
pub struct IntentSender {
    tx: mpsc::UnboundedSender<Intent>,
}

impl IntentSender {
    /// Queues an intent. Returns false once the pump has stopped.
    pub fn submit(&self, intent: Intent) -> bool {
        self.tx.send(intent).is_ok()
    }
}

/// A running process loop for one session.
///
/// The pump keeps answering after the session completes: late intents are
/// dropped by the session and still produce a render request reporting the
/// terminal outcome. The loop stops when every sender is gone or the render
/// receiver is dropped.
#[derive(Debug)]
pub struct SessionPump {
    sender: IntentSender,
    renders: mpsc::UnboundedReceiver<RenderRequest>,
}

impl SessionPump {
    /// Spawns the process loop for `session`, taking ownership of it.
    pub fn spawn(mut session: GameSession) -> Self {
        let (intent_tx, mut intent_rx) = mpsc::unbounded_channel::<Intent>();
        let (render_tx, render_rx) = mpsc::unbounded_channel::<RenderRequest>();
        tokio::spawn(async move {
            info!("session pump started");
            while let Some(intent) = intent_rx.recv().await {
                let render = session.submit(intent);
                if render_tx.send(render).is_err() {
                    debug!("render receiver dropped, stopping pump");
                    break;
                }
            }
            info!("session pump stopped");
        });
        Self {
            sender: IntentSender { tx: intent_tx },
            renders: render_rx,
        }
    }

    /// A sender for this pump's inbox.
    pub fn sender(&self) -> IntentSender {
        self.sender.clone()
    }

    /// Queues an intent on this pump's inbox. Returns false once the pump
    /// has stopped.
    pub fn submit(&self, intent: Intent) -> bool {
        self.sender.submit(intent)
    }

    /// Receives the next render request, one per processed intent.
    /// Returns `None` after the pump stops.
    pub async fn recv(&mut self) -> Option<RenderRequest> {
        self.renders.recv().await
    }
}
