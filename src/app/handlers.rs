//! Message handling for the App.

use tracing::debug;

use super::{App, AppMessage, ServiceHealth};

impl App {
    /// Handle an incoming async message
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::Outcome {
                generation,
                outcome,
            } => {
                if generation != self.generation {
                    debug!(
                        "Dropping outcome from generation {} (current {})",
                        generation, self.generation
                    );
                    return;
                }
                let effect = self.page.apply(outcome);
                self.apply_effect(effect);
            }
            AppMessage::ServiceStatus(online) => {
                self.service_health = if online {
                    ServiceHealth::Online
                } else {
                    ServiceHealth::Offline
                };
            }
        }
    }
}
