//! AppMessage enum for async communication within the application.

use crate::pages::Outcome;

/// Messages received from spawned tasks
#[derive(Debug)]
pub enum AppMessage {
    /// A page command settled; `generation` is the mount it was issued for
    Outcome { generation: u64, outcome: Outcome },
    /// Result of probing the service root
    ServiceStatus(bool),
}
