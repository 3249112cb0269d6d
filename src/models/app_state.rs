use std::sync::Arc;

use crate::{
    domain::TransactionBuilder,
    repositories::{BlinkRepository, ProjectRepository},
};

/// Shared state handed to every request handler.
pub struct AppState {
    pub project_repository: Arc<ProjectRepository>,
    pub blink_repository: Arc<BlinkRepository>,
    pub transaction_builder: Arc<TransactionBuilder>,
    /// Icon path advertised in action metadata, resolved against the request host.
    pub action_icon_path: String,
}
