use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ledger::Ledger;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Parsed-resume ledger. The mutex enforces at-most-one concurrent writer;
    /// the file itself is append-only.
    pub ledger: Arc<Mutex<Ledger>>,
}
