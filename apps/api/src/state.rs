use std::sync::Arc;

use crate::llm_client::Generator;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data: caller identity is resolved per request.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence. Default: PgStore. MemoryStore when DATABASE_URL is unset.
    pub store: Arc<dyn Store>,
    /// Pluggable generative backend. Default: LlmClient.
    pub generator: Arc<dyn Generator>,
}
