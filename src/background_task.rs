use std::sync::Arc;

use actix_web::web;
use tokio::time::interval;

use crate::{constants::MAINTENANCE_INTERVAL, AppState};

/// Periodically sweeps idle rate-limit windows, revoked tokens past their
/// expiry and stale cache entries.
pub async fn start_maintenance_task(state: web::Data<AppState>) {
    let state: Arc<AppState> = state.into_inner();
    let mut interval = interval(MAINTENANCE_INTERVAL);

    loop {
        interval.tick().await;
        run_maintenance(&state);
    }
}

pub fn run_maintenance(state: &AppState) {
    let evicted_keys = state.contact_limiter.evict_idle();
    let purged_tokens = state.auth_handler.denylist().purge_expired();
    let expired_entries = state.content_cache.evict_expired();

    tracing::debug!(
        evicted_keys,
        purged_tokens,
        expired_entries,
        "Maintenance sweep finished"
    );
}
