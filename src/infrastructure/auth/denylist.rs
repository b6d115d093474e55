use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

/// Revoked access tokens, kept until the moment they would have expired anyway.
#[derive(Clone, Default)]
pub struct TokenDenylist {
    revoked: Arc<DashMap<String, usize>>,
}

impl TokenDenylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self, token: &str, exp: usize) {
        self.revoked.insert(token.to_string(), exp);
    }

    pub fn is_revoked(&self, token: &str) -> bool {
        self.revoked.contains_key(token)
    }

    /// Removes entries whose expiry has passed. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now().timestamp() as usize;
        let before = self.revoked.len();
        self.revoked.retain(|_, exp| *exp > now);
        before - self.revoked.len()
    }

    pub fn len(&self) -> usize {
        self.revoked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revoked.is_empty()
    }
}
