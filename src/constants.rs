use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// How often idle limiter windows and expired revoked tokens are swept.
pub const MAINTENANCE_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// GET requests under these prefixes are served to anonymous visitors.
pub const PUBLIC_READ_PREFIXES: [&str; 5] = [
    "/api/projects",
    "/api/skills",
    "/api/testimonials",
    "/api/about",
    "/api/legal",
];
