//! Injected environment capabilities
//!
//! The store never reads the system clock or generates ids directly;
//! both come in through these traits so tests can substitute
//! deterministic implementations.

use chrono::Utc;
use uuid::Uuid;

/// Provides the current time as milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Produces task ids unique within the process lifetime.
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

/// System clock backed by `chrono`.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Id generator that produces random v4 UUIDs.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
