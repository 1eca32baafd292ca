use chrono::{DateTime, Utc};

use credo_core::Clock;

/// Wall-clock time source used in production wiring.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
