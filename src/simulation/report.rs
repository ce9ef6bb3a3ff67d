//! Distance report throttle and formatting
//!
//! `ReportClock` gates the once-per-interval distance report: a plain
//! "time since last fire" comparison against a caller-supplied clock, no
//! timers and no catch-up. The marker starts at the process-start instant
//! (0 on the app clock), so the first report lands one full interval in.
//!
//! `distance_block` renders the full pairwise table in link order, one
//! line per link, labeled by 1-based cube numbers.

use std::fmt::Write as _;

use super::links::LinkSet;
use super::states::System;

#[derive(Debug, Clone)]
pub struct ReportClock {
    pub interval_ms: f64,
    pub last_ms: f64,
}

impl ReportClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: 0.0,
        }
    }

    /// Returns `true` and advances the marker iff a full interval has
    /// elapsed since the last fire. Skipped ticks do not accumulate.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_ms >= self.interval_ms {
            self.last_ms = now_ms;
            true
        } else {
            false
        }
    }
}

/// Format every pairwise distance at this instant as a replacing text
/// block, one line per link in construction order.
pub fn distance_block(sys: &System, links: &LinkSet) -> String {
    let mut out = String::new();
    for (a, b, dist) in links.distances(sys) {
        let _ = writeln!(out, "Distancia entre Cubo {} y Cubo {}: {:.2}", a + 1, b + 1, dist);
    }
    out
}
