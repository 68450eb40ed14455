use std::time::{Duration, Instant};

use rand::Rng;
use translator_core::{Msg, MAX_TICK_INCREMENT};

struct Deadline {
    at: Instant,
    msg: Msg,
}

struct ProgressTimer {
    interval: Duration,
    next: Instant,
}

/// One-shot deadlines plus the repeating progress tick, polled by the event loop.
#[derive(Default)]
pub struct Timers {
    deadlines: Vec<Deadline>,
    progress: Option<ProgressTimer>,
}

impl Timers {
    pub fn schedule(&mut self, now: Instant, after: Duration, msg: Msg) {
        self.deadlines.push(Deadline {
            at: now + after,
            msg,
        });
    }

    /// Starts (or restarts) the progress tick.
    pub fn start_progress(&mut self, now: Instant, interval: Duration) {
        self.progress = Some(ProgressTimer {
            interval,
            next: now + interval,
        });
    }

    pub fn stop_progress(&mut self) {
        self.progress = None;
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
        self.progress = None;
    }

    /// Messages due at `now`, deadlines in the order they were scheduled.
    ///
    /// A late loop produces at most one progress tick per call.
    pub fn due(&mut self, now: Instant, rng: &mut impl Rng) -> Vec<Msg> {
        let mut out = Vec::new();
        let mut pending = Vec::with_capacity(self.deadlines.len());
        for deadline in self.deadlines.drain(..) {
            if deadline.at <= now {
                out.push(deadline.msg);
            } else {
                pending.push(deadline);
            }
        }
        self.deadlines = pending;

        if let Some(progress) = self.progress.as_mut() {
            if progress.next <= now {
                progress.next = now + progress.interval;
                out.push(Msg::ProgressTick {
                    increment: rng.gen_range(0.0..MAX_TICK_INCREMENT),
                });
            }
        }
        out
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines
            .iter()
            .map(|d| d.at)
            .chain(self.progress.as_ref().map(|p| p.next))
            .min()
    }
}
