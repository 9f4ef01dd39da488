//! Sampling policy for progress output.
//!
//! Large trees produce millions of entries; writing a line for each one would
//! make terminal I/O dominate the run. A [`RenderGate`] lets at most one render
//! through per interval, using a single-cell rate limiter.

use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// Default spacing between two progress renders.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

type Limiter<C> = RateLimiter<NotKeyed, InMemoryState, C, NoOpMiddleware<<C as Clock>::Instant>>;

pub struct RenderGate<C: Clock = DefaultClock> {
    // None for a zero interval: every check opens
    limiter: Option<Limiter<C>>,
}

impl RenderGate<DefaultClock> {
    /// Gate that opens on the first check.
    pub fn new(interval: Duration) -> Self {
        Self::with_clock(interval, DefaultClock::default())
    }
}

impl Default for RenderGate<DefaultClock> {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl<C: Clock> RenderGate<C> {
    pub fn with_clock(interval: Duration, clock: C) -> Self {
        // burst of one: a permit every `interval`, measured from the last one granted
        let limiter = Quota::with_period(interval)
            .map(|quota| RateLimiter::direct_with_clock(quota, clock));
        Self { limiter }
    }

    /// Spend the first permit now, so the gate stays closed for one interval.
    pub fn primed(self) -> Self {
        self.try_open();
        self
    }

    /// Returns true if a render may happen now. Denied checks leave the gate
    /// state untouched.
    pub fn try_open(&self) -> bool {
        match &self.limiter {
            Some(limiter) => limiter.check().is_ok(),
            None => true,
        }
    }
}
