//! Per-unit ad slot state machine.
//!
//! Pure and synchronous: every operation takes the current wall-clock in
//! milliseconds so expiry behavior is fully unit-testable. Each ad unit owns
//! exactly one slot behind a mutex; the consume step in `take()` happens under
//! that lock with no await point, which is what makes double-show impossible.

use tracing::warn;

use crate::ads::loader::LoadedAd;
use crate::vast::VastData;

/// Maximum age of a loaded ad before it is treated as absent.
pub const AD_TTL_MS: i64 = 3_600_000;

/// Lifecycle state of the single ad slot an ad unit owns.
#[derive(Debug)]
pub enum AdSlot {
    Empty,
    Loading,
    Ready {
        ad: LoadedAd,
        vast: Option<VastData>,
        loaded_at_ms: i64,
    },
    /// A previously held ad was shown. Terminal until the next load.
    Consumed,
}

/// Readiness of the slot at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotLoaded,
    Expired,
}

/// A creative handed out by `take()`, carrying its own once-only guards.
#[derive(Debug)]
pub struct ShowingCreative {
    pub ad: LoadedAd,
    pub vast: Option<VastData>,
    pub impression_fired: bool,
    pub video_completed: bool,
}

impl AdSlot {
    pub fn new() -> Self {
        AdSlot::Empty
    }

    /// Enters `Loading`. Returns false (and leaves the state alone) when a
    /// load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if matches!(self, AdSlot::Loading) {
            return false;
        }
        *self = AdSlot::Loading;
        true
    }

    /// Stores a freshly loaded ad.
    pub fn finish_load(&mut self, ad: LoadedAd, vast: Option<VastData>, now_ms: i64) {
        *self = AdSlot::Ready {
            ad,
            vast,
            loaded_at_ms: now_ms,
        };
    }

    /// Clears the slot after a failed load.
    pub fn fail_load(&mut self) {
        *self = AdSlot::Empty;
    }

    /// Observes readiness. Seeing a past-TTL ad clears the slot as a side
    /// effect, so expiry is detected lazily on the next observation.
    pub fn readiness(&mut self, now_ms: i64) -> Readiness {
        match self {
            AdSlot::Ready { loaded_at_ms, .. } => {
                if now_ms - *loaded_at_ms > AD_TTL_MS {
                    warn!("loaded ad expired (TTL exceeded)");
                    *self = AdSlot::Empty;
                    Readiness::Expired
                } else {
                    Readiness::Ready
                }
            }
            _ => Readiness::NotLoaded,
        }
    }

    pub fn is_ready(&mut self, now_ms: i64) -> bool {
        self.readiness(now_ms) == Readiness::Ready
    }

    /// Atomically consumes the held ad. After this returns `Some`, the slot
    /// is `Consumed` and a second caller observes no loaded ad.
    pub fn take(&mut self, now_ms: i64) -> Option<ShowingCreative> {
        if self.readiness(now_ms) != Readiness::Ready {
            return None;
        }
        match std::mem::replace(self, AdSlot::Consumed) {
            AdSlot::Ready { ad, vast, .. } => Some(ShowingCreative {
                ad,
                vast,
                impression_fired: false,
                video_completed: false,
            }),
            other => {
                // Unreachable given the readiness check above.
                *self = other;
                None
            }
        }
    }
}

impl Default for AdSlot {
    fn default() -> Self {
        AdSlot::new()
    }
}
