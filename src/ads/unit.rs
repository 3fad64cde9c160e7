//! Shared machinery behind the banner, interstitial and rewarded ad units.
//!
//! Each unit owns one `UnitCore`: slot, showing creative, transport, surface
//! and callbacks. Nothing here is shared across units.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{error, warn};

use crate::ads::events::AdEvents;
use crate::ads::loader::AdLoader;
use crate::ads::slot::{AdSlot, Readiness, ShowingCreative};
use crate::ads::surface::RenderSurface;
use crate::error::AdError;
use crate::openrtb::builder::AdFormat;
use crate::vast;

pub(crate) fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) struct UnitCore {
    loader: AdLoader,
    slot: Mutex<AdSlot>,
    showing: Mutex<Option<ShowingCreative>>,
    events: AdEvents,
    surface: Arc<dyn RenderSurface>,
    destroyed: AtomicBool,
}

impl UnitCore {
    pub fn new(loader: AdLoader, surface: Arc<dyn RenderSurface>, events: AdEvents) -> Self {
        Self {
            loader,
            slot: Mutex::new(AdSlot::new()),
            showing: Mutex::new(None),
            events,
            surface,
            destroyed: AtomicBool::new(false),
        }
    }

    pub fn loader(&self) -> &AdLoader {
        &self.loader
    }

    fn slot(&self) -> MutexGuard<'_, AdSlot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn showing(&self) -> MutexGuard<'_, Option<ShowingCreative>> {
        self.showing.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_destroyed(&self) -> bool {
        self.destroyed.load(Ordering::SeqCst)
    }

    /// Runs one load cycle. A load already in flight makes this a logged
    /// no-op. When `decode_vast` is set and the markup looks like VAST, an
    /// unparsable document fails the whole load.
    pub async fn load(&self, format: AdFormat, decode_vast: bool) {
        if self.is_destroyed() {
            return;
        }
        if !self.slot().begin_load() {
            warn!("ad is already loading");
            return;
        }

        match self.loader.load(format).await {
            Ok(ad) => {
                let vast_data = if decode_vast && vast::is_vast(&ad.ad_markup) {
                    match vast::parse(&ad.ad_markup) {
                        Some(data) => Some(data),
                        None => {
                            self.slot().fail_load();
                            self.emit_failed_to_load(&AdError::Internal(
                                "failed to parse VAST markup".to_string(),
                            ));
                            return;
                        }
                    }
                } else {
                    None
                };
                self.slot().finish_load(ad, vast_data, now_ms());
                self.emit_loaded();
            }
            Err(err) => {
                self.slot().fail_load();
                self.emit_failed_to_load(&err);
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.slot().is_ready(now_ms())
    }

    /// The check-and-clear step of `show()`: readiness, surface availability
    /// and consumption all happen under the slot lock with no await point, so
    /// two racing callers can never both obtain the creative.
    pub fn begin_show(&self) -> Option<ShowingCreative> {
        if self.is_destroyed() {
            return None;
        }
        let mut slot = self.slot();
        match slot.readiness(now_ms()) {
            Readiness::NotLoaded => {
                drop(slot);
                self.emit_failed_to_show(&AdError::InvalidRequest("ad not loaded".to_string()));
                None
            }
            Readiness::Expired => {
                drop(slot);
                self.emit_failed_to_show(&AdError::InvalidRequest("ad expired".to_string()));
                None
            }
            Readiness::Ready => {
                if !self.surface.is_available() {
                    drop(slot);
                    self.emit_failed_to_show(&AdError::Internal(
                        "render surface not available".to_string(),
                    ));
                    return None;
                }
                slot.take(now_ms())
            }
        }
    }

    /// Renders an HTML creative that was just consumed. The impression fires
    /// later, on `notify_page_finished`.
    pub fn show_html(&self, creative: ShowingCreative) {
        let html = creative.ad.ad_markup.clone();
        *self.showing() = Some(creative);
        if let Err(err) = self.surface.load_html(&html) {
            error!(error = %err, "failed to render HTML creative");
            *self.showing() = None;
            self.surface.close();
            self.emit_failed_to_show(&AdError::Internal(err.to_string()));
            return;
        }
        self.emit_shown();
    }

    pub fn store_showing(&self, creative: ShowingCreative) {
        *self.showing() = Some(creative);
    }

    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    /// First successful paint of an HTML creative: fire the win notice and
    /// the impression callback, guarded to once per loaded ad.
    pub fn notify_page_finished(&self) {
        let notice_url = {
            let mut showing = self.showing();
            match showing.as_mut() {
                Some(c) if !c.impression_fired => {
                    c.impression_fired = true;
                    Some(c.ad.notice_url.clone())
                }
                _ => None,
            }
        };
        if let Some(notice_url) = notice_url {
            self.emit_impression();
            if let Some(url) = notice_url {
                self.loader.fire_tracking_pixels(vec![url]);
            }
        }
    }

    /// Host reports the surface finished tearing down.
    pub fn notify_dismissed(&self) {
        *self.showing() = None;
        self.emit_dismissed();
    }

    /// Force-closes any active surface. Idempotent.
    pub fn dismiss(&self) {
        self.surface.close();
    }

    /// Marks the unit dead: the surface closes and any callback that has not
    /// fired yet is dropped.
    pub fn destroy(&self) {
        self.destroyed.store(true, Ordering::SeqCst);
        self.surface.close();
    }

    pub fn emit_loaded(&self) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_ad_loaded {
            cb();
        }
    }

    pub fn emit_failed_to_load(&self, err: &AdError) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_ad_failed_to_load {
            cb(err);
        }
    }

    pub fn emit_shown(&self) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_ad_shown {
            cb();
        }
    }

    pub fn emit_failed_to_show(&self, err: &AdError) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_ad_failed_to_show {
            cb(err);
        }
    }

    pub fn emit_impression(&self) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_ad_impression {
            cb();
        }
    }

    pub fn emit_clicked(&self, url: &str) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_ad_clicked {
            cb(url);
        }
    }

    pub fn emit_dismissed(&self) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_ad_dismissed {
            cb();
        }
    }

    pub fn emit_reward(&self) {
        if self.is_destroyed() {
            return;
        }
        if let Some(cb) = &self.events.on_user_earned_reward {
            cb();
        }
    }
}
