//! Full-screen HTML interstitial ad unit.

use std::sync::Arc;

use crate::ads::events::AdEvents;
use crate::ads::loader::AdLoader;
use crate::ads::surface::RenderSurface;
use crate::ads::unit::UnitCore;
use crate::config::SdkConfig;
use crate::error::AdError;
use crate::openrtb::builder::AdFormat;
use crate::profile::{AppInfo, DeviceProfile};

/// A single-slot interstitial. Load once, show at most once, reload after.
pub struct InterstitialAd {
    core: UnitCore,
}

impl InterstitialAd {
    pub fn new(
        config: SdkConfig,
        profile: DeviceProfile,
        app: AppInfo,
        surface: Arc<dyn RenderSurface>,
        events: AdEvents,
    ) -> Result<Self, AdError> {
        let loader = AdLoader::new(config, profile, app)?;
        Ok(Self {
            core: UnitCore::new(loader, surface, events),
        })
    }

    /// Requests an ad from the exchange. No-op while a load is in flight.
    /// The outcome arrives through `on_ad_loaded` / `on_ad_failed_to_load`.
    pub async fn load(&self) {
        self.core.load(AdFormat::Interstitial, false).await;
    }

    /// True while a loaded ad is held and within its TTL. Observing an
    /// expired ad discards it.
    pub fn is_ready(&self) -> bool {
        self.core.is_ready()
    }

    /// Consumes the loaded ad and renders it. The consumption happens before
    /// any rendering side effect, so a racing second call observes no ad and
    /// gets `on_ad_failed_to_show`.
    pub fn show(&self) {
        if let Some(creative) = self.core.begin_show() {
            self.core.show_html(creative);
        }
    }

    /// Host surface reports the creative finished rendering. Fires the
    /// impression exactly once per loaded ad.
    pub fn notify_page_finished(&self) {
        self.core.notify_page_finished();
    }

    /// Host surface reports a click-through. Navigation is the host's job;
    /// the unit closes the surface, matching full-screen UX.
    pub fn notify_clicked(&self, url: &str) {
        self.core.emit_clicked(url);
        self.core.dismiss();
    }

    /// Host surface reports it has closed.
    pub fn notify_dismissed(&self) {
        self.core.notify_dismissed();
    }

    /// Force-closes the rendering surface. Idempotent.
    pub fn dismiss(&self) {
        self.core.dismiss();
    }

    /// Releases the surface and drops any callback that has not fired yet.
    pub fn destroy(&self) {
        self.core.destroy();
    }
}
