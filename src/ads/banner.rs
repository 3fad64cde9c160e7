//! Inline banner ad unit.

use std::sync::Arc;

use crate::ads::events::AdEvents;
use crate::ads::loader::AdLoader;
use crate::ads::surface::RenderSurface;
use crate::ads::unit::UnitCore;
use crate::config::SdkConfig;
use crate::error::AdError;
use crate::openrtb::builder::AdFormat;
use crate::profile::{AppInfo, DeviceProfile};

/// Common IAB banner sizes in dp.
pub mod sizes {
    pub const BANNER_320X50: (i32, i32) = (320, 50);
    pub const BANNER_300X250: (i32, i32) = (300, 250);
    pub const BANNER_728X90: (i32, i32) = (728, 90);
}

/// A banner rendered into an inline host surface. Same single-use slot
/// semantics as the full-screen units: one load, one show, reload after.
pub struct BannerAd {
    core: UnitCore,
    width: i32,
    height: i32,
}

impl BannerAd {
    pub fn new(
        config: SdkConfig,
        profile: DeviceProfile,
        app: AppInfo,
        surface: Arc<dyn RenderSurface>,
        events: AdEvents,
        width: i32,
        height: i32,
    ) -> Result<Self, AdError> {
        let loader = AdLoader::new(config, profile, app)?;
        Ok(Self {
            core: UnitCore::new(loader, surface, events),
            width,
            height,
        })
    }

    /// Requests a banner of the size this unit was built with. Non-positive
    /// dimensions are rejected before any transport work.
    pub async fn load(&self) {
        self.core
            .load(
                AdFormat::Banner {
                    width: self.width,
                    height: self.height,
                },
                false,
            )
            .await;
    }

    pub fn is_ready(&self) -> bool {
        self.core.is_ready()
    }

    /// Consumes the loaded ad and renders it into the inline surface.
    pub fn show(&self) {
        if let Some(creative) = self.core.begin_show() {
            self.core.show_html(creative);
        }
    }

    /// Host surface reports the creative finished rendering; fires the
    /// impression once per loaded ad.
    pub fn notify_page_finished(&self) {
        self.core.notify_page_finished();
    }

    /// Host surface reports a click-through. The banner stays on screen;
    /// navigation is the host's job.
    pub fn notify_clicked(&self, url: &str) {
        self.core.emit_clicked(url);
    }

    pub fn destroy(&self) {
        self.core.destroy();
    }
}
