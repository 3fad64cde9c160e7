//! Rewarded video ad unit.
//!
//! Creatives arrive either as a VAST document (played natively from the media
//! file URL) or as HTML5 video markup. The reward fires exactly once, on
//! natural completion only; closing the ad early earns nothing.

use std::sync::Arc;

use crate::ads::events::AdEvents;
use crate::ads::loader::AdLoader;
use crate::ads::surface::RenderSurface;
use crate::ads::unit::UnitCore;
use crate::config::SdkConfig;
use crate::error::AdError;
use crate::openrtb::builder::AdFormat;
use crate::profile::{AppInfo, DeviceProfile};
use crate::vast::VastData;

pub struct RewardedVideoAd {
    core: UnitCore,
}

impl RewardedVideoAd {
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

    /// Requests a video ad. VAST markup is decoded during the load; a VAST
    /// document without a media file fails the load, not the later show.
    pub async fn load(&self) {
        self.core.load(AdFormat::RewardedVideo, true).await;
    }

    pub fn is_ready(&self) -> bool {
        self.core.is_ready()
    }

    /// Consumes the loaded ad and starts playback. VAST creatives fire their
    /// impression pixels immediately after playback starts; HTML5 creatives
    /// fire on `notify_page_finished`.
    pub fn show(&self) {
        let Some(creative) = self.core.begin_show() else {
            return;
        };

        match creative.vast.clone() {
            Some(vast) => {
                let media_url = vast.media_file_url.clone();
                self.core.store_showing(creative);
                if let Err(err) = self.core.surface().load_video(&media_url) {
                    *self.core.showing() = None;
                    self.core.surface().close();
                    self.core
                        .emit_failed_to_show(&AdError::Internal(err.to_string()));
                    return;
                }
                self.core.emit_shown();
                self.fire_vast_impression(&vast);
            }
            None => {
                self.core.show_html(creative);
            }
        }
    }

    /// Fires win notice, VAST impression pixels and "start" tracking, once
    /// per loaded ad.
    fn fire_vast_impression(&self, vast: &VastData) {
        let notice_url = {
            let mut showing = self.core.showing();
            match showing.as_mut() {
                Some(c) if !c.impression_fired => {
                    c.impression_fired = true;
                    Some(c.ad.notice_url.clone())
                }
                _ => None,
            }
        };
        let Some(notice_url) = notice_url else {
            return;
        };

        let mut urls: Vec<String> = Vec::new();
        if let Some(url) = notice_url {
            urls.push(url);
        }
        urls.extend(vast.impression_urls.iter().cloned());
        if let Some(start) = vast.tracking_events.get("start") {
            urls.extend(start.iter().cloned());
        }
        self.core.loader().fire_tracking_pixels(urls);
        self.core.emit_impression();
    }

    /// HTML5 creative finished rendering.
    pub fn notify_page_finished(&self) {
        self.core.notify_page_finished();
    }

    /// Playback reached its natural end: grant the reward (once), fire
    /// "complete" tracking, close the surface.
    pub fn notify_video_completed(&self) {
        let complete_pixels = {
            let mut showing = self.core.showing();
            match showing.as_mut() {
                Some(c) if !c.video_completed => {
                    c.video_completed = true;
                    Some(
                        c.vast
                            .as_ref()
                            .and_then(|v| v.tracking_events.get("complete").cloned())
                            .unwrap_or_default(),
                    )
                }
                _ => None,
            }
        };
        let Some(pixels) = complete_pixels else {
            return;
        };
        self.core.emit_reward();
        self.core.loader().fire_tracking_pixels(pixels);
        self.core.dismiss();
    }

    /// Host surface reports a click-through.
    pub fn notify_clicked(&self, url: &str) {
        self.core.emit_clicked(url);
    }

    /// Host surface reports it has closed. An early close reaches here
    /// without `notify_video_completed`, so no reward is granted.
    pub fn notify_dismissed(&self) {
        self.core.notify_dismissed();
    }

    pub fn dismiss(&self) {
        self.core.dismiss();
    }

    pub fn destroy(&self) {
        self.core.destroy();
    }
}
