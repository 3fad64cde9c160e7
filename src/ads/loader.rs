//! Shared load pipeline: build request, send, select the winning bid.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;
use uuid::Uuid;

use crate::config::SdkConfig;
use crate::error::AdError;
use crate::network::OpenRtbClient;
use crate::openrtb::builder::{AdFormat, BidRequestBuilder};
use crate::openrtb::response::BidResponse;
use crate::profile::{AppInfo, DeviceProfile};

/// The ad unit family a creative belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdType {
    Banner,
    Interstitial,
    Rewarded,
    Native,
}

/// Normalized winning bid. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedAd {
    pub ad_id: String,
    pub impression_id: String,
    pub price: f64,
    pub ad_markup: String,
    pub notice_url: Option<String>,
    pub width: i32,
    pub height: i32,
    pub ad_type: AdType,
    pub creative_id: Option<String>,
}

/// Selects the winning bid from a response: first seat bid, first bid. The
/// exchange runs the auction; no further selection happens client-side.
pub fn loaded_ad_from_response(response: &BidResponse, ad_type: AdType) -> Option<LoadedAd> {
    let seat_bid = response.seatbid.first()?;
    let bid = seat_bid.bid.first()?;
    Some(LoadedAd {
        ad_id: bid.id.clone(),
        impression_id: bid.impid.clone(),
        price: bid.price,
        ad_markup: bid.adm.clone().unwrap_or_default(),
        notice_url: bid.nurl.clone(),
        width: bid.w.unwrap_or(0),
        height: bid.h.unwrap_or(0),
        ad_type,
        creative_id: bid.crid.clone(),
    })
}

/// One loader per ad unit: owns the transport client and the immutable
/// device/app snapshots every request is built from.
pub struct AdLoader {
    client: Arc<OpenRtbClient>,
    config: SdkConfig,
    profile: DeviceProfile,
    app: AppInfo,
    user_id: String,
}

impl AdLoader {
    pub fn new(config: SdkConfig, profile: DeviceProfile, app: AppInfo) -> Result<Self, AdError> {
        let client = Arc::new(OpenRtbClient::new(config.clone())?);
        Ok(Self {
            client,
            config,
            profile,
            app,
            user_id: Uuid::new_v4().to_string(),
        })
    }

    /// Overrides the generated per-instance user ID, for hosts that persist
    /// one across installs.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Runs one full load: build, send, parse. Single-shot, no retry.
    pub async fn load(&self, format: AdFormat) -> Result<LoadedAd, AdError> {
        if !self.config.has_credentials() {
            return Err(AdError::SdkNotInitialized);
        }

        let request =
            BidRequestBuilder::new(&self.config, &self.profile, &self.app, &self.user_id)
                .build(format)?;
        let response = self.client.send(&request).await?;

        let ad_type = match format {
            AdFormat::Banner { .. } => AdType::Banner,
            AdFormat::Interstitial => AdType::Interstitial,
            AdFormat::RewardedVideo => AdType::Rewarded,
        };

        loaded_ad_from_response(&response, ad_type)
            .ok_or_else(|| AdError::Internal("failed to parse ad from response".to_string()))
    }

    /// Fires the win-notice pixel of an ad, if it carries one.
    pub fn fire_impression(&self, ad: &LoadedAd) {
        if let Some(url) = ad.notice_url.clone() {
            self.fire_tracking_pixels(vec![url]);
        }
    }

    /// Fire-and-forget fan-out of tracking pixels on the background runtime.
    /// Unordered, best-effort; never blocks or fails the caller.
    pub fn fire_tracking_pixels(&self, urls: Vec<String>) {
        if urls.is_empty() {
            return;
        }
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let hits = join_all(urls.iter().map(|url| client.fire_tracking_pixel(url))).await;
            debug!(
                fired = hits.iter().filter(|ok| **ok).count(),
                total = hits.len(),
                "tracking pixel batch done"
            );
        });
    }
}
