//! Mobile RTB advertising SDK core.
//!
//! The crate covers the protocol and lifecycle engine of an in-app ad SDK:
//! it builds OpenRTB 2.5 bid requests, posts them to an exchange, decodes bid
//! responses and VAST video markup, and drives the time-boxed single-use
//! state of every loaded ad. Rendering and device telemetry stay with the
//! host, behind the [`RenderSurface`] trait and the [`DeviceProfile`] value.
//!
//! ```no_run
//! use std::sync::Arc;
//! use rtb_adsdk::{AdEvents, InterstitialAd, SdkConfig};
//! # use rtb_adsdk::{DeviceProfile, AppInfo, RenderSurface};
//! # async fn run(profile: DeviceProfile, app: AppInfo, surface: Arc<dyn RenderSurface>) {
//! let config = SdkConfig::new("https://rtb.exchange.example", "pub-name", "pass");
//! let events = AdEvents::new()
//!     .on_ad_loaded(|| println!("ready to show"))
//!     .on_ad_failed_to_load(|e| eprintln!("load failed: {e}"));
//! let ad = InterstitialAd::new(config, profile, app, surface, events).unwrap();
//! ad.load().await;
//! if ad.is_ready() {
//!     ad.show();
//! }
//! # }
//! ```

pub mod ads;
pub mod config;
pub mod error;
pub mod network;
pub mod openrtb;
pub mod profile;
pub mod vast;

pub use ads::{
    AdEvents, AdType, BannerAd, InterstitialAd, LoadedAd, RenderSurface, RewardedVideoAd,
};
pub use config::SdkConfig;
pub use error::AdError;
pub use openrtb::builder::AdFormat;
pub use profile::{AppInfo, DeviceProfile, GeoFix};
pub use vast::VastData;
