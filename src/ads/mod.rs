//! Ad units and their shared lifecycle machinery.

pub mod banner;
pub mod events;
pub mod loader;
pub mod slot;
pub mod surface;

mod unit;

pub mod interstitial;
pub mod rewarded;

pub use banner::BannerAd;
pub use events::AdEvents;
pub use interstitial::InterstitialAd;
pub use loader::{AdLoader, AdType, LoadedAd};
pub use rewarded::RewardedVideoAd;
pub use surface::RenderSurface;
