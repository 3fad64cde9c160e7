//! Bid request construction for the three supported ad formats.

use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::config::SdkConfig;
use crate::error::AdError;
use crate::openrtb::request::{
    Banner, BidRequest, Format, Impression, User, Video,
};
use crate::profile::{AppInfo, DeviceProfile};

/// Full-screen creative position per the OpenRTB ad position table.
const POS_FULLSCREEN: i32 = 7;

static VIDEO_MIMES: Lazy<Vec<String>> = Lazy::new(|| {
    ["video/mp4", "video/webm", "video/3gpp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
});

/// VAST 2.0/3.0, wrapper variants included.
const VIDEO_PROTOCOLS: [i32; 4] = [2, 3, 5, 6];

/// The ad slot variant a caller is requesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdFormat {
    /// Inline banner with caller-supplied dp dimensions.
    Banner { width: i32, height: i32 },
    /// Full-screen HTML interstitial sized to the device.
    Interstitial,
    /// Full-screen linear video with reward semantics.
    RewardedVideo,
}

/// Builds one protocol-compliant `BidRequest` per call.
///
/// Every request gets a fresh random ID for itself and its single impression;
/// requests are never reused.
pub struct BidRequestBuilder<'a> {
    config: &'a SdkConfig,
    profile: &'a DeviceProfile,
    app: &'a AppInfo,
    user_id: &'a str,
}

impl<'a> BidRequestBuilder<'a> {
    pub fn new(
        config: &'a SdkConfig,
        profile: &'a DeviceProfile,
        app: &'a AppInfo,
        user_id: &'a str,
    ) -> Self {
        Self {
            config,
            profile,
            app,
            user_id,
        }
    }

    /// Constructs the request, rejecting unusable input before any transport
    /// work happens.
    pub fn build(&self, format: AdFormat) -> Result<BidRequest, AdError> {
        if !self.profile.has_valid_dimensions() {
            return Err(AdError::InvalidRequest(format!(
                "invalid device dimensions: {}x{}",
                self.profile.width, self.profile.height
            )));
        }

        let imp = match format {
            AdFormat::Banner { width, height } => {
                if width <= 0 || height <= 0 {
                    return Err(AdError::InvalidRequest(format!(
                        "invalid banner size: {}x{}",
                        width, height
                    )));
                }
                Impression {
                    id: Uuid::new_v4().to_string(),
                    banner: Some(Banner {
                        w: width,
                        h: height,
                        format: Some(vec![Format {
                            w: width,
                            h: height,
                        }]),
                        pos: 0,
                    }),
                    video: None,
                    native: None,
                    instl: 0,
                    bidfloor: 0.01,
                    secure: 1,
                }
            }
            AdFormat::Interstitial => Impression {
                id: Uuid::new_v4().to_string(),
                banner: Some(Banner {
                    w: self.profile.width,
                    h: self.profile.height,
                    format: None,
                    pos: POS_FULLSCREEN,
                }),
                video: None,
                native: None,
                instl: 1,
                bidfloor: 0.05,
                secure: 1,
            },
            AdFormat::RewardedVideo => Impression {
                id: Uuid::new_v4().to_string(),
                banner: None,
                video: Some(Video {
                    mimes: VIDEO_MIMES.clone(),
                    minduration: 5,
                    maxduration: 30,
                    protocols: VIDEO_PROTOCOLS.to_vec(),
                    w: self.profile.width,
                    h: self.profile.height,
                    startdelay: 0,
                    linearity: 1,
                    skip: 0,
                    pos: POS_FULLSCREEN,
                }),
                native: None,
                instl: 1,
                bidfloor: 0.10,
                secure: 1,
            },
        };

        Ok(BidRequest {
            id: Uuid::new_v4().to_string(),
            imp: vec![imp],
            app: Some(self.app.to_wire()),
            device: Some(self.profile.to_wire()),
            user: Some(User {
                id: self.user_id.to_string(),
                gender: None,
                yob: None,
            }),
            test: if self.config.debug { 1 } else { 0 },
            tmax: self.config.tmax_ms,
        })
    }
}
