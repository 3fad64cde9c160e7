//! Host-supplied device and app snapshots.
//!
//! The SDK does not collect telemetry itself; the host hands it an immutable
//! `DeviceProfile` per construction and the builder copies it into the wire
//! `device` object on every request.

use crate::openrtb::request::{App, Device, Geo, Publisher};

/// Immutable device snapshot used to populate `BidRequest.device`.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    pub user_agent: String,
    pub make: String,
    pub model: String,
    pub os: String,
    pub os_version: String,
    /// Screen width in density-independent pixels. Must be positive.
    pub width: i32,
    /// Screen height in density-independent pixels. Must be positive.
    pub height: i32,
    pub ppi: i32,
    pub pixel_ratio: f32,
    /// IETF language tag, e.g. `en-US`.
    pub language: String,
    /// Advertising identifier, if the user has not limited tracking.
    pub advertising_id: Option<String>,
    pub limit_ad_tracking: bool,
    /// OpenRTB connection type (0 = unknown, 2 = wifi, ...).
    pub connection_type: i32,
    pub ip: Option<String>,
    pub geo: Option<GeoFix>,
}

/// Best-effort geo enrichment attached to the device.
#[derive(Debug, Clone)]
pub struct GeoFix {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl DeviceProfile {
    /// True when the screen geometry is usable for an ad request.
    pub fn has_valid_dimensions(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub(crate) fn to_wire(&self) -> Device {
        Device {
            ua: self.user_agent.clone(),
            geo: self.geo.as_ref().map(|g| Geo {
                lat: g.latitude,
                lon: g.longitude,
                country: g.country.clone(),
                city: g.city.clone(),
                geo_type: 2,
            }),
            ip: self.ip.clone(),
            devicetype: 4,
            make: self.make.clone(),
            model: self.model.clone(),
            os: self.os.clone(),
            osv: self.os_version.clone(),
            w: self.width,
            h: self.height,
            ppi: self.ppi,
            pxratio: self.pixel_ratio,
            language: self.language.clone(),
            ifa: self.advertising_id.clone(),
            lmt: if self.limit_ad_tracking { 1 } else { 0 },
            connectiontype: self.connection_type,
        }
    }
}

/// Identity of the hosting application, copied into `BidRequest.app`.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub id: String,
    pub name: String,
    pub bundle: String,
    pub store_url: Option<String>,
    pub version: Option<String>,
    pub publisher_id: Option<String>,
}

impl AppInfo {
    pub(crate) fn to_wire(&self) -> App {
        App {
            id: self.id.clone(),
            name: self.name.clone(),
            bundle: self.bundle.clone(),
            storeurl: self.store_url.clone(),
            ver: self.version.clone(),
            publisher: self.publisher_id.as_ref().map(|id| Publisher {
                id: id.clone(),
                name: None,
            }),
        }
    }
}
