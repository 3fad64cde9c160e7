//! OpenRTB 2.5 bid request wire structures.
//!
//! Field names follow OpenRTB 2.5 (`imp`, `bidfloor`, `instl`, ...) so the
//! serialized JSON can be posted to any OpenRTB 2.5 exchange as-is. Optional
//! objects are skipped entirely when absent to keep request bodies small.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BidRequest {
    pub id: String,
    pub imp: Vec<Impression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<App>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    pub test: i32,
    pub tmax: u32,
}

/// A single ad slot opportunity. The SDK always sends exactly one.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Impression {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<Banner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<Video>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native: Option<Native>,
    /// 1 = interstitial/full-screen, 0 = inline.
    pub instl: i32,
    pub bidfloor: f64,
    /// Always 1: creatives must be served over HTTPS.
    pub secure: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Banner {
    pub w: i32,
    pub h: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Vec<Format>>,
    pub pos: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Format {
    pub w: i32,
    pub h: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Video {
    pub mimes: Vec<String>,
    pub minduration: i32,
    pub maxduration: i32,
    pub protocols: Vec<i32>,
    pub w: i32,
    pub h: i32,
    pub startdelay: i32,
    pub linearity: i32,
    pub skip: i32,
    pub pos: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Native {
    pub request: String,
    pub ver: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct App {
    pub id: String,
    pub name: String,
    pub bundle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storeurl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Publisher>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Publisher {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Device {
    pub ua: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    pub devicetype: i32,
    pub make: String,
    pub model: String,
    pub os: String,
    pub osv: String,
    pub w: i32,
    pub h: i32,
    pub ppi: i32,
    pub pxratio: f32,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ifa: Option<String>,
    pub lmt: i32,
    pub connectiontype: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Geo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub geo_type: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yob: Option<i32>,
}
