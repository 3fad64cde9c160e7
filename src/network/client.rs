//! OpenRTB transport client.
//!
//! One client per ad unit. Bid requests are single-shot HTTPS POSTs with no
//! automatic retry; tracking pixels are best-effort GETs whose failures are
//! swallowed.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SdkConfig;
use crate::error::AdError;
use crate::openrtb::request::BidRequest;
use crate::openrtb::response::BidResponse;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const OPENRTB_VERSION_HEADER: &str = "X-OpenRTB-Version";
const OPENRTB_VERSION: &str = "2.5";

/// Transport-level failure classification for a bid request.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The exchange returned a non-2xx status.
    #[error("HTTP status {0}")]
    Http(u16),

    /// Empty body or a response without any usable bid. Not a fault.
    #[error("no bid: {0}")]
    NoBid(&'static str),

    /// The request exceeded the transport timeout.
    #[error("request timed out")]
    Timeout,

    /// DNS, connect, reset or any other network-layer failure.
    #[error("network failure: {0}")]
    Network(String),

    /// Serialization or response decoding failure.
    #[error("internal transport error: {0}")]
    Internal(String),
}

impl From<TransportError> for AdError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Http(status) => AdError::Network(format!("HTTP {status}")),
            TransportError::NoBid(reason) => AdError::NoFill(reason.to_string()),
            TransportError::Timeout => AdError::Timeout,
            TransportError::Network(msg) => AdError::Network(msg),
            TransportError::Internal(msg) => AdError::Internal(msg),
        }
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Network(err.to_string())
    }
}

/// HTTPS client for one exchange endpoint.
pub struct OpenRtbClient {
    http: Client,
    config: SdkConfig,
}

impl OpenRtbClient {
    pub fn new(config: SdkConfig) -> Result<Self, AdError> {
        let http = Client::builder()
            .connect_timeout(REQUEST_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AdError::Internal(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SdkConfig {
        &self.config
    }

    /// Sends one bid request and decodes the response.
    ///
    /// An empty body, a response with zero seat bids, or a first seat bid with
    /// zero bids all come back as `NoBid`.
    pub async fn send(&self, request: &BidRequest) -> Result<BidResponse, TransportError> {
        let url = self.config.endpoint_url();
        if self.config.debug {
            debug!(request_id = %request.id, %url, "sending bid request");
        }

        let response = self
            .http
            .post(&url)
            .header(OPENRTB_VERSION_HEADER, OPENRTB_VERSION)
            .json(request)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http(status.as_u16()));
        }

        let body = response.text().await.map_err(classify)?;
        if body.trim().is_empty() {
            return Err(TransportError::NoBid("empty response body"));
        }

        let bid_response: BidResponse = serde_json::from_str(&body)
            .map_err(|e| TransportError::Internal(format!("bid response decode: {e}")))?;

        if self.config.debug {
            debug!(
                request_id = %request.id,
                response_id = %bid_response.id,
                seatbids = bid_response.seatbid.len(),
                "received bid response"
            );
        }

        if !bid_response.has_bids() {
            return Err(TransportError::NoBid("no bids in response"));
        }

        Ok(bid_response)
    }

    /// Fires a one-shot tracking GET. Never disturbs the ad flow: all
    /// failures are logged and swallowed.
    pub async fn fire_tracking_pixel(&self, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    debug!(%url, status = %response.status(), "tracking pixel rejected");
                }
                ok
            }
            Err(e) => {
                warn!(%url, error = %e, "tracking pixel failed");
                false
            }
        }
    }
}
