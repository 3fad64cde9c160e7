//! Immutable SDK configuration.
//!
//! The configuration is a plain value handed to every component at
//! construction. There is no process-wide mutable state; two ad units built
//! from different configs talk to different exchanges.

/// Exchange endpoint, credentials and request defaults.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Exchange base URL, e.g. `https://useast.exchange.example:8843/`.
    pub base_url: String,
    /// Pre-shared account name, sent as the `name` query parameter.
    pub app_name: String,
    /// Pre-shared account password, sent as the `pass` query parameter.
    pub app_password: String,
    /// When set, requests carry `test=1` and the transport logs bodies.
    pub debug: bool,
    /// Maximum auction wait advertised to the exchange (`tmax`, ms).
    pub tmax_ms: u32,
}

impl SdkConfig {
    pub fn new(
        base_url: impl Into<String>,
        app_name: impl Into<String>,
        app_password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_name: app_name.into(),
            app_password: app_password.into(),
            debug: false,
            tmax_ms: 3000,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_tmax_ms(mut self, tmax_ms: u32) -> Self {
        self.tmax_ms = tmax_ms;
        self
    }

    /// True when both exchange credentials are present.
    pub fn has_credentials(&self) -> bool {
        !self.app_name.is_empty() && !self.app_password.is_empty()
    }

    /// Full bid endpoint with the credential query parameters appended.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/?name={}&pass={}",
            self.base_url.trim_end_matches('/'),
            self.app_name,
            self.app_password
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_trims_trailing_slash() {
        let config = SdkConfig::new("https://rtb.example.com/", "pub1", "s3cret");
        assert_eq!(
            config.endpoint_url(),
            "https://rtb.example.com/?name=pub1&pass=s3cret"
        );
    }

    #[test]
    fn credentials_required() {
        assert!(!SdkConfig::new("https://rtb.example.com", "", "").has_credentials());
        assert!(SdkConfig::new("https://rtb.example.com", "a", "b").has_credentials());
    }
}
