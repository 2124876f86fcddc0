use std::time::Duration;

/// Tuning for scroll tracking and in-page navigation.
///
/// All distances are CSS pixels measured from the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// The header switches to its solid style once `scroll_y` exceeds this.
    pub solid_threshold: f64,
    /// A section is active when this horizontal line passes through it.
    pub detection_line: f64,
    /// Height of the fixed header, subtracted from every scroll target.
    pub header_offset: f64,
    /// Time given to the menu's close transition before the page scrolls.
    pub close_delay: Duration,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            solid_threshold: 50.0,
            detection_line: 100.0,
            header_offset: 80.0,
            close_delay: Duration::from_millis(300),
        }
    }
}

impl NavConfig {
    pub fn with_solid_threshold(mut self, px: f64) -> Self {
        self.solid_threshold = px;
        self
    }

    pub fn with_detection_line(mut self, px: f64) -> Self {
        self.detection_line = px;
        self
    }

    pub fn with_header_offset(mut self, px: f64) -> Self {
        self.header_offset = px;
        self
    }

    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }
}

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials for the EmailJS relay.
///
/// The browser bundle has no process environment, so these are captured when the crate is
/// compiled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient: String,
}

impl RelayConfig {
    /// Returns `None` unless all three EmailJS credentials were set at build time.
    pub fn from_build_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
            option_env!("CONTACT_RECIPIENT"),
        )
    }

    fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        recipient: Option<&str>,
    ) -> Option<Self> {
        fn non_empty(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|s| !s.is_empty())
        }
        Some(Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: non_empty(service_id)?.to_string(),
            template_id: non_empty(template_id)?.to_string(),
            public_key: non_empty(public_key)?.to_string(),
            recipient: non_empty(recipient)
                .unwrap_or(crate::content::OWNER.email)
                .to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_defaults() {
        let config = NavConfig::default();
        assert_eq!(config.solid_threshold, 50.0);
        assert_eq!(config.detection_line, 100.0);
        assert_eq!(config.header_offset, 80.0);
        assert_eq!(config.close_delay, Duration::from_millis(300));
    }

    #[test]
    fn test_nav_overrides() {
        let config = NavConfig::default()
            .with_header_offset(64.0)
            .with_close_delay(Duration::ZERO);
        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.close_delay, Duration::ZERO);
        assert_eq!(config.detection_line, 100.0);
    }

    #[test]
    fn test_relay_requires_credentials() {
        assert!(RelayConfig::from_parts(Some("svc"), Some("tpl"), None, None).is_none());
        assert!(RelayConfig::from_parts(Some("svc"), Some("  "), Some("key"), None).is_none());

        let config = RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key"), None)
            .expect("all credentials present");
        assert_eq!(config.endpoint, EMAILJS_ENDPOINT);
        assert_eq!(config.recipient, crate::content::OWNER.email);

        let config =
            RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key"), Some("me@site.dev"))
                .expect("all credentials present");
        assert_eq!(config.recipient, "me@site.dev");

        let config = RelayConfig::from_parts(
            Some(" svc "),
            Some("tpl"),
            Some("key"),
            Some("   "),
        )
        .expect("all credentials present");
        assert_eq!(config.service_id, "svc");
        assert_eq!(config.recipient, crate::content::OWNER.email);
    }
}
