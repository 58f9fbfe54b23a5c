//! Classifies incoming requests as desktop or tablet kiosk clients

use regex::Regex;
use std::sync::LazyLock;

static TABLET_UA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ipad|android.*tablet").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Tablet,
}

impl DeviceClass {
    /// Sniffs the device class from a User-Agent header.
    /// A missing or unmatched header means desktop.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if TABLET_UA.is_match(ua) => DeviceClass::Tablet,
            _ => DeviceClass::Desktop,
        }
    }

    /// Parses the explicit `?view=` override. Unknown values are ignored
    /// so the caller falls back to the User-Agent sniff.
    pub fn from_view_param(view: &str) -> Option<Self> {
        match view {
            "desktop" => Some(DeviceClass::Desktop),
            "tablet" => Some(DeviceClass::Tablet),
            _ => None,
        }
    }

    /// Full classification: the `view` override wins over the sniff.
    pub fn classify(view: Option<&str>, user_agent: Option<&str>) -> Self {
        view.and_then(DeviceClass::from_view_param)
            .unwrap_or_else(|| DeviceClass::from_user_agent(user_agent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipad_is_tablet() {
        let ua = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X) AppleWebKit/605.1.15";
        assert_eq!(DeviceClass::from_user_agent(Some(ua)), DeviceClass::Tablet);
    }

    #[test]
    fn sniff_is_case_insensitive() {
        assert_eq!(
            DeviceClass::from_user_agent(Some("mozilla/5.0 (IPAD; cpu os 15_0)")),
            DeviceClass::Tablet
        );
        assert_eq!(
            DeviceClass::from_user_agent(Some("mozilla/5.0 (linux; ANDROID 13; TABLET)")),
            DeviceClass::Tablet
        );
    }

    #[test]
    fn android_tablet_is_tablet() {
        let ua = "Mozilla/5.0 (Linux; Android 13; Tablet; rv:109.0) Gecko/113.0 Firefox/113.0";
        assert_eq!(DeviceClass::from_user_agent(Some(ua)), DeviceClass::Tablet);
    }

    #[test]
    fn android_phone_is_desktop() {
        // "Android" without "Tablet" does not match the sniff rule.
        let ua = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 Mobile";
        assert_eq!(DeviceClass::from_user_agent(Some(ua)), DeviceClass::Desktop);
    }

    #[test]
    fn missing_user_agent_is_desktop() {
        assert_eq!(DeviceClass::from_user_agent(None), DeviceClass::Desktop);
    }

    #[test]
    fn view_param_overrides_sniff() {
        let ipad = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)";
        assert_eq!(
            DeviceClass::classify(Some("desktop"), Some(ipad)),
            DeviceClass::Desktop
        );
        assert_eq!(
            DeviceClass::classify(Some("tablet"), Some("Mozilla/5.0 (Windows NT 10.0)")),
            DeviceClass::Tablet
        );
    }

    #[test]
    fn unknown_view_param_falls_back_to_sniff() {
        let ipad = "Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)";
        assert_eq!(
            DeviceClass::classify(Some("fridge"), Some(ipad)),
            DeviceClass::Tablet
        );
    }
}
