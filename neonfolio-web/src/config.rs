//! Page options read from the URL query string.

use bitflags::bitflags;

bitflags! {
    /// Optional page behaviors toggled from the query string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Features: u8 {
        /// `?no3d`: skip the WebGL scene even when the browser supports it.
        const FORCE_FALLBACK = 1 << 0;
        /// `?rain`: paint the matrix rain layer behind the content.
        const MATRIX_RAIN    = 1 << 1;
        /// `?debug`: expose `window.__neonfolio_debug`.
        const DEBUG_API      = 1 << 2;
    }
}

/// Options for one page mount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageConfig {
    /// `EnvFilter` directive from `?log=`.
    pub log: Option<String>,
    pub features: Features,
    /// Seed for the particle layout; `Math.random` when absent.
    pub seed: Option<u64>,
    /// Endpoint receiving contact form posts; the submission is simulated when absent.
    pub contact_endpoint: Option<String>,
}

impl PageConfig {
    /// Reads the config from the current page URL.
    #[must_use]
    pub fn from_location() -> Self {
        Self::from_lookup(crate::js::get_query_param)
    }

    /// Builds the config from a query parameter lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut features = Features::empty();
        for (name, flag) in [
            ("no3d", Features::FORCE_FALLBACK),
            ("rain", Features::MATRIX_RAIN),
            ("debug", Features::DEBUG_API),
        ] {
            features.set(flag, lookup(name).is_some_and(|v| is_enabled(&v)));
        }

        let non_empty = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let seed = lookup("seed").and_then(|v| match v.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(value = %v, error = %e, "ignoring malformed seed");
                None
            },
        });

        let contact_endpoint = non_empty("contact").filter(|url| {
            let supported = url.starts_with("https://") || url.starts_with("http://") || url.starts_with('/');
            if !supported {
                tracing::warn!(url = %url, "ignoring contact endpoint that is not an http(s) URL or path");
            }
            supported
        });

        Self { log: non_empty("log"), features, seed, contact_endpoint }
    }

    #[must_use]
    pub fn has(&self, feature: Features) -> bool {
        self.features.contains(feature)
    }
}

/// A present flag counts as on unless it says otherwise; `?rain` alone enables it.
fn is_enabled(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> PageConfig {
        PageConfig::from_lookup(|name| {
            pairs.iter().find(|(k, _)| *k == name).map(|(_, v)| (*v).to_string())
        })
    }

    #[test]
    fn empty_query_is_default() {
        assert_eq!(parse(&[]), PageConfig::default());
    }

    #[test]
    fn bare_flags_enable_features() {
        let config = parse(&[("rain", ""), ("debug", "1"), ("no3d", "true")]);
        assert!(config.has(Features::MATRIX_RAIN));
        assert!(config.has(Features::DEBUG_API));
        assert!(config.has(Features::FORCE_FALLBACK));
    }

    #[test]
    fn explicit_off_values_disable() {
        let config = parse(&[("rain", "0"), ("debug", "off"), ("no3d", "False")]);
        assert_eq!(config.features, Features::empty());
    }

    #[test]
    fn seed_and_log() {
        let config = parse(&[("seed", " 42 "), ("log", "neonfolio_core=debug")]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log.as_deref(), Some("neonfolio_core=debug"));

        assert_eq!(parse(&[("seed", "abc")]).seed, None);
        assert_eq!(parse(&[("log", "  ")]).log, None);
    }

    #[test]
    fn contact_endpoint_must_be_http() {
        assert_eq!(
            parse(&[("contact", "https://example.com/api")]).contact_endpoint.as_deref(),
            Some("https://example.com/api")
        );
        assert_eq!(parse(&[("contact", "/api/contact")]).contact_endpoint.as_deref(), Some("/api/contact"));
        assert_eq!(parse(&[("contact", "javascript:alert(1)")]).contact_endpoint, None);
    }
}
