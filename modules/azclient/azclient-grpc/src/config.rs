//! Configuration for the authorization client.

use serde::Deserialize;

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AzConfig {
    /// PDP endpoint the client talks to.
    pub pdp_endpoint: PdpEndpoint,
}

impl AzConfig {
    /// Applies option functions, in order, on top of the defaults.
    #[must_use]
    pub fn with_options(opts: impl IntoIterator<Item = AzOption>) -> Self {
        let mut config = Self::default();
        config.apply(opts);
        config
    }

    /// Applies option functions, in order; later options win.
    pub fn apply(&mut self, opts: impl IntoIterator<Item = AzOption>) {
        for opt in opts {
            opt(self);
        }
    }
}

/// Address of the Policy Decision Point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PdpEndpoint {
    /// Host name or IP address.
    pub endpoint: String,
    pub port: u16,
}

impl Default for PdpEndpoint {
    fn default() -> Self {
        Self {
            endpoint: "localhost".to_owned(),
            port: 9094,
        }
    }
}

impl PdpEndpoint {
    /// URI used to open the gRPC channel; IPv6 hosts are bracketed.
    #[must_use]
    pub fn target(&self) -> String {
        if self.endpoint.contains(':') && !self.endpoint.starts_with('[') {
            format!("http://[{}]:{}", self.endpoint, self.port)
        } else {
            format!("http://{}:{}", self.endpoint, self.port)
        }
    }
}

/// Option function mutating a pending configuration.
pub type AzOption = Box<dyn FnOnce(&mut AzConfig) + Send>;

/// Sets the PDP host and port.
#[must_use]
pub fn with_endpoint(endpoint: impl Into<String>, port: u16) -> AzOption {
    let endpoint = endpoint.into();
    Box::new(move |config: &mut AzConfig| {
        config.pdp_endpoint = PdpEndpoint { endpoint, port };
    })
}
