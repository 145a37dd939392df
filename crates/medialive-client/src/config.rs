//! Client configuration.

use url::Url;

use crate::error::{ClientError, ClientResult};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("medialive-client/", env!("CARGO_PKG_VERSION"));

/// MediaLive client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every operation path is resolved against.
    pub endpoint: Url,
    /// Region the endpoint belongs to, when known.
    pub region: Option<String>,
    /// Run range checks on request records before marshalling.
    pub validate_requests: bool,
    pub user_agent: String,
}

impl ClientConfig {
    /// Config for an explicit endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            region: None,
            validate_requests: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Config for the public endpoint of `region`.
    pub fn for_region(region: impl Into<String>) -> ClientResult<Self> {
        let region = region.into();
        if region.is_empty() {
            return Err(ClientError::config_error("Region cannot be empty"));
        }
        let endpoint = Url::parse(&format!("https://medialive.{}.amazonaws.com", region))?;
        Ok(Self {
            region: Some(region),
            ..Self::new(endpoint)
        })
    }

    /// Create config from environment variables.
    ///
    /// `MEDIALIVE_ENDPOINT` overrides the endpoint derived from `AWS_REGION`;
    /// one of the two must be set.
    pub fn from_env() -> ClientResult<Self> {
        let region = std::env::var("AWS_REGION").ok().filter(|r| !r.is_empty());

        let mut config = match std::env::var("MEDIALIVE_ENDPOINT") {
            Ok(endpoint) if !endpoint.is_empty() => {
                let endpoint = Url::parse(&endpoint).map_err(|e| {
                    ClientError::config_error(format!("MEDIALIVE_ENDPOINT is not a valid URL: {}", e))
                })?;
                Self {
                    region: region.clone(),
                    ..Self::new(endpoint)
                }
            }
            _ => {
                let region = region.ok_or_else(|| {
                    ClientError::config_error("AWS_REGION or MEDIALIVE_ENDPOINT must be set")
                })?;
                Self::for_region(region)?
            }
        };

        config.validate_requests = std::env::var("MEDIALIVE_VALIDATE_REQUESTS")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if let Ok(user_agent) = std::env::var("MEDIALIVE_USER_AGENT") {
            if !user_agent.is_empty() {
                config.user_agent = user_agent;
            }
        }

        Ok(config)
    }

    pub fn with_validation(mut self, validate_requests: bool) -> Self {
        self.validate_requests = validate_requests;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_env() {
        for key in [
            "AWS_REGION",
            "MEDIALIVE_ENDPOINT",
            "MEDIALIVE_VALIDATE_REQUESTS",
            "MEDIALIVE_USER_AGENT",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_for_region_endpoint() {
        let config = ClientConfig::for_region("us-west-2").unwrap();
        assert_eq!(config.endpoint.as_str(), "https://medialive.us-west-2.amazonaws.com/");
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert!(!config.validate_requests);
        assert!(ClientConfig::for_region("").is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_region_or_endpoint() {
        clear_env();
        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, ClientError::ConfigError(_)));
    }

    #[test]
    #[serial]
    fn test_from_env_endpoint_override() {
        clear_env();
        std::env::set_var("AWS_REGION", "eu-west-1");
        std::env::set_var("MEDIALIVE_ENDPOINT", "http://localhost:4566");
        std::env::set_var("MEDIALIVE_VALIDATE_REQUESTS", "TRUE");
        std::env::set_var("MEDIALIVE_USER_AGENT", "live-ops/2.1");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.endpoint.as_str(), "http://localhost:4566/");
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert!(config.validate_requests);
        assert_eq!(config.user_agent, "live-ops/2.1");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_endpoint() {
        clear_env();
        std::env::set_var("MEDIALIVE_ENDPOINT", "not a url");
        assert!(ClientConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("AWS_REGION", "ap-southeast-2");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(!config.validate_requests);
        clear_env();
    }
}
