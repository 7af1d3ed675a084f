use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENDPOINT_ENV: &str = "APIGATEWAYV2_ENDPOINT";
pub const REGION_ENV: &str = "AWS_REGION";

/// `apigatewayv2-rust/<crate version>`
pub fn default_user_agent() -> String {
    format!("apigatewayv2-rust/{}", env!("CARGO_PKG_VERSION"))
}

/// Represents the client.xml configuration file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename = "client")]
pub struct ClientConfig {
    /// Region used to derive the default endpoint
    #[serde(default = "default_region")]
    pub region: String,

    /// Explicit endpoint, e.g. a local emulator; overrides the regional one
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Transport timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from XML file
    pub fn from_file(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)?;
        Self::from_xml(&contents)
    }

    pub fn from_xml(xml: &str) -> anyhow::Result<Self> {
        let config: ClientConfig = serde_xml_rs::from_str(xml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `APIGATEWAYV2_ENDPOINT` and `AWS_REGION` from the process environment
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any variable source; empty values are ignored
    pub fn apply_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            tracing::debug!("Endpoint overridden by {}: {}", ENDPOINT_ENV, endpoint);
            self.endpoint = Some(endpoint);
        }
        if let Some(region) = lookup(REGION_ENV) {
            tracing::debug!("Region overridden by {}: {}", REGION_ENV, region);
            self.region = region;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.region.trim().is_empty() {
            anyhow::bail!("region must not be empty");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        if let Some(endpoint) = &self.endpoint {
            let url = url::Url::parse(endpoint)
                .map_err(|e| anyhow::anyhow!("invalid endpoint '{}': {}", endpoint, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!("endpoint '{}' must use http or https", endpoint);
            }
        }
        Ok(())
    }

    /// The endpoint requests are sent to, without a trailing slash
    pub fn resolved_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://apigateway.{}.amazonaws.com", self.region),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_full_config() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<client>
    <region>eu-west-1</region>
    <endpoint>http://localhost:4566</endpoint>
    <timeout_secs>5</timeout_secs>
    <user_agent>my-tool/1.0</user_agent>
</client>"#;

        let config = ClientConfig::from_xml(xml).unwrap();
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.endpoint, Some("http://localhost:4566".to_string()));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent(), "my-tool/1.0");
        assert_eq!(config.resolved_endpoint(), "http://localhost:4566");
    }

    #[test]
    fn test_parse_config_without_optional_fields() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<client>
    <region>ap-southeast-2</region>
</client>"#;

        let config = ClientConfig::from_xml(xml).unwrap();
        assert!(config.endpoint.is_none());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.user_agent().starts_with("apigatewayv2-rust/"));
        assert_eq!(
            config.resolved_endpoint(),
            "https://apigateway.ap-southeast-2.amazonaws.com"
        );
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<client>
</client>"#;

        let config = ClientConfig::from_xml(xml).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.region, DEFAULT_REGION);
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let xml = r#"<client><endpoint>not a url</endpoint></client>"#;
        assert!(ClientConfig::from_xml(xml).is_err());

        let xml = r#"<client><endpoint>ftp://example.com</endpoint></client>"#;
        assert!(ClientConfig::from_xml(xml).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let xml = r#"<client><timeout_secs>0</timeout_secs></client>"#;
        assert!(ClientConfig::from_xml(xml).is_err());
    }

    #[test]
    fn test_overrides_replace_endpoint_and_region() {
        let config = ClientConfig::default()
            .apply_overrides(env(&[
                (ENDPOINT_ENV, "http://127.0.0.1:9000/"),
                (REGION_ENV, "us-west-2"),
            ]))
            .unwrap();

        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.resolved_endpoint(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let config = ClientConfig::default()
            .apply_overrides(env(&[(ENDPOINT_ENV, "  "), (REGION_ENV, "")]))
            .unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_invalid_override_rejected() {
        let result = ClientConfig::default().apply_overrides(env(&[(ENDPOINT_ENV, "::bad::")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_success() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<client>
    <region>eu-central-1</region>
    <timeout_secs>10</timeout_secs>
</client>"#;
        temp_file.write_all(xml.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = ClientConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_from_file_not_found() {
        let result = ClientConfig::from_file("/nonexistent/path/client.xml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_invalid_xml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"not valid xml").unwrap();
        temp_file.flush().unwrap();

        let result = ClientConfig::from_file(temp_file.path());
        assert!(result.is_err());
    }
}
