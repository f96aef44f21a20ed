use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("target `{input}` does not name a domain")]
    Empty { input: String },
}

/// Site to scan: a bare domain plus the base URL requests are built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    domain: String,
    base_url: String,
}

impl Target {
    /// Normalise a domain or URL: scheme prefixes and surrounding slashes are
    /// dropped and the site is always reached over HTTPS.
    pub fn parse(input: &str) -> Result<Self, TargetError> {
        let domain = input
            .trim()
            .replace("https://", "")
            .replace("http://", "")
            .trim_matches('/')
            .to_string();
        if domain.is_empty() {
            return Err(TargetError::Empty {
                input: input.to_string(),
            });
        }
        let base_url = format!("https://{domain}");
        Ok(Self { domain, base_url })
    }

    /// Target with an explicit base URL, e.g. a local server.
    pub fn with_base_url(domain: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path such as `/robots.txt`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
