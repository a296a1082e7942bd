//! Runtime configuration loaded from environment variables.
//!
//! - `FYRRE_GRAPHQL_URL` - content backend endpoint (default: `http://localhost:3001/graphql`)
//! - `FYRRE_SECRET_KEY` - bearer token, read on every request rather than here
//! - `FYRRE_MEDIA_ORIGIN` - origin for root-relative media (default: the endpoint's origin)
//! - `FYRRE_SITE_URL` - origin serving local placeholder assets (default: `http://localhost:3000`)

use anyhow::{Context, Result};
use fyrre_core::Normalizer;
use url::Url;

use crate::content::{ContentClient, ContentService, TokenSource};
use crate::media::MediaAllowList;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/graphql";
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";
pub const TOKEN_VAR: &str = "FYRRE_SECRET_KEY";

#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: Url,
    pub token: TokenSource,
    pub media_origin: Url,
    pub site_url: Url,
}

impl Settings {
    /// Load settings from the environment, falling back to local defaults.
    pub fn from_env() -> Result<Self> {
        let endpoint = env_url("FYRRE_GRAPHQL_URL", DEFAULT_ENDPOINT)?;
        let media_origin = match std::env::var("FYRRE_MEDIA_ORIGIN") {
            Ok(value) => Url::parse(&value).context("FYRRE_MEDIA_ORIGIN is not a valid URL")?,
            Err(_) => origin_of(&endpoint),
        };
        let site_url = env_url("FYRRE_SITE_URL", DEFAULT_SITE_URL)?;

        Ok(Self {
            endpoint,
            token: TokenSource::Env(TOKEN_VAR.to_string()),
            media_origin,
            site_url,
        })
    }

    /// Create with explicit configuration. Media is served from the endpoint's origin.
    pub fn new(endpoint: Url, token: TokenSource, site_url: Url) -> Self {
        Self {
            media_origin: origin_of(&endpoint),
            endpoint,
            token,
            site_url,
        }
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.media_origin.clone(), self.site_url.clone())
    }

    pub fn content_service(&self) -> ContentService {
        ContentService::new(
            ContentClient::new(self.endpoint.clone(), self.token.clone()),
            self.normalizer(),
        )
    }

    pub fn allow_list(&self) -> MediaAllowList {
        MediaAllowList::defaults(self.site_url.clone(), &self.media_origin)
    }
}

fn env_url(var: &str, default: &str) -> Result<Url> {
    let value = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&value).with_context(|| format!("{} is not a valid URL: {}", var, value))
}

/// Scheme, host and port of `url`, with an empty path.
fn origin_of(url: &Url) -> Url {
    let mut origin = url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    origin
}
