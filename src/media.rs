//! Remote image allow-list checked at the rendering boundary.
//!
//! The normalizer only emits fully-qualified URLs, so every image a view
//! record carries can be checked here before it reaches a renderer.

use fyrre_core::models::{Image, Post};
use fyrre_core::Normalizer;
use url::Url;

/// One permitted remote location. `pathname` is either an exact path or a
/// prefix followed by `/**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
    pub port: Option<u16>,
    pub pathname: String,
}

impl RemotePattern {
    pub fn new(protocol: &str, hostname: &str, port: Option<u16>, pathname: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            hostname: hostname.to_string(),
            port,
            pathname: pathname.to_string(),
        }
    }

    pub fn matches(&self, url: &Url) -> bool {
        if url.scheme() != self.protocol || url.host_str() != Some(self.hostname.as_str()) {
            return false;
        }
        if let Some(port) = self.port {
            if url.port_or_known_default() != Some(port) {
                return false;
            }
        }
        match self.pathname.strip_suffix("/**") {
            Some(prefix) => url.path() == prefix || url.path().starts_with(&format!("{}/", prefix)),
            None => url.path() == self.pathname,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MediaAllowList {
    site_origin: Url,
    patterns: Vec<RemotePattern>,
}

impl MediaAllowList {
    /// An allow-list with no remote patterns; only site-local assets pass.
    pub fn new(site_origin: Url) -> Self {
        Self {
            site_origin,
            patterns: Vec::new(),
        }
    }

    /// The backend upload directory under `media_origin`, the deployed site's
    /// build assets, and the gravatar hosts used for author avatars.
    pub fn defaults(site_origin: Url, media_origin: &Url) -> Self {
        let mut list = Self::new(site_origin);
        if let Some(host) = media_origin.host_str() {
            list = list.with(RemotePattern::new(
                media_origin.scheme(),
                host,
                media_origin.port_or_known_default(),
                "/wp-content/uploads/**",
            ));
        }
        list.with(RemotePattern::new("https", "fyrre-magazine.vercel.app", None, "/_next/**"))
            .with(RemotePattern::new("http", "2.gravatar.com", None, "/avatar/**"))
            .with(RemotePattern::new("https", "secure.gravatar.com", None, "/avatar/**"))
    }

    pub fn with(mut self, pattern: RemotePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn permits(&self, url: &str) -> bool {
        let Ok(url) = Url::parse(url) else {
            return false;
        };
        url.origin() == self.site_origin.origin() || self.patterns.iter().any(|p| p.matches(&url))
    }

    /// Swap a non-permitted image for the placeholder.
    pub fn screen_image(&self, image: &mut Image, normalizer: &Normalizer) {
        if self.permits(&image.url) {
            return;
        }
        tracing::warn!("Rejected image outside the media allow-list: {}", image.url);
        *image = normalizer.placeholder_image(Some(&image.alt));
    }

    pub fn screen_posts(&self, posts: &mut [Post], normalizer: &Normalizer) {
        for post in posts {
            self.screen_image(&mut post.featured_image, normalizer);
        }
    }

    /// Avatar URLs fall back to the placeholder avatar on the site origin.
    pub fn screen_avatar(&self, url: &mut String, normalizer: &Normalizer) {
        if self.permits(url.as_str()) {
            return;
        }
        tracing::warn!("Rejected avatar outside the media allow-list: {}", url);
        *url = normalizer.placeholder_avatar_url();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list() -> MediaAllowList {
        MediaAllowList::defaults(
            Url::parse("https://fyrre.example").unwrap(),
            &Url::parse("http://8.138.8.7:3001").unwrap(),
        )
    }

    #[test]
    fn permits_backend_uploads() {
        assert!(allow_list().permits("http://8.138.8.7:3001/wp-content/uploads/2024/05/a.jpg"));
    }

    #[test]
    fn rejects_wrong_port_or_path() {
        let list = allow_list();
        assert!(!list.permits("http://8.138.8.7/wp-content/uploads/a.jpg"));
        assert!(!list.permits("http://8.138.8.7:3001/wp-admin/a.jpg"));
        assert!(!list.permits("http://8.138.8.7:3001/wp-content/uploads-evil/a.jpg"));
    }

    #[test]
    fn permits_gravatar_on_any_port() {
        let list = allow_list();
        assert!(list.permits("https://secure.gravatar.com/avatar/abc?s=96"));
        assert!(list.permits("http://2.gravatar.com/avatar/abc"));
        assert!(!list.permits("https://2.gravatar.com/avatar/abc"));
    }

    #[test]
    fn permits_site_local_placeholders() {
        assert!(allow_list().permits("https://fyrre.example/images/homepage/magazine-cover.jpg"));
    }

    #[test]
    fn rejects_relative_and_unknown_hosts() {
        let list = allow_list();
        assert!(!list.permits("/images/homepage/magazine-cover.jpg"));
        assert!(!list.permits("https://tracker.example/pixel.gif"));
    }

    #[test]
    fn screening_replaces_foreign_images() {
        let normalizer = Normalizer::new(
            Url::parse("http://8.138.8.7:3001").unwrap(),
            Url::parse("https://fyrre.example").unwrap(),
        );
        let mut image = Image {
            url: "https://tracker.example/pixel.gif".to_string(),
            alt: "Cover".to_string(),
            placeholder: false,
        };
        allow_list().screen_image(&mut image, &normalizer);
        assert!(image.placeholder);
        assert_eq!(image.alt, "Cover");
        assert_eq!(image.url, "https://fyrre.example/images/homepage/magazine-cover.jpg");
    }
}
