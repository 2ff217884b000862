/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("framefind/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Create a config that renders inline HTML.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_url_sets_only_url() {
        let config = WebViewConfig::with_url("https://example.com");
        assert_eq!(config.url.as_deref(), Some("https://example.com"));
        assert!(config.html.is_none());
        assert!(config.clipboard);
    }

    #[test]
    fn with_html_sets_only_html() {
        let config = WebViewConfig::with_html("<p>hi</p>");
        assert!(config.url.is_none());
        assert_eq!(config.html.as_deref(), Some("<p>hi</p>"));
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        let ua = WebViewConfig::default().user_agent.unwrap();
        assert!(ua.starts_with("framefind/"));
    }
}
