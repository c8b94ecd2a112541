//! The boundary to externally hosted tool content.
//!
//! The host asks an [`EmbedSurface`] to display a tool's URL and then
//! observes exactly two possible signals: loaded or failed. That mirrors
//! what a browser iframe gives you, including the unreliable part: content
//! that refuses framing (or here, serves an unusable page with a successful
//! status) never reports a failure. The design accepts this and offers
//! "open externally" as the escape hatch instead of guessing with timeouts.

mod surface;

pub use surface::HttpSurface;

use crate::catalog::Tool;
use crate::error::Result;

/// A snapshot of successfully loaded embed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedContent {
    /// URL after redirects.
    pub final_url: String,
    /// HTTP status code.
    pub status: u16,
    /// Body size in bytes.
    pub bytes: usize,
    /// Document title, when one could be extracted.
    pub title: Option<String>,
}

/// A signal from the embed surface.
///
/// Each signal carries the reload token that was current when its mount was
/// requested, so the host can drop results from superseded mounts.
#[derive(Debug, Clone)]
pub enum EmbedSignal {
    /// The embedded document finished loading.
    Loaded { token: u64, content: EmbedContent },
    /// The embedding boundary explicitly reported a failure.
    Failed { token: u64, reason: String },
}

/// Something that can display external tool content.
///
/// `mount` must never block: the surface acknowledges the request and later
/// reports at most one signal on the app event channel. There is no
/// cancellation of an in-flight mount; superseded results are filtered by
/// token on arrival.
#[cfg_attr(test, mockall::automock)]
pub trait EmbedSurface: Send {
    /// Request that `tool`'s content be displayed.
    fn mount(&self, tool: &Tool, reload_token: u64);
}

/// Open a URL in the system browser, detached from this process.
///
/// The opened context gets no handle back to the host; it runs as its own
/// process with its own lifetime.
pub fn open_external(url: &str) -> Result<()> {
    tracing::info!(url, "opening externally");
    open::that_detached(url)?;
    Ok(())
}

/// Extract a document title from an HTML body, if present.
pub(crate) fn extract_title(body: &str) -> Option<String> {
    // ASCII-only fold: byte-for-byte the same length as `body`, so the
    // indices found here are valid in `body`. Unicode lowercasing can
    // change byte lengths and would shift the slice boundaries.
    let lower = body.to_ascii_lowercase();
    let start = lower.find("<title")?;
    let open_end = lower[start..].find('>')? + start + 1;
    let close = lower[open_end..].find("</title>")? + open_end;
    let title = body[open_end..close].trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_title() {
        let html = "<html><head><title>Signal Center</title></head></html>";
        assert_eq!(extract_title(html), Some("Signal Center".to_string()));
    }

    #[test]
    fn test_extract_title_with_attributes() {
        let html = r#"<TITLE data-x="1"> Scanner </TITLE>"#;
        assert_eq!(extract_title(html), Some("Scanner".to_string()));
    }

    #[test]
    fn test_extract_title_missing_or_empty() {
        assert_eq!(extract_title("<html><body>hi</body></html>"), None);
        assert_eq!(extract_title("<title>   </title>"), None);
    }

    // U+0130 grows from 2 to 3 bytes under Unicode lowercasing; indices
    // from a lowercased copy would drift past char boundaries here.
    #[test]
    fn test_extract_title_with_case_length_shifting_chars() {
        let html = "<html><title>İİİİİİİİİ</title>über</html>";
        assert_eq!(extract_title(html), Some("İİİİİİİİİ".to_string()));
    }

    #[test]
    fn test_extract_title_after_case_length_shifting_prefix() {
        let html = "<p>İstanbul</p><title>Signals</title>";
        assert_eq!(extract_title(html), Some("Signals".to_string()));
    }
}
