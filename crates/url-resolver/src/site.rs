//! Site links and attachment resolution
//!
//! [`SiteLinks`] builds absolute URLs below the site's static-asset,
//! revision-export and raw-attachment roots. Attachment lookup goes through
//! the [`ResourceResolver`] trait so a host can substitute its own storage.

use crate::location::Realm;
use movie_core::ResourceError;

/// Resolves an attachment to an absolute raw-content URL
#[cfg_attr(test, mockall::automock)]
pub trait ResourceResolver: Send + Sync {
    /// Raw-content URL of `filename` attached to `locator` in `realm`
    fn raw_attachment_url(
        &self,
        realm: Realm,
        locator: &str,
        filename: &str,
    ) -> Result<String, ResourceError>;
}

/// Absolute URL roots of a site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLinks {
    base: String,
    chrome_base: String,
    export_base: String,
}

impl SiteLinks {
    /// Links for a site rooted at `base`, e.g. `http://example.com/mysite`
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            chrome_base: format!("{}/chrome", base),
            export_base: format!("{}/export", base),
            base,
        }
    }

    /// Override the static-asset root
    pub fn with_chrome_base(mut self, chrome_base: impl Into<String>) -> Self {
        self.chrome_base = chrome_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the revision-export root
    pub fn with_export_base(mut self, export_base: impl Into<String>) -> Self {
        self.export_base = export_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Site root
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of a static asset
    pub fn chrome(&self, path: &str) -> String {
        join(&self.chrome_base, &[path])
    }

    /// URL of a file exported from the repository
    pub fn export(&self, path: &str) -> String {
        join(&self.export_base, &[path])
    }

    /// URL of an attachment's raw content
    pub fn raw_attachment(&self, realm: Realm, locator: &str, filename: &str) -> String {
        join(&self.base, &["raw-attachment", realm.as_str(), locator, filename])
    }
}

impl ResourceResolver for SiteLinks {
    fn raw_attachment_url(
        &self,
        realm: Realm,
        locator: &str,
        filename: &str,
    ) -> Result<String, ResourceError> {
        if locator.is_empty() || filename.trim_matches('/').is_empty() {
            return Err(ResourceError::new(format!(
                "incomplete attachment reference {}:{}:{}",
                realm, locator, filename
            )));
        }
        Ok(self.raw_attachment(realm, locator, filename))
    }
}

/// Append path parts to `base`, percent-encoding each segment
fn join(base: &str, parts: &[&str]) -> String {
    let mut url = base.to_string();
    for segment in parts.iter().flat_map(|part| part.split('/')) {
        if segment.is_empty() {
            continue;
        }
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}
