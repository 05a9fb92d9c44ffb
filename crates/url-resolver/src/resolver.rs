//! Absolute URL resolution
//!
//! Turns any movie reference into a decomposed absolute URL. Full URLs with
//! `http`, `https` or `ftp` pass through untouched. Site schemes map onto
//! the static-asset and export roots, and attachment schemes go through the
//! [`ResourceResolver`].

use crate::location::{Location, Realm};
use crate::shorthand::{self, Shorthand};
use crate::site::{ResourceResolver, SiteLinks};
use movie_core::{Error, Result};
use std::fmt;
use url::Url;

/// Schemes returned unchanged because they are already absolute
pub const PASS_THROUGH_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// A decomposed absolute URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedUrl {
    url: String,
    scheme: String,
    host: String,
    port: Option<u16>,
    path: String,
    params: String,
    query: String,
    fragment: String,
}

impl ResolvedUrl {
    /// Decompose an absolute URL, keeping `url` as its string form
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|e| Error::MalformedReference(format!("{}: {}", url, e)))?;

        let (path, params) = split_params(parsed.path());
        Ok(Self {
            url: url.to_string(),
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().unwrap_or_default().to_string(),
            port: parsed.port(),
            path,
            params,
            query: parsed.query().unwrap_or_default().to_string(),
            fragment: parsed.fragment().unwrap_or_default().to_string(),
        })
    }

    /// The absolute URL
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// URL scheme
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Host name without port
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, if any
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Host with `:port` when a port is given
    pub fn netloc(&self) -> String {
        match self.port {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    /// Path without `;params`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameters of the last path segment (after `;`)
    pub fn params(&self) -> &str {
        &self.params
    }

    /// Raw query string without `?`
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Fragment without `#`
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Non-empty path segments
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// `scheme://netloc` followed by `path`
    pub fn with_path(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.netloc(), path)
    }
}

impl fmt::Display for ResolvedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

fn split_params(path: &str) -> (String, String) {
    let last_segment = path.rfind('/').map_or(0, |i| i + 1);
    match path[last_segment..].find(';') {
        Some(i) => {
            let at = last_segment + i;
            (path[..at].to_string(), path[at + 1..].to_string())
        }
        None => (path.to_string(), String::new()),
    }
}

/// Split `reference` into the part before `?`/`#` and the suffix
fn split_suffix(reference: &str) -> (&str, &str) {
    match reference.find(&['?', '#'][..]) {
        Some(i) => reference.split_at(i),
        None => (reference, ""),
    }
}

/// Resolves movie references into absolute URLs
#[derive(Debug, Clone)]
pub struct UrlResolver<R = SiteLinks> {
    links: SiteLinks,
    resources: R,
}

impl UrlResolver<SiteLinks> {
    /// Resolver that also uses `links` for attachments
    pub fn new(links: SiteLinks) -> Self {
        Self {
            resources: links.clone(),
            links,
        }
    }
}

impl<R: ResourceResolver> UrlResolver<R> {
    /// Resolver with a custom attachment resolver
    pub fn with_resources(links: SiteLinks, resources: R) -> Self {
        Self { links, resources }
    }

    /// Site links used for static assets and exports
    pub fn links(&self) -> &SiteLinks {
        &self.links
    }

    /// Resolve `reference` into an absolute URL
    pub fn resolve(&self, reference: &str, location: Option<&Location>) -> Result<ResolvedUrl> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(Error::MissingReference);
        }

        let absolute = self.absolute_url(reference, location)?;
        tracing::debug!("Resolved movie reference {} to {}", reference, absolute);
        ResolvedUrl::parse(&absolute)
    }

    fn absolute_url(&self, reference: &str, location: Option<&Location>) -> Result<String> {
        if reference.contains("://") {
            let url = Url::parse(reference)
                .map_err(|e| Error::MalformedReference(format!("{}: {}", reference, e)))?;
            if PASS_THROUGH_SCHEMES.contains(&url.scheme()) {
                return Ok(reference.to_string());
            }

            let locator = decode(url.host_str().unwrap_or_default());
            let shorthand = Shorthand {
                scheme: url.scheme().to_string(),
                locator,
                path: decode(url.path()),
            };
            return match self.expand_scheme(&shorthand)? {
                Some(mut absolute) => {
                    if let Some(query) = url.query() {
                        absolute.push('?');
                        absolute.push_str(query);
                    }
                    if let Some(fragment) = url.fragment() {
                        absolute.push('#');
                        absolute.push_str(fragment);
                    }
                    Ok(absolute)
                }
                None => Ok(reference.to_string()),
            };
        }

        let (target, suffix) = split_suffix(reference);
        let shorthand = shorthand::expand(target, location)?;
        let absolute = self.expand_scheme(&shorthand)?.ok_or_else(|| {
            Error::MalformedReference(format!("unsupported scheme {}", shorthand.scheme))
        })?;
        Ok(format!("{}{}", absolute, suffix))
    }

    /// Absolute URL for a site or attachment scheme, `None` for other schemes
    fn expand_scheme(&self, shorthand: &Shorthand) -> Result<Option<String>> {
        let joined = format!("{}{}", shorthand.locator, shorthand.path);
        let url = match shorthand.scheme.as_str() {
            "htdocs" | "chrome" => self.links.chrome(&joined),
            "source" => self.links.export(&joined),
            scheme => match Realm::from_name(scheme) {
                Some(realm) => {
                    let filename = shorthand.path.trim_start_matches('/');
                    self.resources
                        .raw_attachment_url(realm, &shorthand.locator, filename)
                        .inspect_err(|e| {
                            tracing::warn!(
                                "Attachment {}:{}:{} could not be resolved: {}",
                                realm,
                                shorthand.locator,
                                filename,
                                e
                            )
                        })?
                }
                None => return Ok(None),
            },
        };
        Ok(Some(url))
    }
}

fn decode(raw: &str) -> String {
    String::from_utf8_lossy(&urlencoding::decode_binary(raw.as_bytes())).into_owned()
}
