//! Shorthand reference expansion
//!
//! Supported forms, resolved against the current [`Location`]:
//!
//! - `sample.webm`: attachment of the current ticket or wiki page
//! - `ticket:123:sample.webm`, `wiki:Page:sample.webm`: explicit owner; an
//!   empty owner (`ticket::sample.webm`) means the current one
//! - `ticket:sample.webm`: attachment of the current ticket
//! - `wiki:Page/sub/sample.mp4`: page and file split at the last `/`
//! - `htdocs:site/file.flv`, `chrome:/site/file.flv`, `source:1024/trunk/a.ogv`

use crate::location::{Location, Realm};
use movie_core::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Schemes accepted in shorthand references
pub const SHORTHAND_SCHEMES: &[&str] = &["ticket", "wiki", "htdocs", "chrome", "source"];

/// Expanded shorthand reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shorthand {
    /// Target scheme (`ticket`, `wiki`, `htdocs`, `chrome` or `source`)
    pub scheme: String,
    /// Ticket number, wiki page, or first path component
    pub locator: String,
    /// Remaining path, empty or starting with `/`
    pub path: String,
}

impl Shorthand {
    fn new(scheme: &str, locator: &str, path: &str) -> Self {
        let path = path.trim_start_matches('/');
        Self {
            scheme: scheme.to_string(),
            locator: locator.to_string(),
            path: if path.is_empty() {
                String::new()
            } else {
                format!("/{}", path)
            },
        }
    }
}

fn shorthand_regex() -> &'static Regex {
    static SHORTHAND_REGEX: OnceLock<Regex> = OnceLock::new();
    SHORTHAND_REGEX.get_or_init(|| {
        Regex::new(r"^(?P<scheme>[A-Za-z][A-Za-z0-9+.-]*):(?:(?P<locator>[^:]*):)?(?P<rest>[^:]*)$")
            .expect("shorthand pattern is valid")
    })
}

/// Expand a shorthand reference (without query or fragment)
pub fn expand(reference: &str, location: Option<&Location>) -> Result<Shorthand> {
    if reference.contains("://") {
        return Err(Error::MalformedReference(format!(
            "{} is a full URL, not a shorthand reference",
            reference
        )));
    }

    if !reference.contains(':') {
        return expand_bare(reference, location);
    }

    let caps = shorthand_regex().captures(reference).ok_or_else(|| {
        Error::MalformedReference(format!("cannot split {} into owner and filename", reference))
    })?;
    let scheme = &caps["scheme"];
    let rest = &caps["rest"];

    if !SHORTHAND_SCHEMES.contains(&scheme) {
        return Err(Error::MalformedReference(format!(
            "unknown scheme {:?} in {}",
            scheme, reference
        )));
    }

    match caps.name("locator") {
        Some(locator) => expand_attachment(scheme, locator.as_str(), rest, location, reference),
        None => expand_single(scheme, rest, location, reference),
    }
}

fn expand_bare(filename: &str, location: Option<&Location>) -> Result<Shorthand> {
    let filename = filename.trim_matches('/');
    if filename.is_empty() {
        return Err(Error::MalformedReference("empty filename".to_string()));
    }
    let location = location.ok_or_else(|| {
        Error::MissingContext(format!(
            "{} needs a ticket or wiki page to attach to",
            filename
        ))
    })?;
    Ok(Shorthand::new(location.realm.as_str(), &location.locator, filename))
}

/// `scheme:locator:filename`
fn expand_attachment(
    scheme: &str,
    locator: &str,
    filename: &str,
    location: Option<&Location>,
    reference: &str,
) -> Result<Shorthand> {
    let realm = Realm::from_name(scheme).ok_or_else(|| {
        Error::MalformedReference(format!(
            "{} only supports ticket and wiki attachments in the owner:filename form",
            reference
        ))
    })?;
    if filename.trim_matches('/').is_empty() {
        return Err(Error::MalformedReference(format!("no filename in {}", reference)));
    }

    if locator.is_empty() {
        let current = current_locator(realm, location, reference)?;
        return Ok(Shorthand::new(scheme, current, filename));
    }
    Ok(Shorthand::new(scheme, locator, filename))
}

/// `scheme:rest`
fn expand_single(
    scheme: &str,
    rest: &str,
    location: Option<&Location>,
    reference: &str,
) -> Result<Shorthand> {
    if rest.trim_matches('/').is_empty() {
        return Err(Error::MalformedReference(format!("no filename in {}", reference)));
    }

    match Realm::from_name(scheme) {
        Some(Realm::Ticket) => {
            let current = current_locator(Realm::Ticket, location, reference)?;
            Ok(Shorthand::new(scheme, current, rest))
        }
        Some(Realm::Wiki) => match rest.trim_start_matches('/').rsplit_once('/') {
            Some((page, filename)) if !page.is_empty() && !filename.is_empty() => {
                Ok(Shorthand::new(scheme, page, filename))
            }
            Some(_) => Err(Error::MalformedReference(format!(
                "cannot split {} into page and filename",
                reference
            ))),
            None => {
                let current = current_locator(Realm::Wiki, location, reference)?;
                Ok(Shorthand::new(scheme, current, rest))
            }
        },
        None => {
            let rest = rest.trim_start_matches('/');
            let (locator, path) = rest.split_once('/').unwrap_or((rest, ""));
            Ok(Shorthand::new(scheme, locator, path))
        }
    }
}

fn current_locator<'a>(
    realm: Realm,
    location: Option<&'a Location>,
    reference: &str,
) -> Result<&'a str> {
    match location {
        Some(location) if location.realm == realm => Ok(&location.locator),
        Some(location) => Err(Error::MissingContext(format!(
            "{} refers to the current {} but this is a {} page",
            reference, realm, location.realm
        ))),
        None => Err(Error::MissingContext(format!(
            "{} refers to the current {} but none is being rendered",
            reference, realm
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded(scheme: &str, locator: &str, path: &str) -> Shorthand {
        Shorthand {
            scheme: scheme.to_string(),
            locator: locator.to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_bare_filename_on_ticket() {
        let location = Location::ticket("123");
        assert_eq!(
            expand("sample.webm", Some(&location)).unwrap(),
            expanded("ticket", "123", "/sample.webm")
        );
    }

    #[test]
    fn test_bare_filename_on_wiki() {
        let location = Location::wiki("test/movie");
        assert_eq!(
            expand("sample.mp4", Some(&location)).unwrap(),
            expanded("wiki", "test/movie", "/sample.mp4")
        );
    }

    #[test]
    fn test_bare_filename_without_context() {
        assert!(matches!(expand("sample.webm", None), Err(Error::MissingContext(_))));
    }

    #[test]
    fn test_two_colon_form() {
        let location = Location::ticket("123");
        assert_eq!(
            expand("ticket:456:sample.webm", Some(&location)).unwrap(),
            expanded("ticket", "456", "/sample.webm")
        );
        assert_eq!(
            expand("wiki:Some/Page:clip.ogv", None).unwrap(),
            expanded("wiki", "Some/Page", "/clip.ogv")
        );
    }

    #[test]
    fn test_two_colon_form_empty_locator_uses_current() {
        let location = Location::ticket("123");
        assert_eq!(
            expand("ticket::sample.webm", Some(&location)).unwrap(),
            expanded("ticket", "123", "/sample.webm")
        );
        assert!(matches!(
            expand("wiki::sample.webm", Some(&location)),
            Err(Error::MissingContext(_))
        ));
        assert!(matches!(expand("ticket::sample.webm", None), Err(Error::MissingContext(_))));
    }

    #[test]
    fn test_two_colon_form_rejects_non_attachment_scheme() {
        assert!(matches!(
            expand("htdocs:site:file.flv", None),
            Err(Error::MalformedReference(_))
        ));
    }

    #[test]
    fn test_wiki_single_colon() {
        let location = Location::wiki("page");
        assert_eq!(
            expand("wiki:sample.mp4", Some(&location)).unwrap(),
            expanded("wiki", "page", "/sample.mp4")
        );
        assert_eq!(
            expand("wiki:page/sample.mp4", Some(&location)).unwrap(),
            expanded("wiki", "page", "/sample.mp4")
        );
        assert_eq!(
            expand("wiki:test/movie/sub/sample.mp4", None).unwrap(),
            expanded("wiki", "test/movie/sub", "/sample.mp4")
        );
    }

    #[test]
    fn test_ticket_single_colon() {
        let location = Location::ticket("7");
        assert_eq!(
            expand("ticket:clip.webm", Some(&location)).unwrap(),
            expanded("ticket", "7", "/clip.webm")
        );
    }

    #[test]
    fn test_site_schemes_single_colon() {
        assert_eq!(
            expand("htdocs:/img/filename.flv", None).unwrap(),
            expanded("htdocs", "img", "/filename.flv")
        );
        assert_eq!(
            expand("chrome:site/a/b.flv", None).unwrap(),
            expanded("chrome", "site", "/a/b.flv")
        );
        assert_eq!(
            expand("source:1024/trunk/docs/a.flv", None).unwrap(),
            expanded("source", "1024", "/trunk/docs/a.flv")
        );
        assert_eq!(expand("htdocs:logo.flv", None).unwrap(), expanded("htdocs", "logo.flv", ""));
    }

    #[test]
    fn test_unknown_scheme() {
        let err = expand("mailto:someone", None).unwrap_err();
        assert!(matches!(err, Error::MalformedReference(_)));
        assert!(err.to_string().contains("mailto"));
    }

    #[test]
    fn test_too_many_colons() {
        assert!(matches!(expand("ticket:1:a:b.mp4", None), Err(Error::MalformedReference(_))));
    }

    #[test]
    fn test_missing_filename() {
        assert!(matches!(expand("ticket:123:", None), Err(Error::MalformedReference(_))));
        assert!(matches!(expand("wiki:", None), Err(Error::MalformedReference(_))));
        assert!(matches!(expand("wiki:/page/", None), Err(Error::MalformedReference(_))));
    }

    #[test]
    fn test_full_url_is_not_shorthand() {
        assert!(expand("http://example.com/a.mp4", None).is_err());
    }
}
