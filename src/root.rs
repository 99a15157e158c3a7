use crate::{Error, Result};
use url::Url;

/// Computes the base against which relative source names resolve.
///
/// An absolute `sourceRoot` wins; otherwise an absolute origin locator
/// contributes its directory, so a relative document resolves against
/// wherever it was obtained from. A root or origin that fails URL parsing
/// for any reason other than being relative aborts the parse.
pub(crate) fn resolve(source_root: Option<&str>, origin: &str) -> Result<Option<Url>> {
    if let Some(root) = source_root.filter(|root| !root.is_empty()) {
        return match Url::parse(root) {
            Ok(url) => Ok(Some(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(None),
            Err(_) => Err(Error::InvalidRoot(root.to_owned())),
        };
    }

    if !origin.is_empty() {
        return match Url::parse(origin) {
            Ok(mut url) => {
                let dir = parent_dir(url.path()).to_owned();
                url.set_path(&dir);
                Ok(Some(url))
            }
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(None),
            Err(_) => Err(Error::InvalidOrigin(origin.to_owned())),
        };
    }

    Ok(None)
}

/// Returns whether a source name needs no resolution at all.
pub(crate) fn is_absolute(source: &str) -> bool {
    source.starts_with('/') || Url::parse(source).is_ok()
}

fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(end) => &path[..end],
        None => ".",
    }
}

/// Joins two path fragments and normalizes `.`, `..` and repeated slashes,
/// keeping the result relative when `base` is relative.
pub(crate) fn join(base: &str, path: &str) -> String {
    let rooted = base.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in base.split('/').chain(path.split('/')) {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_owned()
    } else {
        joined
    }
}
