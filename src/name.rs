use serde::Deserialize;
use std::borrow::Cow;

/// One entry of the `names` list.
///
/// Some producers emit bare numbers instead of quoted strings, so an entry is
/// either kind and is normalized to text through [render](Name::render) when
/// a query resolves it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Name {
    Text(String),
    Numeric(f64),
}

impl Name {
    /// Renders the name as text.
    ///
    /// Numeric entries use the shortest decimal representation that
    /// round-trips, so `42` renders as `"42"` rather than `"42.0"`.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Name::Text(text) => Cow::Borrowed(text),
            Name::Numeric(value) => Cow::Owned(value.to_string()),
        }
    }
}
