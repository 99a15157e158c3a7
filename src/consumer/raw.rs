use crate::name::Name;
use serde::Deserialize;

/// Mirror of the raw JSON document.
///
/// Every top-level field is optional so that a degenerate document still
/// deserializes; semantic checks happen when the consumer is built. Section
/// entries, in contrast, must carry a complete `offset` and a `map`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct RawMap {
    pub version: i64,
    pub file: Option<String>,
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    pub names: Vec<Name>,
    pub mappings: String,
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSection {
    pub offset: RawOffset,
    pub map: RawMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOffset {
    pub line: i32,
    pub column: i32,
}
