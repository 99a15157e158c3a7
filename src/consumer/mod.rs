mod raw;

use crate::mapping::{Position, SourceLocation};
use crate::mappings::Mappings;
use crate::name::Name;
use crate::{root, Error, Result};
use raw::RawMap;
use std::fmt::{Debug, Formatter};
use url::Url;

/// One decoded sub-map: the sources, names and mapping table of a flat
/// document, or of one section of an indexed document.
#[derive(Clone)]
pub struct SourceMap {
    file: Option<String>,
    source_root: Option<String>,
    resolved_root: Option<Url>,
    sources: Vec<String>,
    names: Vec<Name>,
    mappings: Mappings,
}

impl Debug for SourceMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SourceMap\n")?;
        f.write_str("  sources:\n")?;
        for (idx, source) in self.sources.iter().enumerate() {
            writeln!(f, "    {idx}: {source}")?;
        }
        f.write_str("  names:\n")?;
        for (idx, name) in self.names.iter().enumerate() {
            writeln!(f, "    {idx}: {}", name.render())?;
        }
        f.write_str("  mappings:\n")?;
        if !self.mappings.is_empty() {
            let mut last_mapping = &self.mappings[0];
            write!(f, "    {:?}", last_mapping)?;
            for mapping in self.mappings.iter().skip(1) {
                if mapping.generated().line != last_mapping.generated().line {
                    f.write_str("\n    ")?;
                } else {
                    f.write_str(", ")?;
                }
                write!(f, "{:?}", mapping)?;
                last_mapping = mapping;
            }
        }
        Ok(())
    }
}

impl SourceMap {
    fn from_raw(raw: RawMap, origin: &str) -> Result<Self> {
        check_version(raw.version)?;

        let resolved_root = root::resolve(raw.source_root.as_deref(), origin)?;
        let mappings = Mappings::decode(raw.mappings, raw.sources.len(), raw.names.len())?;

        Ok(Self {
            file: raw.file,
            source_root: raw.source_root,
            resolved_root,
            sources: raw.sources,
            names: raw.names,
            mappings,
        })
    }

    /// Resolves one entry of `sources` to its absolute-or-joined form.
    fn abs_source(&self, source: &str) -> String {
        if root::is_absolute(source) {
            return source.to_owned();
        }

        if let Some(resolved_root) = &self.resolved_root {
            let mut url = resolved_root.clone();
            url.set_path(&root::join(resolved_root.path(), source));
            return url.to_string();
        }

        if let Some(source_root) = self.source_root.as_deref().filter(|root| !root.is_empty()) {
            return root::join(source_root, source);
        }

        source.to_owned()
    }

    fn lookup(&self, generated_line: i32, generated_col: i32) -> Option<SourceLocation> {
        let mapping = self.mappings.find((generated_line, generated_col))?;

        let (source, line, column) = match mapping.source_info() {
            Some(info) => (
                self.abs_source(&self.sources[info.id as usize]),
                info.position.line,
                info.position.column,
            ),
            None => (String::new(), 0, 0),
        };

        let name = match mapping.name_id() {
            Some(id) => self.names[id as usize].render().into_owned(),
            None => String::new(),
        };

        Some(SourceLocation {
            source,
            name,
            line,
            column,
        })
    }
}

impl SourceMap {
    /// Returns the display name of the generated file, if any.
    #[inline]
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    #[inline]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    #[inline]
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    #[inline]
    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }
}

/// One section of an indexed document: a sub-map plus the generated position
/// at which its coordinate space begins.
#[derive(Debug, Clone)]
pub struct Section {
    offset: Position,
    map: SourceMap,
}

impl Section {
    #[inline]
    pub fn offset(&self) -> Position {
        self.offset
    }

    #[inline]
    pub fn map(&self) -> &SourceMap {
        &self.map
    }
}

/// `Consumer` is a fully parsed source-map document, ready to answer
/// position queries.
///
/// A flat document is handled as an indexed document with a single implicit
/// section at offset `(0, 0)`, so both variants share one query path. The
/// consumer is immutable once built and safe to query from any number of
/// threads concurrently.
///
/// # Example
/// ```
/// use orimap::Consumer;
///
/// let buf = br#"{
///     "version": 3,
///     "file": "out.js",
///     "sources": ["add.ts"],
///     "names": ["add"],
///     "mappings": "AAAAA,QACEA"
/// }"#;
/// let consumer = Consumer::parse("", buf).unwrap();
///
/// let loc = consumer.source(1, 8).unwrap();
/// assert_eq!(loc.source, "add.ts");
/// assert_eq!(loc.name, "add");
/// assert_eq!((loc.line, loc.column), (2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Consumer {
    file: String,
    // descending offset order, so the scan in `source` can take the first
    // section that starts at or before the query
    sections: Vec<Section>,
}

impl Consumer {
    /// Parses a source-map document.
    ///
    /// `origin` is the locator the document itself was obtained from ("" if
    /// unknown); an absolute origin URL lets relative source names resolve
    /// against the document's own directory.
    pub fn parse(origin: &str, buf: &[u8]) -> Result<Self> {
        let raw: RawMap = serde_json::from_slice(buf)?;
        check_version(raw.version)?;

        let file = raw.file.clone().unwrap_or_default();

        let sections = if raw.sections.is_empty() {
            vec![Section {
                offset: Position::new(0, 0),
                map: SourceMap::from_raw(raw, origin)?,
            }]
        } else {
            let mut sections = Vec::with_capacity(raw.sections.len());
            for section in raw.sections {
                sections.push(Section {
                    offset: Position::new(section.offset.line, section.offset.column),
                    map: SourceMap::from_raw(section.map, origin)?,
                });
            }
            sections.reverse();
            sections
        };

        Ok(Self { file, sections })
    }

    /// Returns the display name of the generated file ("" if absent).
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the sections in their stored (descending offset) order.
    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the original location for a generated position, or `None`
    /// when no mapping covers it.
    ///
    /// `generated_line` is 1-based and `generated_col` 0-based; see
    /// [Position]. The owning section is the first, scanning in descending
    /// offset order, whose coordinate space starts before the query; the
    /// query is translated into that space (which may leave the column
    /// negative, ahead of the section's first mapping) and resolved there
    /// exclusively.
    pub fn source(&self, generated_line: i32, generated_col: i32) -> Option<SourceLocation> {
        for section in &self.sections {
            if section.offset.line < generated_line
                || (section.offset.line + 1 == generated_line
                    && section.offset.column <= generated_col)
            {
                return section.map.lookup(
                    generated_line - section.offset.line,
                    generated_col - section.offset.column,
                );
            }
        }
        None
    }
}

fn check_version(version: i64) -> Result<()> {
    if version == 3 || version == 0 {
        Ok(())
    } else {
        Err(Error::UnsupportedVersion(version))
    }
}
