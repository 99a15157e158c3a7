use std::fmt::{Debug, Formatter};

/// `Position` is a line/column pair in a file.
///
/// # Note
///
/// Lines are 1-based and columns are 0-based, following the convention of
/// `Error.prototype.stack` and most runtimes that report generated positions.
/// Positions are signed: translating a query into a section's local
/// coordinate space may produce a negative column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct Position {
    pub line: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(line: i32, column: i32) -> Self {
        Self { line, column }
    }
}

impl From<(i32, i32)> for Position {
    fn from((line, column): (i32, i32)) -> Self {
        Self::new(line, column)
    }
}

/// A specific position in a specific source file.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SourceInfo {
    pub id: u32,
    pub position: Position,
}

impl SourceInfo {
    pub const fn new(id: u32, position: Position) -> Self {
        Self { id, position }
    }
}

/// One decoded entry of the `mappings` stream: a generated position and,
/// optionally, the original position and symbol name it corresponds to.
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Mapping {
    generated: Position,
    source: Option<SourceInfo>,
    name_id: Option<u32>,
}

impl Debug for Mapping {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.generated.line, self.generated.column)?;
        if let Some(source_info) = self.source {
            write!(
                f,
                " -> {}:{}:{}",
                source_info.id, source_info.position.line, source_info.position.column,
            )?;
            if let Some(name_id) = self.name_id {
                write!(f, " ({})", name_id)?;
            }
        }
        Ok(())
    }
}

impl Mapping {
    pub const fn new(generated_line: i32, generated_col: i32) -> Self {
        Self {
            generated: Position {
                line: generated_line,
                column: generated_col,
            },
            source: None,
            name_id: None,
        }
    }

    pub const fn with_source(self, source_id: u32, source_line: i32, source_col: i32) -> Self {
        Self {
            source: Some(SourceInfo::new(
                source_id,
                Position::new(source_line, source_col),
            )),
            ..self
        }
    }

    pub const fn with_name(self, name_id: u32) -> Self {
        Self {
            name_id: Some(name_id),
            ..self
        }
    }
}

impl Mapping {
    /// Returns the generated position of the mapping.
    #[inline]
    pub fn generated(&self) -> Position {
        self.generated
    }

    /// Returns the original source information if available.
    #[inline]
    pub fn source_info(&self) -> Option<SourceInfo> {
        self.source
    }

    /// Returns the name id if available.
    ///
    /// A name id is only ever present when source information is present.
    #[inline]
    pub fn name_id(&self) -> Option<u32> {
        self.name_id
    }
}

/// The result of a [Consumer](crate::Consumer) query: the original location
/// that a generated position corresponds to.
///
/// `source` and `name` are empty when the matched mapping carries no source
/// or name information; `line`/`column` are zero in the former case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub source: String,
    pub name: String,
    pub line: i32,
    pub column: i32,
}
