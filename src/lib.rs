//! # orimap
//!
//! This crate decodes source maps and answers point queries: given a
//! line/column in a generated file, it returns the original source file,
//! line, column and symbol name. It is meant for tools that translate
//! generated-code locations (e.g. from a runtime stack trace) back to
//! original-code locations.
//!
//! ## Getting Started
//!
//! ```ignore
//! use orimap::Consumer;
//!
//! // Parse a source map, passing the URL it was fetched from so that
//! // relative source names can resolve against it
//! let consumer = Consumer::parse("http://localhost/static/app.js.map", &buf)?;
//!
//! // Find the original location of generated line 10, column 12
//! if let Some(loc) = consumer.source(10, 12) {
//!     println!("{}:{}:{} ({})", loc.source, loc.line, loc.column, loc.name);
//! }
//! ```
//!
//! ## Overview
//!
//! ### `Consumer`
//!
//! [Consumer] is the fully parsed document: immutable once built, cheap to
//! query, and safe to share across threads. Both flat and indexed
//! ("sections") documents parse into the same shape.
//!
//! ### `SourceMap`
//!
//! [SourceMap] is one decoded sub-map with its sources, names and mapping
//! table. A flat document owns exactly one; an indexed document owns one per
//! section.
//!
//! ### `Mapping`
//!
//! [Mapping] is one entry of the decoded `mappings` table, relating a
//! generated [Position] to an optional original position and name.
//!
//! Lines are 1-based and columns 0-based throughout, matching how runtimes
//! report stack-trace positions.

mod consumer;
mod error;
mod mapping;
mod mappings;
mod name;
mod root;
mod splitter;
mod vlq;

pub use consumer::*;
pub use error::*;
pub use mapping::*;
pub use mappings::*;
pub use name::*;
