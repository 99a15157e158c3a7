use crate::mapping::{Mapping, Position};
use crate::splitter::Splitter;
use crate::vlq::VlqDecoder;
use crate::{Error, Result};
use std::ops::Deref;

/// `Mappings` is the decoded, ordered table of [Mapping] entries of one
/// (sub-)map. It is built once during parsing and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Mappings(pub(crate) Vec<Mapping>);

impl Deref for Mappings {
    type Target = [Mapping];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Mappings {
    /// Decodes the raw `mappings` string, consuming it.
    ///
    /// Rows are separated by `;` and segments within a row by `,`; each
    /// segment holds 1, 4 or 5 zig-zag base64 VLQ values. The generated
    /// column delta resets at every row while the source id, source line,
    /// source column and name id deltas accumulate across the whole stream.
    ///
    /// Generated and original lines are rebased to 1 during decoding; see
    /// [Position](crate::Position).
    pub(crate) fn decode(raw: String, sources_len: usize, names_len: usize) -> Result<Self> {
        let mut records = Vec::new();

        let mut generated_line = 1i32;
        let mut generated_col = 0i64;
        let mut source_id = 0i64;
        let mut source_line = 1i64;
        let mut source_col = 0i64;
        let mut name_id = 0i64;

        let mut decoder = VlqDecoder::new();

        for line in Splitter::new(&raw, b';') {
            if !line.is_empty() {
                for segment in Splitter::new(line, b',') {
                    let nums = decoder.decode(segment)?;

                    match nums.len() {
                        1 => {
                            generated_col += nums[0];
                            records.push(Mapping::new(generated_line, generated_col as i32));
                        }
                        4 | 5 => {
                            generated_col += nums[0];

                            source_id += nums[1];
                            if source_id < 0 || source_id >= sources_len as i64 {
                                return Err(Error::UnknownSourceReference(source_id));
                            }

                            source_line += nums[2];
                            source_col += nums[3];

                            let mut mapping = Mapping::new(generated_line, generated_col as i32)
                                .with_source(
                                    source_id as u32,
                                    source_line as i32,
                                    source_col as i32,
                                );

                            if nums.len() == 5 {
                                name_id += nums[4];
                                if name_id < 0 || name_id >= names_len as i64 {
                                    return Err(Error::UnknownNameReference(name_id));
                                }
                                mapping = mapping.with_name(name_id as u32);
                            }

                            records.push(mapping);
                        }
                        _ => return Err(Error::MalformedMappings(segment.to_owned())),
                    }
                }
            }

            generated_line += 1;
            generated_col = 0;
        }

        // lookups binary-search the table, so restore order if negative
        // column deltas produced any inversions
        if !records.is_sorted_by_key(Mapping::generated) {
            records.sort_by_key(Mapping::generated);
        }

        Ok(Self(records))
    }

    /// Finds the mapping for a generated position.
    ///
    /// An exact match wins; otherwise the closest preceding mapping is
    /// returned. There is no match when the position precedes every mapping
    /// or follows the last one.
    pub fn find<P>(&self, pos: P) -> Option<&Mapping>
    where
        P: Into<Position>,
    {
        let pos = pos.into();
        let idx = self.0.partition_point(|mapping| mapping.generated() < pos);

        let mapping = self.0.get(idx)?;
        if mapping.generated() > pos {
            if idx == 0 {
                return None;
            }
            return Some(&self.0[idx - 1]);
        }
        Some(mapping)
    }
}
