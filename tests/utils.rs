#![allow(dead_code)]

const BASE64_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// One segment of a mapping row, in absolute in-stream values
/// (0-based lines; the consumer rebases lines to 1 when decoding).
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub generated_col: i64,
    pub source: Option<(i64, i64, i64)>,
    pub name: Option<i64>,
}

impl Segment {
    pub fn bare(generated_col: i64) -> Self {
        Self {
            generated_col,
            source: None,
            name: None,
        }
    }

    pub fn sourced(generated_col: i64, source_id: i64, line: i64, col: i64) -> Self {
        Self {
            generated_col,
            source: Some((source_id, line, col)),
            name: None,
        }
    }

    pub fn named(generated_col: i64, source_id: i64, line: i64, col: i64, name_id: i64) -> Self {
        Self {
            generated_col,
            source: Some((source_id, line, col)),
            name: Some(name_id),
        }
    }
}

fn vlq_encode(out: &mut String, value: i64) {
    let mut num = if value < 0 {
        (((-value) as u64) << 1) + 1
    } else {
        (value as u64) << 1
    };

    loop {
        let mut digit = (num & 0b11111) as usize;
        num >>= 5;
        if num != 0 {
            digit |= 1 << 5;
        }
        out.push(BASE64_CHARS[digit] as char);
        if num == 0 {
            break;
        }
    }
}

/// Encodes rows of absolute segments into a delta-encoded mapping stream.
pub fn encode_mappings(rows: &[Vec<Segment>]) -> String {
    let mut out = String::new();

    let mut prev_source_id = 0;
    let mut prev_source_line = 0;
    let mut prev_source_col = 0;
    let mut prev_name_id = 0;

    for (row_idx, row) in rows.iter().enumerate() {
        if row_idx != 0 {
            out.push(';');
        }
        let mut prev_generated_col = 0;
        for (seg_idx, seg) in row.iter().enumerate() {
            if seg_idx != 0 {
                out.push(',');
            }
            vlq_encode(&mut out, seg.generated_col - prev_generated_col);
            prev_generated_col = seg.generated_col;

            if let Some((source_id, line, col)) = seg.source {
                vlq_encode(&mut out, source_id - prev_source_id);
                prev_source_id = source_id;
                vlq_encode(&mut out, line - prev_source_line);
                prev_source_line = line;
                vlq_encode(&mut out, col - prev_source_col);
                prev_source_col = col;

                if let Some(name_id) = seg.name {
                    vlq_encode(&mut out, name_id - prev_name_id);
                    prev_name_id = name_id;
                }
            }
        }
    }

    out
}

/// Builds a flat source-map document around an encoded mapping stream.
pub fn flat_map_json(sources: &[&str], names: &[&str], mappings: &str) -> Vec<u8> {
    serde_json::json!({
        "version": 3,
        "file": "out.js",
        "sources": sources,
        "names": names,
        "mappings": mappings,
    })
    .to_string()
    .into_bytes()
}
