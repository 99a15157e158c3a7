#![allow(dead_code)]

/// Builds a synthetic minified-style source map: `lines` generated lines,
/// each mapping `segments_per_line` positions back to a handful of sources.
pub fn synthetic_map(lines: usize, segments_per_line: usize) -> Vec<u8> {
    let mut mappings = String::new();
    for line in 0..lines {
        if line != 0 {
            mappings.push(';');
        }
        for segment in 0..segments_per_line {
            if segment != 0 {
                mappings.push(',');
            }
            // IACA: +4 generated columns, +1 source line each step
            mappings.push_str("IACA");
        }
    }

    serde_json::json!({
        "version": 3,
        "file": "app.min.js",
        "sourceRoot": "http://localhost/static",
        "sources": ["app.ts"],
        "names": [],
        "mappings": mappings,
    })
    .to_string()
    .into_bytes()
}
