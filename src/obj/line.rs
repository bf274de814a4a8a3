/// Trimmed record bodies, bucketed by record type. Lines that match no
/// recognized prefix are kept verbatim for diagnostics.
#[derive(Default)]
pub struct LineBuckets {
    pub vertex_lines: Vec<String>,
    pub normal_lines: Vec<String>,
    pub texture_lines: Vec<String>,
    pub face_lines: Vec<String>,
    pub comment_lines: Vec<String>,
    pub unprocessed_lines: Vec<String>,
}

/// Splits raw input lines into typed buckets on their 1-3 character prefix.
/// The stored payload is the text after the prefix character(s), trimmed.
pub fn classify_lines(lines: &[String]) -> LineBuckets {
    let mut buckets = LineBuckets::default();

    for raw_line in lines {
        let line = raw_line.trim();
        if line.len() > 1 {
            // The three-character prefixes must be tested first; "vn "/"vt "
            // lines would otherwise never get past the "v " check.
            if line.starts_with("vn ") {
                buckets.normal_lines.push(line[2..].trim().to_string());
            } else if line.starts_with("vt ") {
                buckets.texture_lines.push(line[2..].trim().to_string());
            } else if line.starts_with("v ") {
                buckets.vertex_lines.push(line[1..].trim().to_string());
            } else if line.starts_with("f ") {
                buckets.face_lines.push(line[1..].trim().to_string());
            } else if line.starts_with('#') {
                buckets.comment_lines.push(line[1..].trim().to_string());
            } else {
                buckets.unprocessed_lines.push(line.to_string());
            }
        } else if line == "#" {
            buckets.comment_lines.push(String::new());
        } else {
            buckets.unprocessed_lines.push(line.to_string());
        }
    }

    buckets
}
