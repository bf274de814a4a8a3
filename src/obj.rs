use crate::model::face::Face;
use crate::progress::ProgressReporter;
use std::fs::File;
use std::io::{BufRead, BufReader, Error};
use std::path::Path;

mod fields;
mod line;

#[derive(Debug)]
pub enum ImportError {
    IoError(Error),
}

impl From<std::io::Error> for ImportError {
    fn from(e: Error) -> Self {
        ImportError::IoError(e)
    }
}

pub type ImportResult<T> = Result<T, ImportError>;

/// Everything extracted from one .obj source: the geometric stores plus the
/// diagnostic line buckets.
pub struct ParsedObj {
    pub vertices: Vec<glm::Vec3>,
    pub normals: Vec<glm::Vec3>,
    pub textures: Vec<glm::Vec3>,
    pub faces: Vec<Face>,
    pub comment_lines: Vec<String>,
    pub unprocessed_lines: Vec<String>,
}

/// Reads the whole file into memory, reporting percentages against the file
/// size. An unopenable or unreadable file is the only failure in the entire
/// import; everything after this point is best-effort.
pub fn read_lines(path: &Path, reporter: &mut dyn ProgressReporter) -> ImportResult<Vec<String>> {
    let file = File::open(path)?;
    let file_length = file.metadata()?.len();
    let reader = BufReader::new(file);

    let stage = format!("Loading {}", path.display());
    let mut lines = Vec::new();
    let mut bytes_read = 0u64;
    for line in reader.lines() {
        let line = line?;
        bytes_read += line.len() as u64 + 1;
        if file_length > 0 {
            let percent = (bytes_read as f32 * 100.0 / file_length as f32).min(100.0);
            reporter.report(&stage, percent);
        }
        lines.push(line);
    }

    Ok(lines)
}

/// Runs the record pipeline: classify lines into typed buckets, then convert
/// each bucket's payloads into numeric stores. Records that do not match
/// their bucket's expected shape are dropped without a diagnostic.
pub fn parse(lines: &[String], reporter: &mut dyn ProgressReporter) -> ParsedObj {
    let buckets = line::classify_lines(lines);

    let vertices: Vec<glm::Vec3> = buckets
        .vertex_lines
        .iter()
        .filter_map(|payload| fields::parse_vertex_fields(payload))
        .collect();
    let normals: Vec<glm::Vec3> = buckets
        .normal_lines
        .iter()
        .filter_map(|payload| fields::parse_vertex_fields(payload))
        .collect();
    let textures: Vec<glm::Vec3> = buckets
        .texture_lines
        .iter()
        .filter_map(|payload| fields::parse_texture_fields(payload))
        .collect();

    let mut faces = Vec::new();
    let face_line_count = buckets.face_lines.len();
    for (number, payload) in buckets.face_lines.iter().enumerate() {
        reporter.report("Building model", number as f32 * 100.0 / face_line_count as f32);
        if let Some(face) = fields::parse_face_fields(payload) {
            faces.push(face);
        }
    }

    ParsedObj {
        vertices,
        normals,
        textures,
        faces,
        comment_lines: buckets.comment_lines,
        unprocessed_lines: buckets.unprocessed_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentProgress;

    struct RecordingProgress {
        reports: Vec<(String, f32)>,
    }

    impl ProgressReporter for RecordingProgress {
        fn report(&mut self, stage: &str, percent: f32) {
            self.reports.push((stage.to_string(), percent));
        }
    }

    fn lines_of(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn parse_should_fill_all_stores_from_their_buckets() {
        // Arrange
        let lines = lines_of(&[
            "# cube fragment",
            "v 0 0 0",
            "v 1 0 0",
            "v 0 1 0",
            "vn 0 0 1",
            "vt 0.5 0.5",
            "f 1 2 3",
            "s off",
        ]);

        // Act
        let parsed = parse(&lines, &mut SilentProgress);

        // Assert
        assert_eq!(parsed.vertices.len(), 3);
        assert_eq!(parsed.normals.len(), 1);
        assert_eq!(parsed.textures.len(), 1);
        assert_eq!(parsed.faces.len(), 1);
        assert_eq!(parsed.comment_lines, vec!["cube fragment"]);
        assert_eq!(parsed.unprocessed_lines, vec!["s off"]);
    }

    #[test]
    fn parse_should_silently_drop_malformed_records() {
        // A two-component vertex line is consumed by the vertex bucket and
        // then discarded; it must not resurface as an unprocessed line.
        let lines = lines_of(&["v 1 2", "v 1 2 3", "f 1 2"]);

        // Act
        let parsed = parse(&lines, &mut SilentProgress);

        // Assert
        assert_eq!(parsed.vertices.len(), 1);
        assert!(parsed.faces.is_empty());
        assert!(parsed.unprocessed_lines.is_empty());
    }

    #[test]
    fn parse_should_report_progress_while_building_faces() {
        // Arrange
        let lines = lines_of(&["v 0 0 0", "v 1 0 0", "v 0 1 0", "f 1 2 3", "f 1 3 2"]);
        let mut reporter = RecordingProgress { reports: Vec::new() };

        // Act
        parse(&lines, &mut reporter);

        // Assert
        assert_eq!(reporter.reports.len(), 2);
        assert_eq!(reporter.reports[0], ("Building model".to_string(), 0.0));
        assert_eq!(reporter.reports[1], ("Building model".to_string(), 50.0));
    }
}
