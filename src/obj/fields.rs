use crate::model::face::Face;

/// Parses a vertex or normal payload. Exactly three space-separated float
/// tokens are accepted; anything else rejects the record.
pub fn parse_vertex_fields(payload: &str) -> Option<glm::Vec3> {
    let tokens: Vec<&str> = payload.split(' ').collect();
    if tokens.len() != 3 {
        return None;
    }

    let x = tokens[0].parse::<f32>().ok()?;
    let y = tokens[1].parse::<f32>().ok()?;
    let z = tokens[2].parse::<f32>().ok()?;

    Some(glm::vec3(x, y, z))
}

/// Parses a texture vertex payload. One to three tokens are accepted; missing
/// trailing coordinates default to zero.
pub fn parse_texture_fields(payload: &str) -> Option<glm::Vec3> {
    let mut tokens: Vec<&str> = payload.split(' ').collect();
    if tokens.is_empty() || tokens.len() > 3 {
        return None;
    }
    while tokens.len() < 3 {
        tokens.push("0");
    }

    let u = tokens[0].parse::<f32>().ok()?;
    let v = tokens[1].parse::<f32>().ok()?;
    let w = tokens[2].parse::<f32>().ok()?;

    Some(glm::vec3(u, v, w))
}

/// Parses a face payload of three or four tokens, each token holding up to
/// three slash-separated indices (vertex/texture/normal, one-based).
///
/// Texture and normal indices are optional. If either attribute was not
/// supplied for every token, that attribute's whole index list is replaced by
/// "use default" entries, so the three lists always come out the same length.
pub fn parse_face_fields(payload: &str) -> Option<Face> {
    let tokens: Vec<&str> = payload.split(' ').collect();
    if tokens.len() < 3 || tokens.len() > 4 {
        return None;
    }

    let mut face = Face::default();
    for token in tokens {
        let mut segments = token.split('/');

        let vertex_index = match parse_index(segments.next().unwrap_or(""))? {
            Some(index) => index,
            None => return None, // a face token without a vertex index is meaningless
        };
        face.vertex_indices.push(Some(vertex_index));

        if let Some(segment) = segments.next() {
            if let Some(index) = parse_index(segment)? {
                face.texture_indices.push(Some(index));
            }
        }
        if let Some(segment) = segments.next() {
            if let Some(index) = parse_index(segment)? {
                face.normal_indices.push(Some(index));
            }
        }
    }

    if face.texture_indices.len() != face.vertex_indices.len() {
        face.texture_indices = vec![None; face.vertex_indices.len()];
    }
    if face.normal_indices.len() != face.vertex_indices.len() {
        face.normal_indices = vec![None; face.vertex_indices.len()];
    }

    Some(face)
}

/// Converts one slash-separated segment to a zero-based index.
///
/// Outer `None` means the segment was malformed and the whole record must be
/// dropped. Inner `None` means the segment was empty, i.e. the attribute was
/// simply not supplied (as in `1//2`). Indices below one (zero or relative)
/// are unsupported and reject the record.
fn parse_index(segment: &str) -> Option<Option<usize>> {
    if segment.is_empty() {
        return Some(None);
    }

    let value = segment.parse::<i64>().ok()?;
    if value < 1 {
        return None;
    }

    Some(Some(value as usize - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_vertex_fields_should_return_the_parsed_floats() {
        // Act
        let vertex = parse_vertex_fields("1 2.5 -3").unwrap();

        // Assert
        assert_eq!(vertex.x, 1.0);
        assert_eq!(vertex.y, 2.5);
        assert_eq!(vertex.z, -3.0);
    }

    #[test]
    fn parse_vertex_fields_should_drop_records_with_too_few_tokens() {
        assert!(parse_vertex_fields("1 2").is_none());
    }

    #[test]
    fn parse_vertex_fields_should_drop_records_with_too_many_tokens() {
        assert!(parse_vertex_fields("1 2 3 4").is_none());
    }

    #[test]
    fn parse_vertex_fields_should_drop_records_with_non_numeric_tokens() {
        assert!(parse_vertex_fields("1 x 3").is_none());
    }

    #[test]
    fn parse_vertex_fields_should_drop_records_with_doubled_separators() {
        // A doubled space yields an empty token, making four tokens in total.
        assert!(parse_vertex_fields("1  2 3").is_none());
    }

    #[test]
    fn parse_texture_fields_should_default_missing_coordinates_to_zero() {
        // Act
        let one = parse_texture_fields("0.5").unwrap();
        let two = parse_texture_fields("0.5 0.25").unwrap();

        // Assert
        assert_eq!((one.x, one.y, one.z), (0.5, 0.0, 0.0));
        assert_eq!((two.x, two.y, two.z), (0.5, 0.25, 0.0));
    }

    #[test]
    fn parse_texture_fields_should_drop_records_with_too_many_tokens() {
        assert!(parse_texture_fields("1 2 3 4").is_none());
    }

    #[test]
    fn parse_face_fields_should_parse_a_plain_triangle_and_pad_the_other_attributes() {
        // Act
        let face = parse_face_fields("1 2 3").unwrap();

        // Assert
        assert_eq!(face.vertex_indices, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(face.texture_indices, vec![None, None, None]);
        assert_eq!(face.normal_indices, vec![None, None, None]);
    }

    #[test]
    fn parse_face_fields_should_read_vertex_texture_and_normal_segments() {
        // Act
        let face = parse_face_fields("1/4/7 2/5/8 3/6/9").unwrap();

        // Assert
        assert_eq!(face.vertex_indices, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(face.texture_indices, vec![Some(3), Some(4), Some(5)]);
        assert_eq!(face.normal_indices, vec![Some(6), Some(7), Some(8)]);
    }

    #[test]
    fn parse_face_fields_should_treat_empty_segments_as_not_supplied() {
        // Act
        let face = parse_face_fields("1//4 2//5 3//6").unwrap();

        // Assert
        assert_eq!(face.texture_indices, vec![None, None, None]);
        assert_eq!(face.normal_indices, vec![Some(3), Some(4), Some(5)]);
    }

    #[test]
    fn parse_face_fields_should_pad_uniformly_when_an_attribute_is_only_partially_supplied() {
        // Only two of three tokens carry a texture index; the supplied ones
        // are discarded along with the gap.
        let face = parse_face_fields("1/4 2 3/6").unwrap();

        assert_eq!(face.vertex_indices, vec![Some(0), Some(1), Some(2)]);
        assert_eq!(face.texture_indices, vec![None, None, None]);
    }

    #[test]
    fn parse_face_fields_should_accept_quads() {
        // Act
        let face = parse_face_fields("1 2 3 4").unwrap();

        // Assert
        assert_eq!(
            face.vertex_indices,
            vec![Some(0), Some(1), Some(2), Some(3)]
        );
        assert_eq!(face.normal_indices.len(), 4);
        assert_eq!(face.texture_indices.len(), 4);
    }

    #[test]
    fn parse_face_fields_should_drop_records_with_out_of_range_token_counts() {
        assert!(parse_face_fields("1 2").is_none());
        assert!(parse_face_fields("1 2 3 4 5").is_none());
    }

    #[test]
    fn parse_face_fields_should_drop_records_with_zero_or_negative_indices() {
        assert!(parse_face_fields("0 2 3").is_none());
        assert!(parse_face_fields("-1 -2 -3").is_none());
    }

    #[test]
    fn parse_face_fields_should_drop_records_with_malformed_segments() {
        assert!(parse_face_fields("1/x/2 2 3").is_none());
        assert!(parse_face_fields("/1/2 2 3").is_none());
    }
}
