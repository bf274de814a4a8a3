use crate::model::face::AttributeIndex;

/// Fan decomposition of an n-gon: triangle k is the corner triple
/// {0, k + 1, k + 2}, so every triangle shares the polygon's first corner.
pub struct FanTriangles {
    corner_count: usize,
    next: usize,
}

pub fn fan_triangles(corner_count: usize) -> FanTriangles {
    FanTriangles {
        corner_count,
        next: 0,
    }
}

impl Iterator for FanTriangles {
    type Item = (usize, usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next + 2 >= self.corner_count {
            return None;
        }

        let triangle = (0, self.next + 1, self.next + 2);
        self.next += 1;
        Some(triangle)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.corner_count.saturating_sub(self.next + 2);
        (remaining, Some(remaining))
    }
}

/// Appends one attribute's triangle-list floats for a single face.
///
/// Faces with fewer than three indices contribute nothing. An empty store
/// emits `default_vertex` for every corner, as does a "use default" index
/// against a populated store. A `Some` index outside the store is a caller
/// bug and panics.
pub fn append_face_triangles(
    indices: &[AttributeIndex],
    store: &[glm::Vec3],
    default_vertex: glm::Vec3,
    destination: &mut Vec<f32>,
) {
    if indices.len() < 3 {
        return;
    }

    for (a, b, c) in fan_triangles(indices.len()) {
        for &corner in &[a, b, c] {
            let vertex = resolve_vertex(indices[corner], store, default_vertex);
            destination.push(vertex.x);
            destination.push(vertex.y);
            destination.push(vertex.z);
        }
    }
}

fn resolve_vertex(
    index: AttributeIndex,
    store: &[glm::Vec3],
    default_vertex: glm::Vec3,
) -> glm::Vec3 {
    if store.is_empty() {
        return default_vertex;
    }

    match index {
        Some(position) => store[position],
        None => default_vertex,
    }
}
