use num::Float;

/// Axis-aligned extents of the vertex store, with the derived size cached
/// alongside. The z axis grows toward the viewer, so `front` is the maximum z
/// and `back` the minimum.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
    pub front: f32,
    pub back: f32,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Bounds {
    /// Per-axis min/max over a vertex set. An empty set has no extents.
    pub fn of(vertices: &[glm::Vec3]) -> Option<Bounds> {
        if vertices.is_empty() {
            return None;
        }

        let mut left = f32::max_value();
        let mut right = f32::min_value();
        let mut bottom = f32::max_value();
        let mut top = f32::min_value();
        let mut back = f32::max_value();
        let mut front = f32::min_value();

        for vertex in vertices {
            if vertex.x < left {
                left = vertex.x;
            }
            if vertex.x > right {
                right = vertex.x;
            }
            if vertex.y < bottom {
                bottom = vertex.y;
            }
            if vertex.y > top {
                top = vertex.y;
            }
            if vertex.z < back {
                back = vertex.z;
            }
            if vertex.z > front {
                front = vertex.z;
            }
        }

        Some(Bounds {
            left,
            right,
            top,
            bottom,
            front,
            back,
            width: right - left,
            height: top - bottom,
            depth: front - back,
        })
    }

    pub fn center(&self) -> glm::Vec3 {
        glm::vec3(
            self.left + self.width / 2.0,
            self.bottom + self.height / 2.0,
            self.back + self.depth / 2.0,
        )
    }
}
