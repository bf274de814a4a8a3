/// Index into one of the model's attribute stores. `None` means the source
/// record supplied no index for this corner and the attribute's default value
/// is used instead.
pub type AttributeIndex = Option<usize>;

/// A polygon record: three parallel index lists, one per attribute, all
/// zero-based and always of equal length once parsing has finished.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Face {
    pub vertex_indices: Vec<AttributeIndex>,
    pub normal_indices: Vec<AttributeIndex>,
    pub texture_indices: Vec<AttributeIndex>,
}

impl Face {
    pub fn new(
        vertex_indices: Vec<AttributeIndex>,
        normal_indices: Vec<AttributeIndex>,
        texture_indices: Vec<AttributeIndex>,
    ) -> Self {
        Face {
            vertex_indices,
            normal_indices,
            texture_indices,
        }
    }
}
