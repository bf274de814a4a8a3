use crate::array_builder::append_face_triangles;
use crate::bounds::Bounds;
use crate::color::{create_color_array, COMPONENTS_PER_COLOR};
use crate::obj;
use crate::obj::ImportResult;
use crate::progress::{ProgressReporter, SilentProgress};
use std::path::Path;

pub mod face;

use self::face::Face;

/// An imported polygon mesh: the parsed attribute stores, the faces that
/// index them, and the flat triangle-list arrays derived from both.
///
/// The flat arrays and the bounding box are pure projections of the stores;
/// they are rebuilt wholesale after any mutation, never patched in place.
pub struct Model {
    vertices: Vec<glm::Vec3>,
    normals: Vec<glm::Vec3>,
    textures: Vec<glm::Vec3>,
    faces: Vec<Face>,

    vertex_array: Vec<f32>,
    normal_array: Vec<f32>,
    texture_array: Vec<f32>,
    color_array: Vec<f32>,

    bounds: Bounds,

    comment_lines: Vec<String>,
    unprocessed_lines: Vec<String>,
}

impl Model {
    /// Imports a .obj file. Only an unopenable or unreadable file fails;
    /// malformed records inside the file are dropped silently.
    pub fn from_file(path: &Path) -> ImportResult<Model> {
        Model::from_file_with_progress(path, &mut SilentProgress)
    }

    pub fn from_file_with_progress(
        path: &Path,
        reporter: &mut dyn ProgressReporter,
    ) -> ImportResult<Model> {
        let lines = obj::read_lines(path, reporter)?;
        Ok(Model::from_lines(&lines, reporter))
    }

    /// Builds a model from in-memory .obj text. No I/O, cannot fail.
    pub fn from_text(text: &str) -> Model {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        Model::from_lines(&lines, &mut SilentProgress)
    }

    fn from_lines(lines: &[String], reporter: &mut dyn ProgressReporter) -> Model {
        let parsed = obj::parse(lines, reporter);

        let mut model = Model {
            vertices: parsed.vertices,
            normals: parsed.normals,
            textures: parsed.textures,
            faces: parsed.faces,
            vertex_array: Vec::new(),
            normal_array: Vec::new(),
            texture_array: Vec::new(),
            color_array: Vec::new(),
            bounds: Bounds::default(),
            comment_lines: parsed.comment_lines,
            unprocessed_lines: parsed.unprocessed_lines,
        };
        model.refresh_data();
        model
    }

    /// Rebuilds every flat array from the stores and recomputes the bounding
    /// box. The color array is kept as long as the triangle count is
    /// unchanged, so repeated rebuilds keep their colors.
    pub fn refresh_data(&mut self) {
        self.vertex_array.clear();
        self.normal_array.clear();
        self.texture_array.clear();

        for face in &self.faces {
            append_face_triangles(
                &face.vertex_indices,
                &self.vertices,
                glm::vec3(0.0, 0.0, 0.0),
                &mut self.vertex_array,
            );
            append_face_triangles(
                &face.normal_indices,
                &self.normals,
                glm::vec3(0.0, 0.0, 1.0),
                &mut self.normal_array,
            );
            append_face_triangles(
                &face.texture_indices,
                &self.textures,
                glm::vec3(0.0, 0.0, 0.0),
                &mut self.texture_array,
            );
        }

        let color_length = self.triangle_count() * 3 * COMPONENTS_PER_COLOR;
        if self.color_array.len() != color_length {
            self.randomize_colors();
        }

        self.refresh_bounds();
    }

    /// Uniformly scales every stored vertex, then rebuilds all derived data.
    /// The rebuild walks every vertex and face, which makes this a batch
    /// operation rather than something to run per animation frame.
    pub fn scale(&mut self, factor: f32) {
        for vertex in &mut self.vertices {
            vertex.x *= factor;
            vertex.y *= factor;
            vertex.z *= factor;
        }
        self.refresh_data();
    }

    /// Re-rolls the random triangle colors.
    pub fn randomize_colors(&mut self) {
        self.color_array = create_color_array(self.triangle_count(), &mut rand::thread_rng());
    }

    /// Replaces vertex `number` and recomputes the bounding box. Panics when
    /// `number` is out of range.
    pub fn set_vertex(&mut self, number: usize, vertex: glm::Vec3) {
        self.vertices[number] = vertex;
        self.refresh_bounds();
    }

    /// Replaces vertex normal `number`. Normals carry no spatial extent, so
    /// the bounding box is left alone. Panics when `number` is out of range.
    pub fn set_vertex_normal(&mut self, number: usize, normal: glm::Vec3) {
        self.normals[number] = normal;
    }

    /// Replaces texture vertex `number`. Panics when `number` is out of range.
    pub fn set_texture_vertex(&mut self, number: usize, texture_vertex: glm::Vec3) {
        self.textures[number] = texture_vertex;
    }

    /// Replaces face `number` and recomputes the bounding box. Panics when
    /// `number` is out of range.
    pub fn set_face(&mut self, number: usize, face: Face) {
        self.faces[number] = face;
        self.refresh_bounds();
    }

    pub fn vertex(&self, number: usize) -> glm::Vec3 {
        self.vertices[number]
    }

    pub fn vertex_normal(&self, number: usize) -> glm::Vec3 {
        self.normals[number]
    }

    pub fn texture_vertex(&self, number: usize) -> glm::Vec3 {
        self.textures[number]
    }

    pub fn face(&self, number: usize) -> Face {
        self.faces[number].clone()
    }

    pub fn all_vertices(&self) -> Vec<glm::Vec3> {
        self.vertices.clone()
    }

    pub fn all_vertex_normals(&self) -> Vec<glm::Vec3> {
        self.normals.clone()
    }

    pub fn all_texture_vertices(&self) -> Vec<glm::Vec3> {
        self.textures.clone()
    }

    pub fn all_faces(&self) -> Vec<Face> {
        self.faces.clone()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn texture_vertex_count(&self) -> usize {
        self.textures.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertex_array.len() / 9
    }

    /// Flat position array: three floats per vertex, three vertices per
    /// triangle. Valid until the next mutating call.
    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_array
    }

    /// Flat normal array, same layout as `vertex_data`.
    pub fn normal_data(&self) -> &[f32] {
        &self.normal_array
    }

    /// Flat texture coordinate array, same layout as `vertex_data`.
    pub fn texture_data(&self) -> &[f32] {
        &self.texture_array
    }

    /// Flat RGBA array: four floats per vertex, three vertices per triangle.
    pub fn color_data(&self) -> &[f32] {
        &self.color_array
    }

    pub fn local_bounding_box(&self) -> Bounds {
        self.bounds
    }

    pub fn local_bounding_box_center(&self) -> glm::Vec3 {
        self.bounds.center()
    }

    pub fn comment_lines(&self) -> &[String] {
        &self.comment_lines
    }

    pub fn unprocessed_lines(&self) -> &[String] {
        &self.unprocessed_lines
    }

    fn refresh_bounds(&mut self) {
        // An empty vertex store has no extents; fall back to the zeroed box.
        self.bounds = Bounds::of(&self.vertices).unwrap_or_default();
    }
}
