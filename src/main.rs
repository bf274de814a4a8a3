use crate::model::Model;
use crate::progress::ConsoleProgress;
use std::path::Path;

mod array_builder;
mod bounds;
mod color;
mod model;
mod obj;
mod progress;

fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: objimport <file.obj>");
            std::process::exit(1);
        }
    };

    let mut progress = ConsoleProgress::new();
    let model = match Model::from_file_with_progress(Path::new(&path), &mut progress) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("Importing failed: {:?}", e);
            std::process::exit(1);
        }
    };

    println!("Imported {}", path);
    println!("Vertices: {}", model.vertex_count());
    println!("Vertex normals: {}", model.normal_count());
    println!("Texture vertices: {}", model.texture_vertex_count());
    println!("Faces: {}", model.face_count());
    println!("Triangles: {}", model.triangle_count());

    let bounds = model.local_bounding_box();
    println!(
        "Size: {} x {} x {}",
        bounds.width, bounds.height, bounds.depth
    );
    let center = model.local_bounding_box_center();
    println!("Center: ({}, {}, {})", center.x, center.y, center.z);

    if !model.comment_lines().is_empty() {
        println!("Comment lines:");
        for (number, line) in model.comment_lines().iter().enumerate() {
            println!("{}: {}", number + 1, line);
        }
    }

    if !model.unprocessed_lines().is_empty() {
        println!("Unprocessed lines:");
        for (number, line) in model.unprocessed_lines().iter().enumerate() {
            println!("{}: {}", number + 1, line);
        }
    }
}
