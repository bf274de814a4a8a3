use rand::Rng;

pub const COMPONENTS_PER_COLOR: usize = 4;

/// One random RGBA color per triangle, replicated across its three corners.
/// Components land in [0.25, 0.75); alpha is fixed at 1. Purely a viewing
/// aid for untextured, unlit geometry.
pub fn create_color_array<R: Rng>(triangle_count: usize, rng: &mut R) -> Vec<f32> {
    let mut colors = Vec::with_capacity(triangle_count * 3 * COMPONENTS_PER_COLOR);

    for _ in 0..triangle_count {
        let red = rng.gen_range(0.25f32..0.75);
        let green = rng.gen_range(0.25f32..0.75);
        let blue = rng.gen_range(0.25f32..0.75);
        for _ in 0..3 {
            colors.push(red);
            colors.push(green);
            colors.push(blue);
            colors.push(1.0);
        }
    }

    colors
}
