use image::{GrayImage, Luma};
use simplex_core::{Grid2D, generate2d};
use std::path::Path;

// Render a noise field to a grayscale PNG so parameter choices can be
// eyeballed quickly
fn save_field(seed: u32, scale: f64, size: usize, filename: &str) {
    let mut buf = vec![0.0f32; size * size];
    let mut grid = Grid2D::new(&mut buf, size, size);
    generate2d(seed, scale, &mut grid);

    // Map the documented (-1, 1) range onto [0, 255]
    let mut img = GrayImage::new(size as u32, size as u32);
    for r in 0..size {
        for c in 0..size {
            let v = grid.get(r, c) as f64;
            let gray = ((v + 1.0) * 0.5 * 255.0).round().clamp(0.0, 255.0) as u8;
            img.put_pixel(c as u32, r as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    save_field(42, 0.01, 512, "simplex_seed42_fine.png");
    save_field(42, 0.05, 512, "simplex_seed42_coarse.png");
    save_field(7, 0.01, 512, "simplex_seed7_fine.png");
}
