use simplex_core::{Grid2D, generate2d};

fn main() {
    // Fill a 16x16 grid with seed 2025, scale 0.1
    let (h, w) = (16, 16);
    let mut buf = vec![0.0f32; h * w];
    let mut grid = Grid2D::new(&mut buf, h, w);
    generate2d(2025, 0.1, &mut grid);

    // Print the whole field
    for r in 0..h {
        for c in 0..w {
            print!("{:>7.3} ", grid.get(r, c));
        }
        println!();
    }
}
