// simplex-core holds the seedable 2D simplex noise field generator:
// MT19937-seeded permutation table, single-sample evaluator, and the
// grid fill that writes a field into a caller-owned buffer
pub mod grid;
pub mod mt19937;
pub mod permutation;
pub mod simplex2;

pub use grid::{Grid2D, fill2, par_fill2};
pub use permutation::PermutationTable;
pub use simplex2::Simplex2D;

// One-shot entry point mirroring the classic generate2d call:
// a fresh table is built from the seed for every invocation, so independent
// calls are independently reproducible and share no state
pub fn generate2d(seed: u32, scale: f64, grid: &mut Grid2D) {
    let noise = Simplex2D::new(seed);
    par_fill2(&noise, scale, grid);
}
