use crate::permutation::PermutationTable;

// 2D Simplex noise evaluator
// Based on Ken Perlin's simplex algorithm: space is divided into equilateral
// triangles rather than squares, which gives better isotropy and only three
// corner contributions per sample

// Approximate value of sqrt(3)
const SQRT_3: f64 = 1.732_050_807_568_877_293_5;
// Skew factor: compresses the unit square into a rhombus of two equilateral triangles
const F2: f64 = 0.5 * (SQRT_3 - 1.0);
// Unskew factor: reverses the skewing back to input space
const G2: f64 = (3.0 - SQRT_3) / 6.0;

// Scales the summed corner contributions into the documented output range.
// Pinned at 70.0: with the gradient set below the output stays strictly
// inside (-1, 1). Changing it would invalidate every recorded field.
const OUTPUT_SCALE: f64 = 70.0;

// Twelve gradient directions; the hash below selects one per lattice corner
const GRAD2: [(i8, i8); 12] = [
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

pub struct Simplex2D {
    perm: PermutationTable,
}

impl Simplex2D {
    // Build the evaluator with a fresh table from the seed
    pub fn new(seed: u32) -> Self {
        Self {
            perm: PermutationTable::new(seed),
        }
    }

    // Wrap an already-constructed table
    pub fn with_table(perm: PermutationTable) -> Self {
        Self { perm }
    }

    pub fn table(&self) -> &PermutationTable {
        &self.perm
    }

    #[inline]
    fn dot(g: (i8, i8), x: f64, y: f64) -> f64 {
        (g.0 as f64) * x + (g.1 as f64) * y
    }

    // Single-sample 2D simplex noise at (xin, yin)
    // Pure: same table and coordinates always give the identical value;
    // no allocation, the table is only read
    pub fn noise2(&self, xin: f64, yin: f64) -> f64 {
        // Skew the input to find which simplex cell we are in
        let s = (xin + yin) * F2;
        let i = (xin + s).floor() as i32;
        let j = (yin + s).floor() as i32;

        // Unskew the cell origin and take the offset from it
        let t = (i + j) as f64 * G2;
        let x0 = xin - (i as f64 - t);
        let y0 = yin - (j as f64 - t);

        // Lower triangle (1,0) or upper triangle (0,1) of the skewed square
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        // Offsets of the middle and far corners in unskewed space
        let x1 = x0 - i1 as f64 + G2;
        let y1 = y0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        // Hash the three corners; the double lookup mixes both lattice axes
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let gi0 = self.perm.get(ii + self.perm.get(jj) as usize) as usize % 12;
        let gi1 = self.perm.get(ii + i1 + self.perm.get(jj + j1) as usize) as usize % 12;
        let gi2 = self.perm.get(ii + 1 + self.perm.get(jj + 1) as usize) as usize % 12;

        // Radial falloff per corner: zero outside the influence circle,
        // (0.5 - d^2)^4 * (grad . d) inside, so each contribution fades out
        // smoothly and the field stays continuous across simplex boundaries
        let mut n0 = 0.0;
        let t0 = 0.5 - x0 * x0 - y0 * y0;
        if t0 > 0.0 {
            let t0_sq = t0 * t0;
            n0 = t0_sq * t0_sq * Self::dot(GRAD2[gi0], x0, y0);
        }
        let mut n1 = 0.0;
        let t1 = 0.5 - x1 * x1 - y1 * y1;
        if t1 > 0.0 {
            let t1_sq = t1 * t1;
            n1 = t1_sq * t1_sq * Self::dot(GRAD2[gi1], x1, y1);
        }
        let mut n2 = 0.0;
        let t2 = 0.5 - x2 * x2 - y2 * y2;
        if t2 > 0.0 {
            let t2_sq = t2 * t2;
            n2 = t2_sq * t2_sq * Self::dot(GRAD2[gi2], x2, y2);
        }

        OUTPUT_SCALE * (n0 + n1 + n2)
    }
}
