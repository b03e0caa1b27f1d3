use crate::mt19937::Mt19937;

// Seeded permutation table backing the gradient hash
// 256 entries shuffled once, then duplicated to 512 so the double lookup
// perm[i + perm[j]] never needs a bounds mask in the hot path
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    // Build a table from a single u32 seed; identical seed gives a
    // bit-identical table on every platform
    pub fn new(seed: u32) -> Self {
        let mut p: Vec<u8> = (0..256).map(|i| i as u8).collect();

        // Fresh generator per table, so independent calls never share state
        let mut rng = Mt19937::new(seed);

        // Fisher–Yates shuffle p[0..256]
        for i in (1..256).rev() {
            // mod (i + 1) constrains j to [0..i]
            let j = rng.next_u32() as usize % (i + 1);
            p.swap(i, j);
        }

        // Duplicate into 512 entries instead of masking on every lookup
        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
        }

        Self { perm }
    }

    // Raw lookup; valid for any idx in [0, 512)
    #[inline]
    pub fn get(&self, idx: usize) -> u8 {
        self.perm[idx]
    }

    // The underlying 256-entry permutation (first half of the table)
    pub fn base(&self) -> &[u8] {
        &self.perm[..256]
    }
}
