use rayon::prelude::*;

use crate::core::actions::generate_grid::sample_grid::SampleGrid;
use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::algorithm::has_escaped;

/// Grid points per block. Offsets inside a block must fit in a `u16`.
pub(crate) const BLOCK_LEN: usize = 4096;

/// Active points of one contiguous run of `BLOCK_LEN` grid indices.
///
/// Entry `i` of every array describes the same point: its offset from the
/// block's first grid index, its current iterate and its fixed coordinate.
/// Points never leave their block, so each block owns a disjoint slice of the
/// output field.
struct Block {
    offsets: Vec<u16>,
    z: Vec<Complex>,
    c: Vec<Complex>,
}

impl Block {
    fn new(c: &[Complex]) -> Self {
        debug_assert!(c.len() <= BLOCK_LEN);

        Self {
            offsets: (0..c.len()).map(|offset| offset as u16).collect(),
            z: c.to_vec(),
            c: c.to_vec(),
        }
    }

    fn len(&self) -> usize {
        self.offsets.len()
    }

    fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Escape test, removal and transform in a single sweep over the block.
    ///
    /// Survivors keep their relative order. Returns the number of points removed.
    fn run_round(&mut self, escape_value: u32, advance: bool, field: &mut [u32]) -> usize {
        let len = self.len();
        let mut kept = 0;

        for i in 0..len {
            let z = self.z[i];

            if has_escaped(z) {
                field[usize::from(self.offsets[i])] = escape_value;
                continue;
            }

            let c = self.c[i];
            if kept != i {
                self.offsets[kept] = self.offsets[i];
                self.c[kept] = c;
            }
            self.z[kept] = if advance { z.step(c) } else { z };
            kept += 1;
        }

        self.offsets.truncate(kept);
        self.z.truncate(kept);
        self.c.truncate(kept);

        len - kept
    }
}

/// Points that have not escaped yet, split into blocks that rayon works on
/// independently. Escaped points are compacted out of their block in place,
/// so the buffers never grow after construction.
pub(crate) struct WorkingSet {
    blocks: Vec<Block>,
    active: usize,
}

impl WorkingSet {
    pub(crate) fn from_grid(grid: &SampleGrid) -> Self {
        let c: Vec<Complex> = grid.points().collect();
        let blocks: Vec<Block> = c.par_chunks(BLOCK_LEN).map(Block::new).collect();

        Self {
            blocks,
            active: c.len(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.active
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Runs one round over every block: points whose iterate is outside the
    /// escape radius get `escape_value` written to `field` and are dropped,
    /// the rest are stepped with `z = z² + c` when `advance` is set.
    ///
    /// `field` is the full row-major output the set was built for. Returns the
    /// number of points removed.
    pub(crate) fn run_round(
        &mut self,
        escape_value: u32,
        advance: bool,
        field: &mut [u32],
    ) -> usize {
        let retired: usize = self
            .blocks
            .par_iter_mut()
            .zip(field.par_chunks_mut(BLOCK_LEN))
            .filter(|(block, _)| !block.is_empty())
            .map(|(block, out)| block.run_round(escape_value, advance, out))
            .sum();

        self.active -= retired;
        retired
    }
}
