//! Random lattice points ordered along a Hilbert curve
//!
//! This is the producer side of the viewers: its output is exactly the
//! whitespace-separated integer format `make-image-2d` and `make-image-3d`
//! read, and consecutive points are lattice neighbours whenever the lattice
//! is fully populated.

use crate::types::{Point, PointSequence};
use hplot_common::{ensure_field, Result};
use hplot_config::HilbertConfig;
use std::io::Write;
use tracing::{debug, info};

pub use fastrand::Rng;

/// Hilbert curve over a `dims`-dimensional lattice with `2^order` cells per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HilbertCurve {
    dims: usize,
    order: u32,
}

impl HilbertCurve {
    /// Coordinates are `u32`, so `order <= 32`, and the index must fit in 64
    /// bits: `dims * order <= 64`
    pub fn new(dims: usize, order: u32) -> Result<Self> {
        ensure_field!(dims > 0, "dims", "At least one dimension is required");
        ensure_field!(
            (1..=32).contains(&order),
            "order",
            "Hilbert order must be between 1 and 32, got {}",
            order
        );
        let bits = dims as u64 * order as u64;
        ensure_field!(
            bits <= 64,
            "order",
            "{} dimensions at order {} need {} bits, more than 64",
            dims,
            order,
            bits
        );
        Ok(Self { dims, order })
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// Largest coordinate value on each axis
    pub fn max_coord(&self) -> u32 {
        u32::MAX >> (32 - self.order)
    }

    /// Total number of lattice cells, `2^(dims * order)`
    pub fn capacity(&self) -> u128 {
        1u128 << (self.dims as u32 * self.order)
    }

    /// Position of `coords` along the curve
    ///
    /// Uses Skilling's transpose form: undo the excess rotations, Gray-encode,
    /// then interleave bits with axis 0 most significant.
    pub fn distance(&self, coords: &[u32]) -> u64 {
        debug_assert_eq!(coords.len(), self.dims);
        debug_assert!(coords.iter().all(|&c| c <= self.max_coord()));

        let mut x = coords.to_vec();
        let n = x.len();
        let m: u32 = 1 << (self.order - 1);

        let mut q = m;
        while q > 1 {
            let p = q - 1;
            for i in 0..n {
                if x[i] & q != 0 {
                    x[0] ^= p;
                } else {
                    let t = (x[0] ^ x[i]) & p;
                    x[0] ^= t;
                    x[i] ^= t;
                }
            }
            q >>= 1;
        }

        for i in 1..n {
            x[i] ^= x[i - 1];
        }
        let mut t = 0;
        let mut q = m;
        while q > 1 {
            if x[n - 1] & q != 0 {
                t ^= q - 1;
            }
            q >>= 1;
        }
        for xi in x.iter_mut() {
            *xi ^= t;
        }

        let mut h: u64 = 0;
        for bit in (0..self.order).rev() {
            for xi in &x {
                h = (h << 1) | u64::from((xi >> bit) & 1);
            }
        }
        h
    }

    /// `npoints` uniformly random lattice points; duplicates are possible
    pub fn random_lattice<const N: usize>(&self, npoints: usize, rng: &mut Rng) -> Vec<[u32; N]> {
        debug_assert_eq!(N, self.dims);
        let max = self.max_coord();
        (0..npoints)
            .map(|_| std::array::from_fn(|_| rng.u32(..=max)))
            .collect()
    }

    /// Stable sort by curve position
    pub fn sort<const N: usize>(&self, points: &mut [[u32; N]]) {
        points.sort_by_cached_key(|p| self.distance(p));
    }

    /// Random points sorted along the curve
    pub fn generate<const N: usize>(&self, npoints: usize, rng: &mut Rng) -> Result<PointSequence<N>> {
        ensure_field!(
            N == self.dims,
            "dims",
            "curve has {} dimensions, points have {}",
            self.dims,
            N
        );
        ensure_field!(
            npoints as u128 <= self.capacity(),
            "npoints",
            "{} points exceed the {} cells of the lattice",
            npoints,
            self.capacity()
        );

        let mut lattice = self.random_lattice::<N>(npoints, rng);
        self.sort(&mut lattice);
        debug!(npoints, dims = N, order = self.order, "Generated Hilbert-ordered points");

        Ok(lattice
            .into_iter()
            .map(|coords| Point::new(coords.map(i64::from)))
            .collect())
    }
}

/// Random generator seeded from config, or from entropy when no seed is set
pub fn rng_from_config(config: &HilbertConfig) -> Rng {
    match config.seed {
        Some(seed) => Rng::with_seed(seed),
        None => Rng::new(),
    }
}

/// Write one point per line, coordinates separated by single spaces
pub fn write_points<const N: usize, W: Write>(points: &PointSequence<N>, mut out: W) -> Result<()> {
    for point in points {
        writeln!(out, "{}", point)?;
    }
    out.flush()?;
    info!(points = points.len(), "Wrote points");
    Ok(())
}
