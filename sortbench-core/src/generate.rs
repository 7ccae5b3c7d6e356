//! Synthetic Data Generators
//!
//! Each generator produces an array of a requested cardinality with a known
//! statistical shape. The RNG is injected by the caller so runs can be seeded
//! deterministically under test.

use rand::Rng;

/// Upper bound (inclusive) for generated element values.
pub const MAX_VALUE: u32 = 100_000;

/// Input shape under test.
///
/// The variant name doubles as the mapping key and chart label, so the set is
/// a closed enum rather than a registry of callables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Uniform-random array.
    FullRand,
    /// 95%-sorted array with the remainder spliced in at random positions.
    QuasiSorted,
    /// Concatenation of two independently sorted halves.
    ToMerge,
    /// Random array sorted descending.
    RevSorted,
}

impl GeneratorKind {
    /// All generators, in display order.
    pub const ALL: [GeneratorKind; 4] = [
        GeneratorKind::FullRand,
        GeneratorKind::QuasiSorted,
        GeneratorKind::ToMerge,
        GeneratorKind::RevSorted,
    ];

    /// Short name used in labels and log output.
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::FullRand => "fullrand",
            GeneratorKind::QuasiSorted => "quasi_sorted",
            GeneratorKind::ToMerge => "tomerge",
            GeneratorKind::RevSorted => "revsorted",
        }
    }

    /// Produce a fresh array of exactly `cardinality` elements in
    /// `[0, MAX_VALUE]`. `cardinality = 0` yields an empty array.
    pub fn generate<R: Rng>(&self, rng: &mut R, cardinality: usize) -> Vec<u32> {
        match self {
            GeneratorKind::FullRand => fullrand(rng, cardinality),
            GeneratorKind::QuasiSorted => quasi_sorted(rng, cardinality),
            GeneratorKind::ToMerge => tomerge(rng, cardinality),
            GeneratorKind::RevSorted => revsorted(rng, cardinality),
        }
    }
}

fn fullrand<R: Rng>(rng: &mut R, cardinality: usize) -> Vec<u32> {
    (0..cardinality).map(|_| rng.gen_range(0..=MAX_VALUE)).collect()
}

/// 95% of elements (truncating) sorted ascending, the rest inserted at
/// uniformly random positions with uniformly random values.
fn quasi_sorted<R: Rng>(rng: &mut R, cardinality: usize) -> Vec<u32> {
    let base_cardinality = cardinality * 95 / 100;

    let mut out = fullrand(rng, base_cardinality);
    out.sort_unstable();

    for _ in base_cardinality..cardinality {
        let value = rng.gen_range(0..=MAX_VALUE);
        let position = rng.gen_range(0..=out.len());
        out.insert(position, value);
    }

    out
}

/// Two sorted halves back to back. Odd cardinalities give the extra element
/// to the second half.
fn tomerge<R: Rng>(rng: &mut R, cardinality: usize) -> Vec<u32> {
    let left_cardinality = cardinality / 2;
    let right_cardinality = cardinality - left_cardinality;

    let mut out = fullrand(rng, left_cardinality);
    out.sort_unstable();

    let mut right = fullrand(rng, right_cardinality);
    right.sort_unstable();

    out.extend(right);
    out
}

fn revsorted<R: Rng>(rng: &mut R, cardinality: usize) -> Vec<u32> {
    let mut out = fullrand(rng, cardinality);
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}
