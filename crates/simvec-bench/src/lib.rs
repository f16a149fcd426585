//! Benchmark workloads for the simvec container.
//!
//! Workloads are generated from a seeded [`ChaCha8Rng`] so every run
//! measures the same operation sequence.

#![forbid(unsafe_code)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use simvec::SimpleVector;

/// One step of a mixed insert/erase workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Insert `value` at `index % (size + 1)`.
    Insert { index: usize, value: u64 },
    /// Erase the element at `index % size` (skipped when empty).
    Erase { index: usize },
}

/// Deterministic mixed workload: roughly two inserts per erase.
pub fn edit_script(seed: u64, len: usize) -> Vec<Edit> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let index = rng.gen_range(0..usize::MAX);
            if rng.gen_range(0..3) < 2 {
                Edit::Insert {
                    index,
                    value: rng.gen(),
                }
            } else {
                Edit::Erase { index }
            }
        })
        .collect()
}

/// Apply `script` to `v`, returning the final size.
pub fn apply_script(v: &mut SimpleVector<u64>, script: &[Edit]) -> usize {
    for edit in script {
        match *edit {
            Edit::Insert { index, value } => {
                let at = index % (v.size() + 1);
                v.insert(v.begin() + at, value);
            }
            Edit::Erase { index } => {
                if !v.is_empty() {
                    let at = index % v.size();
                    v.erase(v.begin() + at);
                }
            }
        }
    }
    v.size()
}
