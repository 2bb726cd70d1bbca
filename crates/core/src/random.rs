use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

pub(crate) fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Picks one element; `None` only for an empty slice.
pub(crate) fn choose<'a, T>(rng: &mut ChaCha8Rng, slice: &'a [T]) -> Option<&'a T> {
    if slice.is_empty() {
        return None;
    }
    let p = rng.next_u64() as usize % slice.len();
    slice.get(p)
}
