//! The identifier pool: unique, randomly ordered identifiers for ring members.
use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ConfigError;

/// Identifies a node on the ring. Assigned once at node creation.
pub type NodeId = u32;

/// A uniformly shuffled permutation of `0..size`.
///
/// ```
/// let mut ids = ring_election::identifiers::shuffled_ids(12).unwrap();
/// ids.sort_unstable();
///
/// assert_eq!(ids, (0..12).collect::<Vec<_>>());
/// ```
pub fn shuffled_ids(size: usize) -> Result<Vec<NodeId>, ConfigError> {
    shuffled_ids_with_rng(size, &mut rand::thread_rng())
}

pub fn shuffled_ids_with_rng<R: Rng + ?Sized>(
    size: usize,
    rng: &mut R,
) -> Result<Vec<NodeId>, ConfigError> {
    validate_size(size)?;

    let mut ids: Vec<NodeId> = (0..size as NodeId).collect();
    ids.shuffle(rng);

    Ok(ids)
}

pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 {
        Err(ConfigError::EmptyRing)
    } else if NodeId::try_from(size).is_err() {
        Err(ConfigError::RingTooLarge(size))
    } else {
        Ok(())
    }
}

/// Rejects empty lists and reports the first identifier seen twice.
pub fn validate_ids(ids: &[NodeId]) -> Result<(), ConfigError> {
    if ids.is_empty() {
        return Err(ConfigError::EmptyRing);
    }

    let mut seen = HashSet::with_capacity(ids.len());

    match ids.iter().find(|id| !seen.insert(**id)) {
        Some(duplicate) => Err(ConfigError::DuplicateIdentifier(*duplicate)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn covers_the_whole_range_without_duplicates() {
        for size in [1, 2, 5, 20, 257] {
            let mut ids = shuffled_ids(size).unwrap();
            ids.sort_unstable();

            assert_eq!(ids, (0..size as NodeId).collect::<Vec<_>>());
        }
    }

    #[test]
    fn rejects_an_empty_pool() {
        assert_eq!(shuffled_ids(0), Err(ConfigError::EmptyRing));
    }

    #[test]
    fn same_seed_same_order() {
        let first = shuffled_ids_with_rng(30, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = shuffled_ids_with_rng(30, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn finds_the_first_duplicate() {
        assert_eq!(validate_ids(&[3, 1, 4, 1, 5, 5]), Err(ConfigError::DuplicateIdentifier(1)));
        assert_eq!(validate_ids(&[3, 7, 2, 9, 5]), Ok(()));
    }
}
