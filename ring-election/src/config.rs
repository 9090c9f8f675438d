mod error;

pub use error::ConfigError;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::identifiers::{self, NodeId};

pub const DEFAULT_RING_SIZE: usize = 20;

#[derive(Clone, Debug)]
pub struct Config {
    pub ring_size: usize,
    ids: Option<Vec<NodeId>>,
    seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_RING_SIZE)
    }
}

impl Config {
    pub fn new(ring_size: usize) -> Self {
        Self {
            ring_size,
            ids: None,
            seed: None,
        }
    }

    /// Places these identifiers on the ring in the given order instead of
    /// drawing a random permutation. The ring size follows the list.
    pub fn with_ids(mut self, ids: &[NodeId]) -> Self {
        self.ring_size = ids.len();
        self.ids = Some(ids.to_vec());

        self
    }

    pub fn with_ring_size(mut self, ring_size: usize) -> Self {
        self.ring_size = ring_size;
        self.ids = None;

        self
    }

    /// Makes the identifier permutation reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);

        self
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Identifiers in ring order, either the explicit ones or a fresh permutation
    /// of `0..ring_size`.
    pub fn get_ids(&self) -> Result<Vec<NodeId>, ConfigError> {
        match (&self.ids, self.seed) {
            (Some(ids), _) => {
                identifiers::validate_ids(ids)?;

                Ok(ids.clone())
            }
            (None, Some(seed)) => {
                identifiers::shuffled_ids_with_rng(self.ring_size, &mut StdRng::seed_from_u64(seed))
            }
            (None, None) => identifiers::shuffled_ids(self.ring_size),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.ids {
            Some(ids) => identifiers::validate_ids(ids),
            None => identifiers::validate_size(self.ring_size),
        }
    }
}
