use rand::Rng;
use ring_election::Config;

pub fn seeded_config(ring_size: usize, seed: u64) -> Config {
    Config::new(ring_size).with_seed(seed)
}

pub fn random_config(max_ring_size: usize) -> Config {
    Config::new(rand::thread_rng().gen_range(1..=max_ring_size))
}

/// Sparse identifiers: unique, but not a permutation of `0..n`.
pub fn sparse_ids_config(ring_size: usize) -> Config {
    let mut rng = rand::thread_rng();
    let mut ids: Vec<u32> = Vec::with_capacity(ring_size);

    while ids.len() < ring_size {
        let id = rng.gen_range(0..1_000_000);
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    Config::new(ring_size).with_ids(&ids)
}
