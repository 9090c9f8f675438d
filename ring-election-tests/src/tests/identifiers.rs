#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ring_election::identifiers::{shuffled_ids, shuffled_ids_with_rng};
    use ring_election::NodeId;

    use crate::factory;

    #[test]
    pub fn pool_is_a_permutation() {
        for size in 1..=50 {
            let mut ids = shuffled_ids(size).unwrap();
            ids.sort_unstable();

            assert_eq!(ids, (0..size as NodeId).collect::<Vec<_>>());
        }
    }

    #[test]
    pub fn pool_order_varies_between_seeds() {
        let orders: Vec<_> = (0..8)
            .map(|seed| shuffled_ids_with_rng(40, &mut StdRng::seed_from_u64(seed)).unwrap())
            .collect();

        assert!(orders.windows(2).any(|pair| pair[0] != pair[1]));
    }

    #[test]
    pub fn seeded_configs_are_reproducible() {
        let config = factory::seeded_config(33, 99);

        assert_eq!(config.get_ids().unwrap(), config.get_ids().unwrap());
    }
}
