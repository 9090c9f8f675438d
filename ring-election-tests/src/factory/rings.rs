use ring_election::{NodeId, Ring};

pub const SINGLE_NODE_IDS: [NodeId; 1] = [0];
pub const PAIR_IDS: [NodeId; 2] = [5, 9];
pub const SCENARIO_IDS: [NodeId; 5] = [3, 7, 2, 9, 5];
pub const DUPLICATE_IDS: [NodeId; 5] = [3, 1, 4, 1, 5];

pub fn ring_of(ids: &[NodeId]) -> Ring {
    Ring::build_with_ids(ids.to_vec()).unwrap()
}

/// Every rotation of `ids`, so the same identifiers are tried from every starting point.
pub fn rotations(ids: &[NodeId]) -> Vec<Vec<NodeId>> {
    (0..ids.len())
        .map(|shift| {
            let mut rotated = ids.to_vec();
            rotated.rotate_left(shift);
            rotated
        })
        .collect()
}

/// Identifiers are strictly increasing (or decreasing) along the ring.
pub fn sorted_ids(size: u32, descending: bool) -> Vec<NodeId> {
    let ids = 0..size;

    if descending {
        ids.rev().collect()
    } else {
        ids.collect()
    }
}
