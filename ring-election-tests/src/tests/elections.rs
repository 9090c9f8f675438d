#[cfg(test)]
mod tests {
    use ring_election::NodeState;

    use crate::factory::{self, PAIR_IDS, SCENARIO_IDS, SINGLE_NODE_IDS};
    use crate::{count_in_state, max_id, test_runner};

    #[tokio::test]
    pub async fn single_node_becomes_leader() {
        let report = test_runner::run_election(&SINGLE_NODE_IDS).await;

        assert_eq!(report.leader, 0);
        assert_eq!(report.leaders(), vec![0]);
    }

    #[tokio::test]
    pub async fn larger_node_of_a_pair_wins() {
        let report = test_runner::run_election(&PAIR_IDS).await;

        assert_eq!(report.leader, 9);
        let five = report.nodes.iter().find(|node| node.id == 5).unwrap();
        assert_eq!(five.state, NodeState::Passive);
    }

    #[tokio::test]
    pub async fn maximum_wins_from_every_rotation() {
        for ids in factory::rotations(&SCENARIO_IDS) {
            let report = test_runner::run_election(&ids).await;

            assert_eq!(report.leader, 9);
            assert_eq!(report.ids, ids);
        }
    }

    #[tokio::test]
    pub async fn sorted_rings_elect_the_maximum() {
        for descending in [false, true] {
            let ids = factory::sorted_ids(16, descending);
            let report = test_runner::run_election(&ids).await;

            assert_eq!(report.leader, 15);
        }
    }

    #[tokio::test]
    pub async fn exactly_one_leader_for_random_ring_sizes() {
        for _ in 0..25 {
            let report = test_runner::run_config(&factory::random_config(64)).await;

            assert_eq!(count_in_state(&report, NodeState::Leader), 1);
            assert_eq!(count_in_state(&report, NodeState::Active), 0);
            assert_eq!(count_in_state(&report, NodeState::Passive), report.ids.len() - 1);
            assert_eq!(Some(report.leader), max_id(&report.ids));
            assert_eq!(report.leader as usize, report.ids.len() - 1);
        }
    }

    #[tokio::test]
    pub async fn sparse_identifiers_elect_the_maximum() {
        for ring_size in [3, 10, 40] {
            let config = factory::sparse_ids_config(ring_size);
            let report = test_runner::run_config(&config).await;

            assert_eq!(Some(report.leader), max_id(&report.ids));
            assert_eq!(report.leaders(), vec![report.leader]);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    pub async fn converges_on_a_multi_threaded_runtime() {
        let report = test_runner::run_config(&factory::seeded_config(200, 11)).await;

        assert_eq!(report.leader, 199);
        assert_eq!(count_in_state(&report, NodeState::Leader), 1);
    }

    #[tokio::test]
    pub async fn report_keeps_nodes_in_ring_order() {
        let report = test_runner::run_election(&SCENARIO_IDS).await;

        let ids: Vec<_> = report.nodes.iter().map(|node| node.id).collect();
        assert_eq!(ids, SCENARIO_IDS.to_vec());
        assert!(report.duration_ms() >= 0);
    }
}
