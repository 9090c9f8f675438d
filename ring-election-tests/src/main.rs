use ring_election_tests::{factory, test_runner};

#[tokio::main]
async fn main() {
    for ids in [factory::SINGLE_NODE_IDS.to_vec(), factory::PAIR_IDS.to_vec(), factory::SCENARIO_IDS.to_vec()] {
        let report = test_runner::run_election(&ids).await;

        println!("{:?} -> leader {}", ids, report.leader);
    }

    let report = test_runner::run_config(&factory::seeded_config(20, 2024)).await;
    println!("{:?} -> leader {}", report.ids, report.leader);
}
