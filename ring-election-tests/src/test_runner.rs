use std::future::Future;
use std::time::Duration;

use ring_election::{Config, ElectionReport, NodeId, Ring};
use tokio::time::timeout;

use crate::factory;

/// An election on a healthy ring converges quickly; this only guards against hangs.
pub const ELECTION_TIMEOUT: Duration = Duration::from_secs(10);

pub async fn run_election(ids: &[NodeId]) -> ElectionReport {
    run_with_ring(factory::ring_of(ids), |ring| async move { ring }).await
}

pub async fn run_config(config: &Config) -> ElectionReport {
    timeout(ELECTION_TIMEOUT, ring_election::elect(config))
        .await
        .expect("election timed out")
        .unwrap()
}

/// Lets `before_start` inspect or adjust the ring, then runs the election to completion.
/// A ring already started by `before_start` is not started again.
pub async fn run_with_ring<BeforeFn, Fut>(ring: Ring, before_start: BeforeFn) -> ElectionReport
where
    BeforeFn: FnOnce(Ring) -> Fut,
    Fut: Future<Output = Ring>,
{
    let mut ring = before_start(ring).await;

    if !ring.is_started() {
        ring.start_election().unwrap();
    }
    timeout(ELECTION_TIMEOUT, ring.wait_for_leader())
        .await
        .expect("election timed out")
        .unwrap();

    ring.shutdown().await.unwrap()
}
