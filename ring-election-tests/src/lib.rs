pub mod factory;
pub mod test_runner;
pub mod tests;

use ring_election::{ElectionReport, NodeId, NodeState};

pub fn max_id(ids: &[NodeId]) -> Option<NodeId> {
    ids.iter().copied().max()
}

pub fn count_in_state(report: &ElectionReport, state: NodeState) -> usize {
    report.nodes.iter().filter(|node| node.state == state).count()
}
