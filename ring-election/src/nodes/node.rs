use serde::Serialize;

use crate::{ElectionMessage, LeaderAnnouncement, NodeId};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum NodeState {
    /// Initial state of every node.
    /// The node is still a candidate and compares incoming candidates with its own id.
    Active,
    /// The node has seen a larger candidate.
    /// It relays every message unchanged and never becomes Active again.
    Passive,
    /// Terminal. The node's own message went around the whole ring.
    Leader,
}

/// What a node does with one received election message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Forward(ElectionMessage),
    Discard,
    Elect(LeaderAnnouncement),
    /// Late traffic reaching a node that is already Leader.
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    state: NodeState,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            state: NodeState::Active,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn is_leader(&self) -> bool {
        self.state == NodeState::Leader
    }

    pub fn receive(&mut self, message: ElectionMessage) -> Transition {
        match self.state {
            NodeState::Passive => Transition::Forward(message),
            NodeState::Leader => Transition::Ignore,
            NodeState::Active => {
                if message.candidate > self.id {
                    self.state = NodeState::Passive;

                    Transition::Forward(message)
                } else if message.candidate < self.id {
                    Transition::Discard
                } else {
                    self.state = NodeState::Leader;

                    Transition::Elect(LeaderAnnouncement { leader: self.id })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(candidate: NodeId) -> ElectionMessage {
        ElectionMessage::new(candidate)
    }

    #[test]
    fn starts_active() {
        assert_eq!(Node::new(4).state(), NodeState::Active);
    }

    #[test]
    fn discards_smaller_candidates_and_stays_active() {
        let mut node = Node::new(4);

        assert_eq!(node.receive(message(1)), Transition::Discard);
        assert_eq!(node.state(), NodeState::Active);
    }

    #[test]
    fn becomes_passive_on_larger_candidates() {
        let mut node = Node::new(4);

        assert_eq!(node.receive(message(9)), Transition::Forward(message(9)));
        assert_eq!(node.state(), NodeState::Passive);
    }

    #[test]
    fn passive_nodes_forward_everything_unchanged() {
        let mut node = Node::new(4);
        node.receive(message(9));

        for candidate in [0, 3, 4, 5, 9, 100] {
            assert_eq!(node.receive(message(candidate)), Transition::Forward(message(candidate)));
            assert_eq!(node.state(), NodeState::Passive);
        }
    }

    #[test]
    fn becomes_leader_when_its_own_id_returns() {
        let mut node = Node::new(4);

        assert_eq!(
            node.receive(message(4)),
            Transition::Elect(LeaderAnnouncement { leader: 4 })
        );
        assert!(node.is_leader());
    }

    #[test]
    fn leaders_ignore_late_traffic() {
        let mut node = Node::new(4);
        node.receive(message(4));

        for candidate in [2, 4, 7] {
            assert_eq!(node.receive(message(candidate)), Transition::Ignore);
        }
        assert_eq!(node.state(), NodeState::Leader);
    }
}
