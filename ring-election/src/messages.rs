use serde::Serialize;

use crate::NodeId;

/// Carries the candidate currently circulating around the ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ElectionMessage {
    pub candidate: NodeId,
}

impl ElectionMessage {
    pub fn new(candidate: NodeId) -> Self {
        Self { candidate }
    }
}

/// Sent exactly once, from the winning node to the ring coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LeaderAnnouncement {
    pub leader: NodeId,
}
