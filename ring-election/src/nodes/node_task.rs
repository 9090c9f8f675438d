use serde::Serialize;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::{Mailbox, Node, NodeMessage, NodeState, Transition};
use crate::{LeaderAnnouncement, NodeId, RingError};

/// Final state of a node once it has been stopped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeReport {
    pub id: NodeId,
    pub state: NodeState,
    pub forwarded: usize,
    pub discarded: usize,
    pub ignored: usize,
}

impl NodeReport {
    fn new(id: NodeId) -> Self {
        Self {
            id,
            state: NodeState::Active,
            forwarded: 0,
            discarded: 0,
            ignored: 0,
        }
    }
}

/// A running node.
#[derive(Debug)]
pub struct NodeTask {
    id: NodeId,
    mailbox: Mailbox,
    handle: JoinHandle<NodeReport>,
}

impl NodeTask {
    pub(super) fn new(id: NodeId, mailbox: Mailbox, handle: JoinHandle<NodeReport>) -> Self {
        Self {
            id,
            mailbox,
            handle,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    /// Queued behind any election traffic already in the node's inbox.
    pub fn stop(&self) {
        self.mailbox.deliver(NodeMessage::Stop);
    }

    pub async fn join(self) -> Result<NodeReport, RingError> {
        let Self { id, handle, .. } = self;

        handle.await.map_err(|_| RingError::NodeTaskFailed(id))
    }
}

pub(super) async fn run(
    mut node: Node,
    mut inbox: UnboundedReceiver<NodeMessage>,
    neighbor: Mailbox,
    announcements: UnboundedSender<LeaderAnnouncement>,
) -> NodeReport {
    let mut report = NodeReport::new(node.id());

    while let Some(NodeMessage::Election(message)) = inbox.recv().await {
        let candidate = message.candidate;
        let previous_state = node.state();

        match node.receive(message) {
            Transition::Forward(message) => {
                if previous_state == NodeState::Active {
                    tracing::debug!(candidate, "became passive");
                } else {
                    tracing::trace!(candidate, "relayed");
                }
                report.forwarded += 1;
                neighbor.deliver(NodeMessage::Election(message));
            }
            Transition::Discard => {
                tracing::debug!(candidate, "discarded smaller candidate");
                report.discarded += 1;
            }
            Transition::Elect(announcement) => {
                tracing::info!("own id went around the ring, elected leader");
                if announcements.send(announcement).is_err() {
                    tracing::warn!("coordinator is gone, leader announcement lost");
                }
            }
            Transition::Ignore => {
                tracing::trace!(candidate, "leader ignored late message");
                report.ignored += 1;
            }
        }
    }

    report.state = node.state();

    report
}
