use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::Instrument;

use super::node_task::{self, NodeTask};
use super::{Mailbox, Node, NodeMessage};
use crate::{LeaderAnnouncement, NodeId, RingError};

/// A node that exists but is not running yet.
/// Its neighbor is wired exactly once, then it is spawned onto the runtime.
#[derive(Debug)]
pub struct NodeRunner {
    node: Node,
    mailbox: Mailbox,
    inbox: UnboundedReceiver<NodeMessage>,
    neighbor: Option<Mailbox>,
}

impl NodeRunner {
    pub fn new(id: NodeId) -> Self {
        let (mailbox, inbox) = Mailbox::channel(id);

        Self {
            node: Node::new(id),
            mailbox,
            inbox,
            neighbor: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.node.id()
    }

    pub fn mailbox(&self) -> Mailbox {
        self.mailbox.clone()
    }

    pub fn neighbor(&self) -> Option<NodeId> {
        self.neighbor.as_ref().map(Mailbox::owner)
    }

    pub fn wire(&mut self, neighbor: Mailbox) -> Result<(), RingError> {
        if self.neighbor.is_some() {
            return Err(RingError::NeighborAlreadySet(self.id()));
        }

        self.neighbor = Some(neighbor);

        Ok(())
    }

    /// Must be called from within a tokio runtime.
    pub fn spawn(
        self,
        announcements: UnboundedSender<LeaderAnnouncement>,
    ) -> Result<NodeTask, RingError> {
        let Self {
            node,
            mailbox,
            inbox,
            neighbor,
        } = self;
        let id = node.id();
        let neighbor = neighbor.ok_or(RingError::NeighborNotSet(id))?;

        let handle = tokio::spawn(
            node_task::run(node, inbox, neighbor, announcements)
                .instrument(tracing::debug_span!("node", node_id = id)),
        );

        Ok(NodeTask::new(id, mailbox, handle))
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn wires_exactly_once() {
        let mut runner = NodeRunner::new(3);
        let neighbor = NodeRunner::new(7);

        assert_eq!(runner.neighbor(), None);
        runner.wire(neighbor.mailbox()).unwrap();
        assert_eq!(runner.neighbor(), Some(7));

        assert_eq!(runner.wire(neighbor.mailbox()), Err(RingError::NeighborAlreadySet(3)));
        assert_eq!(runner.neighbor(), Some(7));
    }

    #[tokio::test]
    async fn refuses_to_spawn_unwired() {
        let (announcements, _receiver) = mpsc::unbounded_channel();

        let result = NodeRunner::new(3).spawn(announcements);

        assert!(matches!(result, Err(RingError::NeighborNotSet(3))));
    }
}
