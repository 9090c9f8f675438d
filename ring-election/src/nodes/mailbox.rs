use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{ElectionMessage, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeMessage {
    Election(ElectionMessage),
    Stop,
}

/// Sending half of a node's inbox. Sends never block.
#[derive(Clone, Debug)]
pub struct Mailbox {
    owner: NodeId,
    sender: UnboundedSender<NodeMessage>,
}

impl Mailbox {
    pub(crate) fn channel(owner: NodeId) -> (Self, UnboundedReceiver<NodeMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (Self { owner, sender }, receiver)
    }

    /// The node this mailbox delivers to.
    pub fn owner(&self) -> NodeId {
        self.owner
    }

    /// Returns false once the owning node has stopped.
    pub fn deliver(&self, message: NodeMessage) -> bool {
        match self.sender.send(message) {
            Ok(()) => true,
            Err(_) => {
                tracing::debug!(node_id = self.owner, ?message, "mailbox closed, message dropped");

                false
            }
        }
    }

    pub fn send_election(&self, candidate: NodeId) -> bool {
        self.deliver(NodeMessage::Election(ElectionMessage::new(candidate)))
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
