/// Nodes are the participants of the ring.
/// Each one runs as its own tokio task, receives election messages from
/// its predecessor and relays, discards or claims them following the
/// Chang-Roberts comparison rule.
mod mailbox;
mod node;
mod node_runner;
mod node_task;

pub use mailbox::{Mailbox, NodeMessage};
pub use node::{Node, NodeState, Transition};
pub use node_runner::NodeRunner;
pub use node_task::{NodeReport, NodeTask};
