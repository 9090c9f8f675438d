use chrono::{DateTime, Utc};
use derive_more::Display;
use futures_util::future::join_all;
use serde::Serialize;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

use crate::identifiers::{self, NodeId};
use crate::nodes::{Mailbox, NodeReport, NodeRunner, NodeState, NodeTask};
use crate::{Config, LeaderAnnouncement, RingElectionError};

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum RingError {
    #[display("node {_0} already has a neighbor")]
    NeighborAlreadySet(NodeId),
    #[display("node {_0} has no neighbor yet")]
    NeighborNotSet(NodeId),
    #[display("the election has already started")]
    ElectionAlreadyStarted,
    #[display("the election has not started")]
    ElectionNotStarted,
    #[display("every node stopped before a leader was announced")]
    AnnouncementsClosed,
    #[display("the ring stopped without electing a leader")]
    NoLeaderElected,
    #[display("more than one leader was announced: {_0:?}")]
    MultipleLeaders(Vec<NodeId>),
    #[display("the task of node {_0} failed")]
    NodeTaskFailed(NodeId),
}

impl std::error::Error for RingError {}

enum RingNodes {
    /// Built and wired, nothing spawned yet.
    Wired(Vec<NodeRunner>),
    Running(Vec<NodeTask>),
}

/// Outcome of one election run.
#[derive(Clone, Debug, Serialize)]
pub struct ElectionReport {
    pub run_id: Uuid,
    /// Identifiers in ring order.
    pub ids: Vec<NodeId>,
    pub leader: NodeId,
    /// Final node states, in ring order.
    pub nodes: Vec<NodeReport>,
    pub started_at: DateTime<Utc>,
    pub concluded_at: DateTime<Utc>,
}

impl ElectionReport {
    pub fn leaders(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|node| node.state == NodeState::Leader)
            .map(|node| node.id)
            .collect()
    }

    pub fn duration_ms(&self) -> i64 {
        (self.concluded_at - self.started_at).num_milliseconds()
    }
}

/// The ring coordinator.
///
/// Owns the nodes and their wiring. A `Ring` only exists fully wired, so
/// election traffic can never precede construction.
pub struct Ring {
    run_id: Uuid,
    ids: Vec<NodeId>,
    mailboxes: Vec<Mailbox>,
    nodes: RingNodes,
    announcer: Option<UnboundedSender<LeaderAnnouncement>>,
    announcements: UnboundedReceiver<LeaderAnnouncement>,
    leader: Option<NodeId>,
    started_at: Option<DateTime<Utc>>,
    concluded_at: Option<DateTime<Utc>>,
}

impl Ring {
    /// Builds a ring of `size` nodes with randomly ordered identifiers `0..size`.
    pub fn build(size: usize) -> Result<Self, RingElectionError> {
        Self::build_with_ids(identifiers::shuffled_ids(size)?)
    }

    pub fn from_config(config: &Config) -> Result<Self, RingElectionError> {
        Self::build_with_ids(config.get_ids()?)
    }

    /// Builds a ring where `ids[i]` points to `ids[i + 1]` and the last node
    /// points back to the first.
    pub fn build_with_ids(ids: Vec<NodeId>) -> Result<Self, RingElectionError> {
        identifiers::validate_ids(&ids)?;

        let mut runners: Vec<_> = ids.iter().map(|id| NodeRunner::new(*id)).collect();
        let mailboxes: Vec<_> = runners.iter().map(NodeRunner::mailbox).collect();

        for (index, runner) in runners.iter_mut().enumerate() {
            runner.wire(mailboxes[(index + 1) % mailboxes.len()].clone())?;
        }

        let (announcer, announcements) = mpsc::unbounded_channel();

        Ok(Self {
            run_id: Uuid::new_v4(),
            ids,
            mailboxes,
            nodes: RingNodes::Wired(runners),
            announcer: Some(announcer),
            announcements,
            leader: None,
            started_at: None,
            concluded_at: None,
        })
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn leader(&self) -> Option<NodeId> {
        self.leader
    }

    pub fn is_started(&self) -> bool {
        matches!(self.nodes, RingNodes::Running(_))
    }

    /// Spawns every node, then has each node emit its own id to its neighbor.
    /// Must be called from within a tokio runtime.
    pub fn start_election(&mut self) -> Result<(), RingError> {
        let runners = match std::mem::replace(&mut self.nodes, RingNodes::Running(vec![])) {
            RingNodes::Wired(runners) => runners,
            running => {
                self.nodes = running;

                return Err(RingError::ElectionAlreadyStarted);
            }
        };
        // Dropped at the end of this call so the channel closes once every node stops.
        let announcer = self.announcer.take().ok_or(RingError::ElectionAlreadyStarted)?;

        let tasks = runners
            .into_iter()
            .map(|runner| runner.spawn(announcer.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        self.nodes = RingNodes::Running(tasks);
        self.started_at = Some(Utc::now());

        for (index, id) in self.ids.iter().enumerate() {
            let neighbor = &self.mailboxes[(index + 1) % self.mailboxes.len()];
            neighbor.send_election(*id);
        }

        tracing::info!(run_id = %self.run_id, size = self.len(), "election started");

        Ok(())
    }

    /// Resolves once the unique leader announcement has arrived.
    /// Later calls return the recorded leader.
    pub async fn wait_for_leader(&mut self) -> Result<NodeId, RingError> {
        if let Some(leader) = self.leader {
            return Ok(leader);
        }
        if !self.is_started() {
            return Err(RingError::ElectionNotStarted);
        }

        let announcement = self.announcements.recv().await;

        match announcement {
            Some(announcement) => Ok(self.on_leader_announcement(announcement)),
            None => Err(RingError::AnnouncementsClosed),
        }
    }

    fn on_leader_announcement(&mut self, announcement: LeaderAnnouncement) -> NodeId {
        let LeaderAnnouncement { leader } = announcement;

        self.leader = Some(leader);
        self.concluded_at = Some(Utc::now());
        tracing::info!(run_id = %self.run_id, leader, "Node {} is elected leader.", leader);

        leader
    }

    /// Stops and joins every node and checks that exactly one leader was announced.
    pub async fn shutdown(mut self) -> Result<ElectionReport, RingError> {
        let tasks = match std::mem::replace(&mut self.nodes, RingNodes::Running(vec![])) {
            RingNodes::Running(tasks) => tasks,
            RingNodes::Wired(_) => return Err(RingError::ElectionNotStarted),
        };

        for task in &tasks {
            tracing::trace!(node_id = task.id(), "stopping node");
            task.stop();
        }
        let nodes = join_all(tasks.into_iter().map(NodeTask::join))
            .await
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let mut late_announcements = vec![];
        while let Ok(announcement) = self.announcements.try_recv() {
            late_announcements.push(announcement);
        }

        let leader = match (self.leader, late_announcements.as_slice()) {
            (Some(leader), []) => leader,
            (None, [announcement]) => self.on_leader_announcement(*announcement),
            (None, []) => return Err(RingError::NoLeaderElected),
            (recorded, late) => {
                let leaders = recorded.into_iter().chain(late.iter().map(|a| a.leader)).collect();

                return Err(RingError::MultipleLeaders(leaders));
            }
        };

        let concluded_at = self.concluded_at.unwrap_or_else(Utc::now);

        Ok(ElectionReport {
            run_id: self.run_id,
            ids: std::mem::take(&mut self.ids),
            leader,
            nodes,
            started_at: self.started_at.unwrap_or(concluded_at),
            concluded_at,
        })
    }
}

impl Drop for Ring {
    fn drop(&mut self) {
        if let RingNodes::Running(tasks) = &self.nodes {
            for task in tasks {
                task.stop();
            }
        }
    }
}
