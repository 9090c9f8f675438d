mod config;
pub mod identifiers;
#[cfg(feature = "cli")]
pub mod logging;
mod messages;
pub mod nodes;
mod ring;
pub mod topology;

pub use config::{Config, ConfigError, DEFAULT_RING_SIZE};
pub use identifiers::NodeId;
pub use messages::{ElectionMessage, LeaderAnnouncement};
pub use nodes::{Mailbox, Node, NodeMessage, NodeReport, NodeRunner, NodeState, NodeTask, Transition};
pub use ring::{ElectionReport, Ring, RingError};

use std::fmt::Debug;
use tracing::Instrument;

pub enum RingElectionError {
    Config(ConfigError),
    Ring(RingError),
}

impl From<ConfigError> for RingElectionError {
    fn from(value: ConfigError) -> Self {
        RingElectionError::Config(value)
    }
}

impl From<RingError> for RingElectionError {
    fn from(value: RingError) -> Self {
        RingElectionError::Ring(value)
    }
}

impl Debug for RingElectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RingElectionError::Config(config_error) => {
                write!(f, "Config Error: {:?}", config_error)
            }
            RingElectionError::Ring(ring_error) => {
                write!(f, "Ring Error: {}", ring_error)
            }
        }
    }
}

impl std::fmt::Display for RingElectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for RingElectionError {}

/// Runs one complete election: builds the ring described by `config`,
/// seeds it, waits for the leader announcement and shuts every node down.
///
/// # Example
/// ```no_run
/// use ring_election::Config;
///
/// # async fn run() -> Result<(), ring_election::RingElectionError> {
/// let report = ring_election::elect(&Config::new(20)).await?;
/// println!("Node {} is elected leader.", report.leader);
/// # Ok(())
/// # }
/// ```
pub async fn elect(config: &Config) -> Result<ElectionReport, RingElectionError> {
    config.validate()?;

    let mut ring = Ring::from_config(config)?;
    let span = tracing::info_span!("election", run_id = %ring.run_id(), size = ring.len());

    async move {
        tracing::info!(chain = %topology::render_chain(ring.ids()), "ring built");
        tracing::debug!("\n{}", topology::render_circle(ring.ids()));

        ring.start_election()?;
        ring.wait_for_leader().await?;

        Ok::<_, RingElectionError>(ring.shutdown().await?)
    }
    .instrument(span)
    .await
}
