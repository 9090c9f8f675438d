use clap::Parser;
use ring_election::logging::{init_logging, LogLevel};
use ring_election::{topology, Config, NodeId, Ring, RingElectionError, DEFAULT_RING_SIZE};

#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Cli {
    #[arg(long, short = 'n', default_value_t = DEFAULT_RING_SIZE, help = "number of nodes on the ring")]
    size: usize,

    #[arg(
        long,
        value_delimiter = ',',
        help = "explicit identifiers in ring order, e.g. 3,7,2,9,5 (overrides --size)"
    )]
    ids: Vec<NodeId>,

    #[arg(
        long,
        conflicts_with = "ids",
        help = "seed for the identifier permutation",
        env = "RING_ELECTION_SEED"
    )]
    seed: Option<u64>,

    #[arg(long, help = "print the election report as JSON")]
    json: bool,

    #[arg(long, default_value_t = LogLevel::Info, value_enum, env)]
    log_level: LogLevel,
}

impl Cli {
    fn config(&self) -> Config {
        let config = if self.ids.is_empty() {
            Config::new(self.size)
        } else {
            Config::new(self.size).with_ids(&self.ids)
        };

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), RingElectionError> {
    let cli = Cli::parse();
    init_logging(cli.log_level.into());

    let config = cli.config();
    config.validate()?;
    tracing::debug!(size = config.ring_size, seed = ?config.get_seed(), "configured");

    let mut ring = Ring::from_config(&config)?;
    if !cli.json {
        println!("{}", topology::render_chain(ring.ids()));
        println!("{}", topology::render_circle(ring.ids()));
    }

    ring.start_election()?;
    let leader = ring.wait_for_leader().await?;
    let report = ring.shutdown().await?;

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => tracing::error!(%error, "could not serialize the election report"),
        }
    } else {
        println!("Node {} is elected leader.", leader);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_cannot_be_combined_with_explicit_ids() {
        let result = Cli::try_parse_from(["ring-election", "--ids", "3,7,2", "--seed", "4"]);

        assert!(result.is_err());
    }

    #[test]
    fn seed_applies_to_random_rings() {
        let cli = Cli::try_parse_from(["ring-election", "--size", "6", "--seed", "4"]).unwrap();

        assert_eq!(cli.config().get_seed(), Some(4));
    }

    #[test]
    fn explicit_ids_set_the_ring_size() {
        let cli = Cli::try_parse_from(["ring-election", "--ids", "3,7,2"]).unwrap();
        let config = cli.config();

        assert_eq!(config.ring_size, 3);
        assert_eq!(config.get_seed(), None);
        assert_eq!(config.get_ids().unwrap(), vec![3, 7, 2]);
    }
}
