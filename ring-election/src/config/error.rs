use crate::NodeId;

pub enum ConfigError {
    EmptyRing,
    DuplicateIdentifier(NodeId),
    RingTooLarge(usize),
}

impl std::fmt::Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyRing => {
                write!(f, "At least one node is required to build a ring")
            }
            ConfigError::DuplicateIdentifier(id) => {
                write!(f, "Identifier {} is assigned to more than one node", id)
            }
            ConfigError::RingTooLarge(size) => {
                write!(f, "A ring of {} nodes exceeds the identifier range", size)
            }
        }
    }
}

impl PartialEq for ConfigError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConfigError::EmptyRing, ConfigError::EmptyRing) => true,
            (ConfigError::DuplicateIdentifier(a), ConfigError::DuplicateIdentifier(b)) => a == b,
            (ConfigError::RingTooLarge(a), ConfigError::RingTooLarge(b)) => a == b,
            _ => false,
        }
    }
}
