pub mod elections;
pub mod identifiers;
