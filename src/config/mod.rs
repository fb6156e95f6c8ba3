//! Roster configuration loading.
//!
//! The development and test store is seeded from a YAML roster file holding
//! the initial users, shifts and leave records. Production deployments point
//! the core at a real record store instead and never load a seed.

mod loader;
mod types;

pub use loader::RosterConfig;
pub use types::{SeedLeave, SeedShift, SeedUser};
