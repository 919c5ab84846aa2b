// Network planner: IPv4 subnet calculator plus the project/topology API around it.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod store;

use crate::error::InvalidInputError;
use crate::models::SubnetFacts;
use crate::processing::PrefixInput;

pub use processing::calculate;

/// Calculate several networks sharing one fallback prefix.
///
/// Each input keeps its own result, so one bad entry doesn't hide the rest.
pub fn calculate_all(
    networks: &[String],
    prefix: Option<PrefixInput>,
) -> Vec<(String, Result<SubnetFacts, InvalidInputError>)> {
    networks
        .iter()
        .map(|spec| (spec.clone(), calculate(spec, prefix.clone())))
        .collect()
}
