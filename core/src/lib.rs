//! Tooling core for the kilobot ALF dhtf experiments.
//!
//! Two independent pieces live here: a sweep printer that walks the per-seed
//! result files of a timeout sweep, and a generator that draws a random task
//! area set and splices it into client/server ARGoS experiment files.

pub mod areas;
pub mod prelude;
pub mod results;

pub use prelude::{Bernoulli, ToolError, ToolResult};
