pub mod broker;
pub mod error;
pub mod service;

pub use broker::SolverClient;
pub use error::SolveError;

#[cfg(test)]
mod tests;
