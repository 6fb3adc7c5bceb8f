pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod logging;
pub mod opts;
pub mod sandbox;
pub mod scenario;

pub use client::{LedgerClient, TallyReport};
pub use config::ScenarioConfig;
pub use error::{ClientError, ScenarioError};
pub use sandbox::Sandbox;
pub use scenario::{run, ScenarioReport, VoteRecord};
