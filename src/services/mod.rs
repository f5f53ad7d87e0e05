pub mod data_fetcher;
pub mod league_registry;
pub mod predictor;
pub mod synthetic;

pub use data_fetcher::*;
pub use predictor::*;
