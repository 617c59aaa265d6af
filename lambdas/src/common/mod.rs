pub mod attributes;
pub mod config;
pub mod errors;
pub mod store;
pub mod utils;

#[cfg(test)]
pub mod testing;

pub use store::{CrewQuery, CrewRecord, CrewStore};
