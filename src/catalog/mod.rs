//! Client for the public Star Wars REST catalog.

mod client;
mod error;
mod types;

#[cfg(test)]
pub mod fake;

pub use client::{Catalog, CatalogClient};
#[cfg(test)]
pub use error::CatalogError;
pub use error::Result;
#[cfg(test)]
pub use types::PeoplePage;
pub use types::{Character, Film, Starship};
