//! frax — fraction queries over user rosters.
//!
//! Library facade for the frax workspace. The core types live in
//! [`frax_core`], the roster sources in [`frax_sources`]; this crate adds
//! the query layer and re-exports the pieces an embedding application
//! needs.
//!
//! # Architecture
//!
//! ```text
//! Source (seed / JSON) ──► Searches ──► Option<Fraction> | String stream
//! ```
//!
//! Everything is synchronous and single-threaded: a query re-reads the
//! source sequence, applies an order-preserving pipeline, and returns.

pub mod searches;

pub use frax_core::{Config, Fraction, User};
pub use frax_sources::{JsonSource, SeedSource, SourceError, UserSource};
pub use searches::{QueryError, Searches};
