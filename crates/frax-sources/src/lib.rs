//! frax-sources — user roster source adapters for frax.
//!
//! Each adapter produces the same thing: an ordered, finite sequence of
//! [`frax_core::User`] records reflecting its backing store. Queries are
//! written against the [`UserSource`] trait, never against a concrete
//! roster, so any store satisfying the contract can be injected.

pub mod json;
pub mod seed;

pub use json::{JsonSource, SourceError};
pub use seed::SeedSource;

use frax_core::User;

/// Contract every roster source implements: produce the full user sequence
/// in the source's stable order.
///
/// Each call re-reads the backing store. Callers must not assume the
/// returned iterator can be restarted; re-running a query calls
/// `find_all` again instead.
pub trait UserSource {
    fn find_all(&self) -> Box<dyn Iterator<Item = User> + '_>;
}

impl<S: UserSource + ?Sized> UserSource for Box<S> {
    fn find_all(&self) -> Box<dyn Iterator<Item = User> + '_> {
        (**self).find_all()
    }
}

impl<S: UserSource + ?Sized> UserSource for &S {
    fn find_all(&self) -> Box<dyn Iterator<Item = User> + '_> {
        (**self).find_all()
    }
}
