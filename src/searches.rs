//! Searches — aggregate query pipelines over a user source.
//!
//! Every operation re-reads the full user sequence from the injected
//! [`UserSource`] and applies a stateless, order-preserving pipeline:
//! filter the users, flatten their fraction lists, discard absent entries,
//! then fold or map. Absence of a *result* is never an error (`Ok(None)` /
//! an empty stream); absence of a search *key* is.

use frax_core::Fraction;
use frax_sources::UserSource;

/// Query failure, raised synchronously before any filtering begins.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The caller did not supply the search key at all.
    #[error("missing search key `{param}`")]
    MissingKey { param: &'static str },
}

/// Aggregate queries over an injected user source.
///
/// Stateless: each call independently re-acquires the source sequence, so
/// one `Searches` value can be reused across queries.
pub struct Searches<S> {
    source: S,
}

impl<S: UserSource> Searches<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Sum of every present fraction belonging to users with the given id,
    /// left-folded in source order without reduction: `[1/2, 1/3]` yields
    /// `5/6`, `[2/2, 4/4]` yields `16/8`.
    ///
    /// `Ok(None)` when no fraction survives filtering: unknown id, matching
    /// users without fractions, or all entries absent.
    pub fn find_fraction_addition_by_user_id(
        &self,
        id: Option<&str>,
    ) -> Result<Option<Fraction>, QueryError> {
        let id = id.ok_or(QueryError::MissingKey { param: "id" })?;
        tracing::debug!(id, "addition query");
        Ok(self
            .source
            .find_all()
            .filter(|user| user.id == id)
            .flat_map(|user| user.fractions)
            .flatten()
            .reduce(|total, fraction| total.add(fraction)))
    }

    /// Ids of users holding at least one present, proper fraction, in
    /// source order.
    ///
    /// Lazy and single-pass: the stream is consumed by iteration and is not
    /// restartable.
    pub fn find_user_id_by_some_proper_fraction(&self) -> impl Iterator<Item = String> + '_ {
        self.source
            .find_all()
            .filter(|user| user.fractions.iter().flatten().any(|f| f.is_proper()))
            .map(|user| user.id)
    }

    /// Family names of users holding at least one present, improper
    /// fraction, in source order. Single-pass, like
    /// [`find_user_id_by_some_proper_fraction`](Self::find_user_id_by_some_proper_fraction).
    pub fn find_user_family_name_by_some_improper_fraction(
        &self,
    ) -> impl Iterator<Item = String> + '_ {
        self.source
            .find_all()
            .filter(|user| user.fractions.iter().flatten().any(|f| f.is_improper()))
            .map(|user| user.family_name)
    }

    /// Difference of every present fraction belonging to users with the
    /// given given-name.
    ///
    /// Two-phase fold: the first fraction surviving across the *entire*
    /// flattened, ordered sequence is the minuend; every later fraction `b`
    /// is combined as `total.add(-b.numerator/b.denominator)`. With several
    /// users sharing the name, later users' fractions are all subtracted
    /// from the first user's first surviving value.
    ///
    /// An exactly-canceling sequence legitimately yields a present `0/0`;
    /// `Ok(None)` is reserved for "nothing survived filtering".
    pub fn find_fraction_subtraction_by_user_name(
        &self,
        name: Option<&str>,
    ) -> Result<Option<Fraction>, QueryError> {
        let name = name.ok_or(QueryError::MissingKey { param: "name" })?;
        tracing::debug!(name, "subtraction query");
        let mut survivors = self
            .source
            .find_all()
            .filter(|user| user.given_name == name)
            .flat_map(|user| user.fractions)
            .flatten();
        let Some(minuend) = survivors.next() else {
            return Ok(None);
        };
        Ok(Some(survivors.fold(minuend, |total, fraction| {
            total.add(Fraction::new(-fraction.numerator, fraction.denominator))
        })))
    }
}
