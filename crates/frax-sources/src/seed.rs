//! Built-in in-memory roster.

use crate::UserSource;
use frax_core::{Fraction, User};

/// Fixed in-memory roster.
///
/// [`SeedSource::builtin`] is the demo roster the binary queries when no
/// roster file is configured; [`SeedSource::from_users`] wraps an arbitrary
/// roster and is the injection point for test fixtures.
pub struct SeedSource {
    users: Vec<User>,
}

impl SeedSource {
    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The built-in demo roster. Covers the interesting entry shapes:
    /// absent entries, equal-magnitude fractions, a shared given name, and
    /// a user with no recorded values at all.
    pub fn builtin() -> Self {
        Self::from_users(vec![
            User::new(
                "1",
                "Paula",
                "Torres",
                vec![Some(Fraction::new(1, 2)), None, Some(Fraction::new(2, 4))],
            ),
            User::new("2", "Miguel", "Ortega", vec![Some(Fraction::new(3, 5))]),
            User::new(
                "3",
                "Paula",
                "Iglesias",
                vec![None, Some(Fraction::new(4, 7)), Some(Fraction::new(9, 3))],
            ),
            User::new(
                "4",
                "Ana",
                "Reyes",
                vec![Some(Fraction::new(2, 2)), Some(Fraction::new(4, 4))],
            ),
            User::new(
                "5",
                "Jorge",
                "Santos",
                vec![Some(Fraction::new(5, 8)), Some(Fraction::new(7, 2))],
            ),
            User::new("6", "Ana", "Blanco", vec![None, None]),
        ])
    }
}

impl UserSource for SeedSource {
    fn find_all(&self) -> Box<dyn Iterator<Item = User> + '_> {
        Box::new(self.users.iter().cloned())
    }
}
