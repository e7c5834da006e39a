//! Canned rosters used across harnesses.
//!
//! Each fixture returns a fresh [`SeedSource`] so harnesses can inject it
//! straight into `Searches::new`. The JSON helpers write roster documents
//! for the `JsonSource` tests.

use super::builders::UserBuilder;
use frax_sources::SeedSource;

/// One user mixing absent and present entries: `[?, 1/2, ?, 1/3]`.
pub fn mixed_absent_roster() -> SeedSource {
    SeedSource::from_users(vec![UserBuilder::new("M1")
        .named("Mixed", "Entries")
        .absent()
        .fraction(1, 2)
        .absent()
        .fraction(1, 3)
        .build()])
}

/// One user with an empty fraction list, one whose entries are all absent.
pub fn empty_and_absent_roster() -> SeedSource {
    SeedSource::from_users(vec![
        UserBuilder::new("E1").named("Empty", "List").build(),
        UserBuilder::new("N1")
            .named("All", "Absent")
            .absent()
            .absent()
            .build(),
    ])
}

/// Users covering every classification case, in this order:
///
/// | id | family name | fractions  | some proper | some improper |
/// |----|-------------|------------|-------------|---------------|
/// | A  | Albeniz     | 2/2, 9/3   | no          | yes           |
/// | B  | Bolaño      | 7/3, 5/0   | no          | yes           |
/// | C  | Castro      | ?, 1/2, ?  | yes         | no            |
/// | D  | Duarte      | ?, ?       | no          | no            |
/// | E  | Estevez     | -2/5, 0/4  | yes         | no            |
pub fn classification_roster() -> SeedSource {
    SeedSource::from_users(vec![
        UserBuilder::new("A")
            .named("Carmen", "Albeniz")
            .fraction(2, 2)
            .fraction(9, 3)
            .build(),
        UserBuilder::new("B")
            .named("Diego", "Bolaño")
            .fraction(7, 3)
            .fraction(5, 0)
            .build(),
        UserBuilder::new("C")
            .named("Elena", "Castro")
            .absent()
            .fraction(1, 2)
            .absent()
            .build(),
        UserBuilder::new("D")
            .named("Hugo", "Duarte")
            .absent()
            .absent()
            .build(),
        UserBuilder::new("E")
            .named("Lucía", "Estevez")
            .fraction(-2, 5)
            .fraction(0, 4)
            .build(),
    ])
}

/// Two users sharing a given name whose zero-denominator fractions cancel
/// exactly into `0/0` under the subtraction fold.
pub fn canceling_pair_roster() -> SeedSource {
    SeedSource::from_users(vec![
        UserBuilder::new("T1")
            .named("Twin", "First")
            .fraction(5, 0)
            .build(),
        UserBuilder::new("T2")
            .named("Twin", "Second")
            .fraction(5, 0)
            .build(),
    ])
}

/// Users sharing the given name "Paula" with entries spread across both,
/// for the cross-user subtraction fold.
pub fn shared_name_roster() -> SeedSource {
    SeedSource::from_users(vec![
        UserBuilder::new("P1")
            .named("Paula", "Torres")
            .fraction(3, 4)
            .build(),
        UserBuilder::new("Q1")
            .named("Quentin", "Unrelated")
            .fraction(9, 1)
            .build(),
        UserBuilder::new("P2")
            .named("Paula", "Iglesias")
            .absent()
            .fraction(1, 4)
            .fraction(1, 2)
            .build(),
    ])
}

// ---------------------------------------------------------------------------
// JSON roster documents
// ---------------------------------------------------------------------------

/// A valid two-user roster document. The second record has no `fractions`
/// key at all, which decodes as an empty list.
pub fn roster_json() -> String {
    serde_json::to_string_pretty(&serde_json::json!([
        {
            "id": "1",
            "given_name": "Nora",
            "family_name": "Vidal",
            "fractions": [ { "numerator": 1, "denominator": 2 }, null ]
        },
        {
            "id": "2",
            "given_name": "Iker",
            "family_name": "Sanz"
        }
    ]))
    .unwrap()
}

/// A roster document that is not valid JSON.
pub const ROSTER_JSON_MALFORMED: &str = r#"[ { "id": "1", "#;
