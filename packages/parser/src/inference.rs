//! Property type guessing from naming conventions.

pub const STRING: &str = "string";
pub const INTEGER: &str = "integer";
pub const BOOLEAN: &str = "boolean";
pub const DATETIME: &str = "datetime";

enum Affix {
    Prefix(&'static str),
    Suffix(&'static str),
}

// Evaluated top to bottom, first match wins
const RULES: &[(Affix, &str)] = &[
    (Affix::Suffix("at"), DATETIME),
    (Affix::Suffix("id"), INTEGER),
    (Affix::Prefix("is"), BOOLEAN),
    (Affix::Prefix("has"), BOOLEAN),
];

/// Guess a property type from its name, case-insensitively.
///
/// `createdAt` is a `datetime`, `userId` an `integer`, `isActive` and
/// `hasChildren` are `boolean`s and anything else falls back to `string`.
pub fn infer_type(name: &str) -> &'static str {
    let lower = name.to_ascii_lowercase();

    RULES
        .iter()
        .find(|(affix, _)| match affix {
            Affix::Prefix(prefix) => lower.starts_with(prefix),
            Affix::Suffix(suffix) => lower.ends_with(suffix),
        })
        .map(|(_, type_)| *type_)
        .unwrap_or(STRING)
}
