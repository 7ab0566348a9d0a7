//! Reserved test property names.
//!
//! Test reports carry a fixed set of attributes on every test element. A
//! user-recorded property with one of those names would collide with them, so
//! such names are rejected.

/// Attribute names a test report reserves for itself.
pub const RESERVED_PROPERTY_NAMES: [&str; 9] = [
    "name",
    "tests",
    "failures",
    "disabled",
    "skip",
    "errors",
    "time",
    "timestamp",
    "random_seed",
];

/// Return the entry of `banned` that exactly matches `name`, if any.
pub fn reserved_match<'a, S: AsRef<str>>(name: &str, banned: &'a [S]) -> Option<&'a str> {
    banned
        .iter()
        .map(AsRef::as_ref)
        .find(|entry| *entry == name)
}

/// True if `name` matches no entry of `banned` (exact, case-sensitive).
pub fn validate_name<S: AsRef<str>>(name: &str, banned: &[S]) -> bool {
    reserved_match(name, banned).is_none()
}

/// True if `name` may be used as a test property name.
pub fn validate_test_property_name(name: &str) -> bool {
    validate_name(name, &RESERVED_PROPERTY_NAMES)
}
