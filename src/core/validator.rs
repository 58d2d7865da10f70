/// Check that an email has an `@` followed somewhere later by a `.`.
///
/// This is a syntactic heuristic only. A `.` before the first `@` does not
/// count, and nothing else about the address is checked.
pub fn validate_email(email: &str) -> bool {
    match email.find('@') {
        Some(at) => email[at + 1..].contains('.'),
        None => false,
    }
}
