use usercards_types::UserRecord;

/// Trim and lower-case a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Select the records matching `query`, preserving their order in `source`.
///
/// An empty (or whitespace-only) query selects everything. Otherwise a record
/// matches when its lower-cased name, or its lower-cased bio if present,
/// contains the normalized query as a substring.
pub fn filter(query: &str, source: &[UserRecord]) -> Vec<UserRecord> {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return source.to_vec();
    }

    source
        .iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

fn matches(record: &UserRecord, needle: &str) -> bool {
    if record.name.to_lowercase().contains(needle) {
        return true;
    }
    record
        .bio
        .as_deref()
        .is_some_and(|bio| bio.to_lowercase().contains(needle))
}
