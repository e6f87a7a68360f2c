use crate::parser::types::Row;

/// Candidate columns for the status field, in priority order.
pub const STATUS_COLUMNS: &[&str] = &["Status", "status"];

/// Candidate columns for the record date, in priority order.
pub const DATE_COLUMNS: &[&str] = &["Date", "date", "Created Date", "Created On"];

/// Source-column aliases for the well-known logical categories.
/// Returns `None` for keys that resolve dynamically via [`resolve_dynamic`].
pub fn category_aliases(category: &str) -> Option<&'static [&'static str]> {
    match category {
        "technology" => Some(&["Technology/Platform", "Technology", "technology"]),
        "client" => Some(&["Client", "client"]),
        "ticketType" => Some(&["Ticket Type", "TicketType", "ticketType"]),
        "assignedTo" => Some(&["Assigned To", "Assigned to", "AssignedTo", "assignedTo"]),
        "status" => Some(&["Status", "status"]),
        _ => None,
    }
}

/// First candidate present in the row with a non-empty value.
/// A blank cell falls through to the next candidate.
pub fn resolve_value<'a>(row: &'a Row, candidates: &[&str]) -> Option<&'a str> {
    candidates.iter().find_map(|column| row.value(column))
}

/// Lookup for logical keys without an alias table: the literal key, its
/// all-lowercase form, then its first-letter-capitalized form.
pub fn resolve_dynamic<'a>(row: &'a Row, key: &str) -> Option<&'a str> {
    if let Some(v) = row.value(key) {
        return Some(v);
    }
    if let Some(v) = row.value(&key.to_lowercase()) {
        return Some(v);
    }
    row.value(&capitalize(key))
}

/// Uppercases the first character, leaves the rest untouched.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
