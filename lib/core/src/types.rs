/// Generate a new random ID (UUIDv4, no dashes).
///
/// Used for session tokens; 128 bits of randomness, hex-encoded.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string().replace('-', "")
}

/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}
