use crate::error::CoreError;

/// All database primary keys are UUIDs generated by the database.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a raw path segment into a [`DbId`].
///
/// A malformed identifier is an `InvalidArgument`, distinct from the
/// not-found case for a well-formed identifier with no matching row.
pub fn parse_id(entity: &'static str, raw: &str) -> Result<DbId, CoreError> {
    uuid::Uuid::parse_str(raw)
        .map_err(|_| CoreError::InvalidArgument(format!("invalid {entity} id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::parse_id;
    use crate::error::CoreError;

    #[test]
    fn parses_canonical_uuid() {
        let id = parse_id("Promotion", "4f8c2f6e-9c1a-4b53-8a0e-2f1d6b9e7a10").unwrap();
        assert_eq!(id.to_string(), "4f8c2f6e-9c1a-4b53-8a0e-2f1d6b9e7a10");
    }

    #[test]
    fn rejects_malformed_id() {
        let err = parse_id("Promotion", "not-a-uuid").unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)));
    }
}
