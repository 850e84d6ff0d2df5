//! Identifier generation

use uuid::Uuid;

/// Generates a new time-ordered (v7) identifier for durable entities.
#[must_use]
pub fn generate_id() -> Uuid {
    Uuid::now_v7()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(generate_id(), generate_id());
    }
}
