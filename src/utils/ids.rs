//! Identifier generation

/// Fresh opaque group identifier
pub fn new_group_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_ids_are_unique() {
        let a = new_group_id();
        let b = new_group_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
