use yearbook_types::models::Friend;

use crate::error::Result;
use crate::{Collection, Store};

impl Store {
    /// The whole roster, in stored order.
    pub fn list_friends(&self) -> Result<Vec<Friend>> {
        self.load(Collection::Friends)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Store, StoreError};

    #[test]
    fn repeated_reads_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let first = store.list_friends().unwrap();
        let second = store.list_friends().unwrap();
        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_roster_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("friends.json"), r#"[{"id":"one"}]"#).unwrap();

        assert!(matches!(store.list_friends(), Err(StoreError::Corrupt { .. })));
    }
}
