use yearbook_types::models::AccessCodes;

use crate::error::Result;
use crate::{Collection, Store};

impl Store {
    /// Exact, case-sensitive lookup of a login code. `None` is a normal
    /// outcome for an unknown code.
    pub fn authenticate(&self, code: &str) -> Result<Option<String>> {
        let mut codes: AccessCodes = self.load(Collection::Codes)?;
        Ok(codes.remove(code))
    }
}

#[cfg(test)]
mod tests {
    use crate::seed::access_codes;
    use crate::{Store, StoreError};

    #[test]
    fn every_seeded_code_logs_in() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        for (code, username) in access_codes() {
            assert_eq!(store.authenticate(&code).unwrap(), Some(username));
        }
    }

    #[test]
    fn lookup_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        for code in ["code001", " CODE001", "CODE001 ", "CODE1", "BOGUS", ""] {
            assert_eq!(store.authenticate(code).unwrap(), None, "{code:?}");
        }
    }

    #[test]
    fn missing_codes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        std::fs::remove_file(dir.path().join("codes.json")).unwrap();

        assert!(matches!(store.authenticate("CODE001"), Err(StoreError::Missing { .. })));
    }
}
