// ============================================================================
// SESSION STORE - Persists token + admin across reloads
// ============================================================================

use std::rc::Rc;

use crate::models::{Admin, Session};
use crate::utils::{
    load_from_storage, save_to_storage, BrowserStorage, KeyValueStorage, StorageError,
    STORAGE_KEY_ADMIN, STORAGE_KEY_LEGACY_USER, STORAGE_KEY_TOKEN,
};

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Store backed by `window.localStorage`
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// Writes admin then token. `read()` needs both, so nobody observes a
    /// half-written session; a failed token write rolls the admin back.
    pub fn save(&self, token: &str, admin: &Admin) -> Result<(), StorageError> {
        if token.trim().is_empty() {
            return Err(StorageError::EmptyToken);
        }
        save_to_storage(&*self.storage, STORAGE_KEY_ADMIN, admin)?;
        if let Err(e) = self.storage.set_item(STORAGE_KEY_TOKEN, token) {
            let _ = self.storage.remove_item(STORAGE_KEY_ADMIN);
            return Err(e);
        }
        Ok(())
    }

    /// Both halves or nothing. A corrupt admin entry reads as no session.
    pub fn read(&self) -> Option<Session> {
        let token = self.token()?;
        let admin = load_from_storage::<Admin>(&*self.storage, STORAGE_KEY_ADMIN)?;
        Some(Session::new(token, admin))
    }

    /// Raw token, used for the Authorization header
    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(STORAGE_KEY_TOKEN)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn clear(&self) {
        for key in [STORAGE_KEY_TOKEN, STORAGE_KEY_ADMIN, STORAGE_KEY_LEGACY_USER] {
            if let Err(e) = self.storage.remove_item(key) {
                log::warn!("⚠️ Could not remove `{}` from storage: {}", key, e);
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AdminRole;
    use crate::utils::MemoryStorage;
    use rstest::{fixture, rstest};

    #[fixture]
    fn storage() -> MemoryStorage {
        MemoryStorage::new()
    }

    #[fixture]
    fn admin() -> Admin {
        Admin {
            id: "1".to_string(),
            name: "Priya".to_string(),
            email: "a@x.com".to_string(),
            role: AdminRole::Admin,
            status: None,
        }
    }

    fn store(storage: &MemoryStorage) -> SessionStore {
        SessionStore::new(Rc::new(storage.clone()))
    }

    #[rstest]
    fn save_then_read_returns_same_session(storage: MemoryStorage, admin: Admin) {
        let store = store(&storage);
        store.save("t1", &admin).unwrap();

        assert_eq!(store.read(), Some(Session::new("t1", admin)));
        assert_eq!(storage.get_item(STORAGE_KEY_TOKEN).as_deref(), Some("t1"));
        assert!(store.is_authenticated());
    }

    #[rstest]
    fn token_without_admin_is_not_a_session(storage: MemoryStorage) {
        storage.set_item(STORAGE_KEY_TOKEN, "t1").unwrap();
        let store = store(&storage);

        assert_eq!(store.read(), None);
        assert_eq!(store.token().as_deref(), Some("t1"));
    }

    #[rstest]
    fn admin_without_token_is_not_a_session(storage: MemoryStorage, admin: Admin) {
        storage
            .set_item(STORAGE_KEY_ADMIN, &serde_json::to_string(&admin).unwrap())
            .unwrap();
        assert_eq!(store(&storage).read(), None);
    }

    #[rstest]
    #[case("{not json")]
    #[case("{\"id\":\"1\",\"role\":\"owner\"}")]
    fn corrupt_admin_reads_as_absent(storage: MemoryStorage, #[case] raw: &str) {
        storage.set_item(STORAGE_KEY_TOKEN, "t1").unwrap();
        storage.set_item(STORAGE_KEY_ADMIN, raw).unwrap();
        assert_eq!(store(&storage).read(), None);
    }

    #[rstest]
    fn clear_removes_every_key_and_is_idempotent(storage: MemoryStorage, admin: Admin) {
        storage.set_item(STORAGE_KEY_LEGACY_USER, "{}").unwrap();
        let store = store(&storage);
        store.save("t1", &admin).unwrap();

        store.clear();
        assert!(storage.is_empty());
        store.clear();
        assert!(storage.is_empty());
        assert!(!store.is_authenticated());
    }

    #[rstest]
    fn empty_token_is_rejected_before_writing(storage: MemoryStorage, admin: Admin) {
        let result = store(&storage).save("  ", &admin);
        assert_eq!(result, Err(StorageError::EmptyToken));
        assert!(storage.is_empty());
    }

    struct TokenWriteFails(MemoryStorage);

    impl KeyValueStorage for TokenWriteFails {
        fn get_item(&self, key: &str) -> Option<String> {
            self.0.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == STORAGE_KEY_TOKEN {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.0.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.0.remove_item(key)
        }
    }

    #[rstest]
    fn failed_token_write_rolls_back_admin(storage: MemoryStorage, admin: Admin) {
        let store = SessionStore::new(Rc::new(TokenWriteFails(storage.clone())));

        assert!(store.save("t1", &admin).is_err());
        assert!(storage.is_empty());
    }
}
