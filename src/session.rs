//! Persisted session store.
//!
//! Token, user descriptor and the pending-invoice cache all live in the same
//! localStorage namespace. The storage backend is injected so tests can run
//! against an in-memory map instead of the browser.

use gloo_storage::Storage;

use crate::types::{PendingInvoice, Session, User};

pub const KEY_TOKEN: &str = "fitminds_token";
pub const KEY_USER: &str = "fitminds_user";
pub const KEY_PENDING_INVOICE: &str = "fitminds_pending_invoice";

/// Raw string key-value storage seam
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage backend
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

impl KvStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        gloo_storage::LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if gloo_storage::LocalStorage::raw().set_item(key, value).is_err() {
            tracing::warn!("localStorage write failed for {key}");
        }
    }

    fn remove(&self, key: &str) {
        let _ = gloo_storage::LocalStorage::raw().remove_item(key);
    }
}

/// Read the persisted session.
///
/// Absent or malformed data counts as "not logged in", never as an error: a
/// token without a user (or the other way round) is treated as no session.
pub fn load(store: &impl KvStore) -> Option<Session> {
    let token = store.get(KEY_TOKEN)?;
    if token.is_empty() {
        return None;
    }
    let user: User = serde_json::from_str(&store.get(KEY_USER)?).ok()?;
    Some(Session { token, user })
}

pub fn save(store: &impl KvStore, session: &Session) {
    store.set(KEY_TOKEN, &session.token);
    if let Ok(json) = serde_json::to_string(&session.user) {
        store.set(KEY_USER, &json);
    }
}

/// Remove token, user and the pending-invoice cache in one call so a
/// logged-out store never keeps a partial session behind.
pub fn clear(store: &impl KvStore) {
    store.remove(KEY_TOKEN);
    store.remove(KEY_USER);
    store.remove(KEY_PENDING_INVOICE);
}

/// Read the cached pending invoice; malformed entries count as absent.
pub fn load_pending_invoice(store: &impl KvStore) -> Option<PendingInvoice> {
    serde_json::from_str(&store.get(KEY_PENDING_INVOICE)?).ok()
}

pub fn save_pending_invoice(store: &impl KvStore, invoice: &PendingInvoice) {
    if let Ok(json) = serde_json::to_string(invoice) {
        store.set(KEY_PENDING_INVOICE, &json);
    }
}

pub fn clear_pending_invoice(store: &impl KvStore) {
    store.remove(KEY_PENDING_INVOICE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KvStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }
        fn set(&self, key: &str, value: &str) {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
        }
        fn remove(&self, key: &str) {
            self.0.borrow_mut().remove(key);
        }
    }

    fn session() -> Session {
        Session {
            token: "t1".into(),
            user: User {
                email: "a@b.com".into(),
                role: Role::Member,
                name: None,
            },
        }
    }

    #[test]
    fn load_of_empty_store_is_none() {
        assert_eq!(load(&MemoryStore::default()), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::default();
        save(&store, &session());
        assert_eq!(load(&store), Some(session()));
    }

    #[test]
    fn malformed_user_json_counts_as_absent() {
        let store = MemoryStore::default();
        store.set(KEY_TOKEN, "t1");
        store.set(KEY_USER, "{not json");
        assert_eq!(load(&store), None);
    }

    #[test]
    fn token_without_user_counts_as_absent() {
        let store = MemoryStore::default();
        store.set(KEY_TOKEN, "t1");
        assert_eq!(load(&store), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let store = MemoryStore::default();
        store.set(KEY_TOKEN, "");
        store.set(KEY_USER, r#"{"email":"a@b.com","role":"member"}"#);
        assert_eq!(load(&store), None);
    }

    #[test]
    fn clear_removes_session_and_invoice_cache() {
        let store = MemoryStore::default();
        save(&store, &session());
        save_pending_invoice(
            &store,
            &PendingInvoice {
                invoice_id: "inv1".into(),
                status: "pending".into(),
                plan: "Gold".into(),
                amount: 59,
            },
        );
        clear(&store);
        assert_eq!(load(&store), None);
        assert_eq!(load_pending_invoice(&store), None);
        assert_eq!(store.get(KEY_TOKEN), None);
        assert_eq!(store.get(KEY_USER), None);
        assert_eq!(store.get(KEY_PENDING_INVOICE), None);
    }

    #[test]
    fn pending_invoice_round_trips_and_rejects_garbage() {
        let store = MemoryStore::default();
        let invoice = PendingInvoice {
            invoice_id: "inv1".into(),
            status: "pending".into(),
            plan: "Gold".into(),
            amount: 59,
        };
        save_pending_invoice(&store, &invoice);
        assert_eq!(load_pending_invoice(&store), Some(invoice));

        store.set(KEY_PENDING_INVOICE, "][");
        assert_eq!(load_pending_invoice(&store), None);
    }
}
