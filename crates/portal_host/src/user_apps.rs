//! Per-user pinned-apps record: model, id codec, and store contract.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

use crate::{catalog::AppId, identity::UserIdentity};

/// The one record a user owns: their pinned app ids, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAppRecord {
    pub user_id: String,
    pub ordered_ids: Vec<AppId>,
}

/// Serializes an ordered id list to the `;`-joined wire form.
pub fn join_ordered_ids(ids: &[AppId]) -> String {
    ids.iter()
        .map(AppId::as_str)
        .collect::<Vec<_>>()
        .join(";")
}

/// Parses the `;`-joined wire form back into an ordered id list.
///
/// Empty segments are skipped, so the empty string parses to an empty list
/// and a trailing separator is harmless.
pub fn parse_ordered_ids(raw: &str) -> Vec<AppId> {
    raw.split(';')
        .filter(|segment| !segment.is_empty())
        .map(AppId::from)
        .collect()
}

/// Object-safe boxed future used by [`UserAppsStore`] async methods.
pub type UserAppsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Store for the per-user pinned record.
///
/// `save_record` is update-or-create: the first pin creates the record,
/// every later write updates it in place.
pub trait UserAppsStore {
    fn load_record<'a>(
        &'a self,
        user: &'a UserIdentity,
    ) -> UserAppsStoreFuture<'a, Result<Option<UserAppRecord>, String>>;

    fn save_record<'a>(
        &'a self,
        user: &'a UserIdentity,
        ordered_ids: &'a [AppId],
    ) -> UserAppsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op record store for unsupported targets and baseline tests.
pub struct NoopUserAppsStore;

impl UserAppsStore for NoopUserAppsStore {
    fn load_record<'a>(
        &'a self,
        _user: &'a UserIdentity,
    ) -> UserAppsStoreFuture<'a, Result<Option<UserAppRecord>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_record<'a>(
        &'a self,
        _user: &'a UserIdentity,
        _ordered_ids: &'a [AppId],
    ) -> UserAppsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory record store keyed by user id.
pub struct MemoryUserAppsStore {
    inner: Rc<RefCell<HashMap<String, UserAppRecord>>>,
}

impl MemoryUserAppsStore {
    /// Returns the stored record for a user id, if any.
    pub fn record(&self, user_id: &str) -> Option<UserAppRecord> {
        self.inner.borrow().get(user_id).cloned()
    }
}

impl UserAppsStore for MemoryUserAppsStore {
    fn load_record<'a>(
        &'a self,
        user: &'a UserIdentity,
    ) -> UserAppsStoreFuture<'a, Result<Option<UserAppRecord>, String>> {
        Box::pin(async move { Ok(self.inner.borrow().get(&user.user_id).cloned()) })
    }

    fn save_record<'a>(
        &'a self,
        user: &'a UserIdentity,
        ordered_ids: &'a [AppId],
    ) -> UserAppsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().insert(
                user.user_id.clone(),
                UserAppRecord {
                    user_id: user.user_id.clone(),
                    ordered_ids: ordered_ids.to_vec(),
                },
            );
            Ok(())
        })
    }
}
