use ledgerview::session::TokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

/// Session credentials live in `localStorage`; this side only ever reads them.
pub(super) struct LocalStorageTokens;

impl TokenStore for LocalStorageTokens {
    fn get(&self, key: &str) -> Option<String> {
        local_storage_get_string(key)
    }
}
