use web_sys::Storage;

use shared::constants::STORAGE_TOKEN_KEY;
use shared::session::TokenStore;

/// Bearer token kept in `localStorage`.
pub struct LocalTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).and_then(|s| s)
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(STORAGE_TOKEN_KEY).ok()).and_then(|value| value)
    }

    fn save(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(STORAGE_TOKEN_KEY, token).is_err() {
                    log::error!("token store: write failed");
                }
            }
            None => log::error!("token store: local storage unavailable"),
        }
    }
}
