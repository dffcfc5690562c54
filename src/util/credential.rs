//! Session JWT persistence in `localStorage`.
//!
//! Storage access is best-effort: a missing window or disabled storage reads
//! as "no token" and writes are dropped. Non-browser builds never hold a token.

#[cfg(test)]
#[path = "credential_test.rs"]
mod credential_test;

/// Read the stored token for `key`. Blank values count as absent.
pub fn load_token(key: &str) -> Option<String> {
    #[cfg(feature = "browser")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        normalize_token(&raw)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = key;
        None
    }
}

/// Persist `token` under `key`.
pub fn store_token(key: &str, token: &str) {
    #[cfg(feature = "browser")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, token);
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (key, token);
    }
}

/// Remove any token stored under `key`.
pub fn delete_token(key: &str) {
    #[cfg(feature = "browser")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = key;
    }
}

#[cfg(any(test, feature = "browser"))]
fn normalize_token(raw: &str) -> Option<String> {
    let token = raw.trim();
    if token.is_empty() { None } else { Some(token.to_owned()) }
}
