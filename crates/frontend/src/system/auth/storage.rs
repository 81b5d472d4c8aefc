use contracts::system::auth::{OidcError, OidcUser, PendingSignIn};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::window;

const USER_KEY: &str = "oidc.user";
const PENDING_KEY: &str = "oidc.pending";

fn get_local_storage() -> Result<web_sys::Storage, OidcError> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| OidcError::Storage("localStorage is not available".into()))
}

fn write<T: Serialize>(key: &str, value: &T) -> Result<(), OidcError> {
    let json = serde_json::to_string(value).map_err(|e| OidcError::Storage(e.to_string()))?;
    get_local_storage()?
        .set_item(key, &json)
        .map_err(|_| OidcError::Storage(format!("cannot write `{}`", key)))
}

fn read<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage().ok()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding unreadable `{}` entry: {}", key, e);
            remove(key);
            None
        }
    }
}

fn remove(key: &str) {
    if let Ok(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

pub fn save_user(user: &OidcUser) -> Result<(), OidcError> {
    write(USER_KEY, user)
}

pub fn load_user() -> Option<OidcUser> {
    read(USER_KEY)
}

pub fn clear_user() {
    remove(USER_KEY);
}

pub fn save_pending(pending: &PendingSignIn) -> Result<(), OidcError> {
    write(PENDING_KEY, pending)
}

/// Reads and removes the pending sign-in; a callback can consume it only once
pub fn take_pending() -> Option<PendingSignIn> {
    let pending = read(PENDING_KEY);
    remove(PENDING_KEY);
    pending
}
