//! Client Storage
//!
//! All access to browser-persisted state goes through `ClientStorage`.

use crate::error::ApiError;

pub trait ClientStorage {
    /// Wipe both long-lived (local) and short-lived (session) storage
    fn clear_all(&self) -> Result<(), ApiError>;
}

/// `window.localStorage` + `window.sessionStorage`
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl ClientStorage for BrowserStorage {
    fn clear_all(&self) -> Result<(), ApiError> {
        let window = web_sys::window().ok_or_else(|| ApiError::Storage("sin window".into()))?;

        let local = window
            .local_storage()
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?;
        let session = window
            .session_storage()
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?;

        // Clear both even if the first one fails
        let mut result = Ok(());
        for store in [local, session].into_iter().flatten() {
            if let Err(e) = store.clear() {
                result = Err(ApiError::Storage(format!("{:?}", e)));
            }
        }
        result
    }
}
