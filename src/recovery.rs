//! Fault Recovery
//!
//! Top-level handler for unrecoverable UI failures: log, wipe client storage
//! once, and show a fallback that sends the user back home.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::config::FALLBACK_REDIRECT_MS;
use crate::nav::Route;
use crate::storage::{BrowserStorage, ClientStorage};

pub const FALLBACK_TITLE: &str = "¡Ups! Algo salió mal";
pub const FALLBACK_MESSAGE: &str = "Ha ocurrido un error inesperado en la aplicación.";
pub const FALLBACK_REDIRECT_NOTICE: &str = "Redirigiendo al inicio en unos segundos...";
pub const FALLBACK_RELOAD_LABEL: &str = "Recargar página";
pub const FALLBACK_DEV_HINT: &str =
    "Si eres desarrollador, revisa la consola para más detalles del error.";

pub struct FaultHandler<S> {
    storage: S,
    handled: AtomicBool,
}

impl<S: ClientStorage> FaultHandler<S> {
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            handled: AtomicBool::new(false),
        }
    }

    /// Log the fault and clear client storage. Returns true only for the first fault.
    pub fn handle(&self, cause: &str) -> bool {
        log::error!("Error capturado por el límite de errores: {}", cause);
        if self.handled.swap(true, Ordering::SeqCst) {
            return false;
        }
        if let Err(e) = self.storage.clear_all() {
            log::error!("No se pudo limpiar el almacenamiento: {}", e);
        }
        true
    }
}

static FAULTS: FaultHandler<BrowserStorage> = FaultHandler::new(BrowserStorage);

/// Route a fault to the process-wide handler
pub fn report_fault(cause: &str) -> bool {
    FAULTS.handle(cause)
}

/// Where the fallback sends the user, and when
#[derive(Debug, Clone, PartialEq)]
pub struct Redirect {
    pub route: Route,
    pub after: Duration,
}

pub fn fallback_redirect() -> Redirect {
    Redirect {
        route: Route::Root,
        after: Duration::from_millis(FALLBACK_REDIRECT_MS),
    }
}

/// JS run by the static fallback's timer
fn redirect_script(redirect: &Redirect) -> String {
    format!("window.location.assign('{}')", redirect.route.path())
}

/// Chain our handling after the console panic hook
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if report_fault(&info.to_string()) {
            render_static_fallback();
        }
    }));
}

/// Fallback page for panics. The wasm instance is unusable after a panic, so the
/// page and its timers are plain DOM/JS with no callbacks into Rust.
fn render_static_fallback() {
    let Some(window) = web_sys::window() else { return };
    if let Some(body) = window.document().and_then(|d| d.body()) {
        body.set_inner_html(&fallback_markup());
    }
    let redirect = fallback_redirect();
    let script = js_sys::Function::new_no_args(&redirect_script(&redirect));
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        &script,
        redirect.after.as_millis() as i32,
    );
}

pub fn fallback_markup() -> String {
    format!(
        r#"<div class="error-fallback">
  <h1 class="error-fallback-title">{}</h1>
  <p class="error-fallback-message">{}</p>
  <div class="error-fallback-box">
    <p>{}</p>
    <button class="error-fallback-reload" onclick="window.location.reload()">{}</button>
  </div>
  <div class="error-fallback-hint">{}</div>
</div>"#,
        FALLBACK_TITLE,
        FALLBACK_MESSAGE,
        FALLBACK_REDIRECT_NOTICE,
        FALLBACK_RELOAD_LABEL,
        FALLBACK_DEV_HINT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingStorage {
        clears: Cell<u32>,
        fail: bool,
    }

    impl ClientStorage for CountingStorage {
        fn clear_all(&self) -> Result<(), ApiError> {
            self.clears.set(self.clears.get() + 1);
            if self.fail {
                Err(ApiError::Storage("denegado".into()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_first_fault_clears_storage_once() {
        let handler = FaultHandler::new(CountingStorage::default());

        assert!(handler.handle("render exploded"));
        assert!(!handler.handle("second panic"));
        assert_eq!(handler.storage.clears.get(), 1);
    }

    #[test]
    fn test_storage_failure_still_counts_as_handled() {
        let handler = FaultHandler::new(CountingStorage { fail: true, ..Default::default() });

        assert!(handler.handle("boom"));
        assert!(!handler.handle("boom again"));
        assert_eq!(handler.storage.clears.get(), 1);
    }

    #[test]
    fn test_fallback_redirects_home_after_three_seconds() {
        let redirect = fallback_redirect();
        assert_eq!(redirect.route, Route::Root);
        assert_eq!(redirect.after, Duration::from_millis(3_000));
        assert_eq!(redirect_script(&redirect), "window.location.assign('/')");
    }

    #[test]
    fn test_fallback_markup_offers_reload() {
        let html = fallback_markup();
        assert!(html.contains(FALLBACK_TITLE));
        assert!(html.contains("window.location.reload()"));
        assert!(html.contains(FALLBACK_RELOAD_LABEL));
    }
}
