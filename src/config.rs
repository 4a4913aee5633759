//! Runtime Configuration
//!
//! Read from an optional `window.__HABITOS_CONFIG__` object, with build-time defaults.

use serde::Deserialize;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__HABITOS_CONFIG__";

/// Delay before an outside click closes a card's options menu
pub const MENU_CLOSE_GRACE_MS: u32 = 100;
/// Delay between a successful bulk registration and the list refresh
pub const BULK_REFRESH_DELAY_MS: u32 = 2_000;
/// Delay before the error fallback navigates home
pub const FALLBACK_REDIRECT_MS: u64 = 3_000;
/// How long the streak overlay stays up without interaction
pub const STREAK_OVERLAY_MS: u64 = 4_000;

fn default_api_base() -> String {
    option_env!("HABITOS_API_BASE").unwrap_or("/api").to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the page, falling back to defaults when absent or malformed
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_js(raw)
    }

    pub fn from_js(raw: JsValue) -> Self {
        if raw.is_undefined() || raw.is_null() {
            return Self::default();
        }
        serde_wasm_bindgen::from_value(raw).unwrap_or_default()
    }

    /// Join an endpoint path onto the API base
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
