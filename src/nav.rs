//! Navigation
//!
//! Routes owned by other screens, plus query-string handling for the home tab.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use url::form_urlencoded;

use crate::models::Habit;
use crate::tabs::Tab;

pub const TAB_PARAM: &str = "tab";

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Root,
    HabitDetail(String),
    GroupHabitDetail(String),
    GroupHome,
    NewHabit,
}

impl Route {
    /// Detail route for a habit; group habits live under the group dashboard
    pub fn for_habit(habit: &Habit) -> Self {
        if habit.is_group {
            Route::GroupHabitDetail(habit.id.clone())
        } else {
            Route::HabitDetail(habit.id.clone())
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Root => "/".to_string(),
            Route::HabitDetail(id) => format!("/home/habit/{}", encode(id)),
            Route::GroupHabitDetail(id) => format!("/dashboard/grupal/habit/{}", encode(id)),
            Route::GroupHome => "/home/grupal".to_string(),
            Route::NewHabit => "/home/nueva?from=home".to_string(),
        }
    }
}

/// Escape an id for use as a single path segment
fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

fn parse_query(search: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
        .into_owned()
        .collect()
}

/// Read the active tab from a `?a=b&tab=...` search string
pub fn tab_from_search(search: &str) -> Tab {
    parse_query(search)
        .into_iter()
        .find(|(k, _)| k == TAB_PARAM)
        .map(|(_, v)| Tab::from_param(&v))
        .unwrap_or_default()
}

/// Rewrite a search string for `tab`, keeping every other parameter.
/// The default tab is represented by the parameter's absence.
pub fn search_with_tab(search: &str, tab: Tab) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.extend_pairs(parse_query(search).iter().filter(|(k, _)| k != TAB_PARAM));
    if tab != Tab::default() {
        query.append_pair(TAB_PARAM, tab.as_param());
    }
    let query = query.finish();
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    }
}

// ========================
// Browser side
// ========================

pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Replace the current history entry's query so the tab survives reload/back
pub fn sync_tab_query(tab: Tab) {
    let Some(window) = web_sys::window() else { return };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    let next = search_with_tab(&search, tab);
    if next == search {
        return;
    }
    let hash = location.hash().unwrap_or_default();
    let url = format!("{}{}{}", pathname, next, hash);
    if let Ok(history) = window.history() {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url)) {
            log::warn!("No se pudo actualizar la URL: {:?}", e);
        }
    }
}

pub fn navigate(route: &Route) {
    let path = route.path();
    log::debug!("Navegando a {}", path);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().assign(&path) {
            log::error!("Navegación fallida a {}: {:?}", path, e);
        }
    }
}

pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tab_defaults_to_do() {
        assert_eq!(tab_from_search(""), Tab::Do);
        assert_eq!(tab_from_search("?from=home"), Tab::Do);
        assert_eq!(tab_from_search("?tab=dejar"), Tab::Stop);
        assert_eq!(tab_from_search("?x=1&tab=grupal"), Tab::Group);
        assert_eq!(tab_from_search("?tab=otra"), Tab::Do);
    }

    #[test]
    fn test_default_tab_is_omitted_from_query() {
        assert_eq!(search_with_tab("?tab=dejar", Tab::Do), "");
        assert_eq!(search_with_tab("", Tab::Do), "");
        assert_eq!(search_with_tab("?from=home&tab=grupal", Tab::Do), "?from=home");
    }

    #[test]
    fn test_non_default_tab_is_written_and_others_kept() {
        assert_eq!(search_with_tab("", Tab::Stop), "?tab=dejar");
        assert_eq!(search_with_tab("?from=home", Tab::Group), "?from=home&tab=grupal");
        assert_eq!(search_with_tab("?tab=dejar", Tab::Group), "?tab=grupal");
    }

    #[test]
    fn test_query_values_are_encoded() {
        assert_eq!(search_with_tab("?q=bajar%2010%20kg", Tab::Stop), "?q=bajar+10+kg&tab=dejar");
        assert_eq!(search_with_tab("?q=a%26b", Tab::Group), "?q=a%26b&tab=grupal");
        assert_eq!(tab_from_search("?q=a%26b&tab=dejar"), Tab::Stop);
    }

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Root.path(), "/");
        assert_eq!(Route::HabitDetail("42".into()).path(), "/home/habit/42");
        assert_eq!(Route::GroupHabitDetail("a b".into()).path(), "/dashboard/grupal/habit/a%20b");
        assert_eq!(Route::GroupHome.path(), "/home/grupal");
        assert_eq!(Route::NewHabit.path(), "/home/nueva?from=home");
    }
}
