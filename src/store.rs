//! Habit List Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Habit;

/// Habit list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct HabitsState {
    /// Every habit of the signed-in user, all kinds
    pub habits: Vec<Habit>,
    /// A list fetch is in flight
    pub loading: bool,
    /// Last load error, cleared by the next successful load
    pub error: Option<String>,
}

impl HabitsState {
    /// State before the first fetch: loading, so the skeleton shows from the first render
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Type alias for the store
pub type HabitsStore = Store<HabitsState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_habits(store: &HabitsStore, habits: Vec<Habit>) {
    *store.habits().write() = habits;
    *store.error().write() = None;
}

pub fn store_set_loading(store: &HabitsStore, loading: bool) {
    *store.loading().write() = loading;
}

pub fn store_set_error(store: &HabitsStore, error: Option<String>) {
    *store.error().write() = error;
}

/// Remove a habit from the store by ID
pub fn store_remove_habit(store: &HabitsStore, habit_id: &str) {
    store.habits().write().retain(|h| h.id != habit_id);
}

/// Rename a habit in place
pub fn store_rename_habit(store: &HabitsStore, habit_id: &str, title: &str) {
    if let Some(habit) = store.habits().write().iter_mut().find(|h| h.id == habit_id) {
        habit.title = title.to_string();
    }
}
