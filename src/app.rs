//! Habitos Frontend App
//!
//! Root component: provides the habit-list and subscription contexts and
//! guards the home screen with the error boundary.
//!
//! The boundary catches `Err` values rendered by descendants. No view renders
//! a `Result` today: load and mutation failures are shown inline, and panics
//! go through `recovery::install_panic_hook`. Any fallible view added later is
//! routed to `ErrorFallback` without further wiring.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{ErrorFallback, HomeScreen};
use crate::config::AppConfig;
use crate::context::{HabitsContext, SubscriptionContext};
use crate::store::HabitsState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(HabitsState::new());
    let habits = HabitsContext::new(store, config.clone());
    let subscription = SubscriptionContext::new();

    // Provide context to all children
    provide_context(habits);
    provide_context(subscription);

    // Initial load
    log::info!("Cargando hábitos desde {}", config.api_base);
    habits.reload();
    spawn_local(subscription.load(config));

    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors /> }>
            <HomeScreen />
        </ErrorBoundary>
    }
}
