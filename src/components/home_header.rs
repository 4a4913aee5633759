//! Home Header Component

use leptos::prelude::*;

use crate::context::{use_habits, use_subscription};
use crate::greeting;
use crate::nav::{self, Route};

const PREMIUM_ONLY: &str = "Solo disponible para usuarios premium";

/// Title, date, greeting and the home actions
#[component]
pub fn HomeHeader(#[prop(into)] on_open_suggestions: Callback<()>) -> impl IntoView {
    let ctx = use_habits();
    let subscription = use_subscription();
    let (date, salute) = greeting::today();

    let busy = move || ctx.is_loading();

    view! {
        <header class="home-header">
            <div class="home-header-text">
                <h1>"Mis Hábitos"</h1>
                <p class="home-date">{date}</p>
                <p class="home-greeting">{salute}</p>
            </div>
            <div class="home-header-actions">
                <button
                    class="btn-primary"
                    disabled=busy
                    on:click=move |_| nav::navigate(&Route::NewHabit)
                >
                    "+ Nuevo"
                </button>
                <button
                    class="btn-secondary"
                    disabled=busy
                    on:click=move |_| on_open_suggestions.run(())
                >
                    "✨ IA Sugerencias"
                </button>
                // Non-premium users see the control disabled, with the reason
                <button
                    class="btn-secondary"
                    class:locked=move || !subscription.is_premium()
                    disabled=move || busy() || !subscription.is_premium()
                    title=move || (!subscription.is_premium()).then_some(PREMIUM_ONLY)
                    on:click=move |_| {
                        if subscription.is_premium() {
                            nav::navigate(&Route::GroupHome);
                        }
                    }
                >
                    "👥 Grupal"
                </button>
            </div>
        </header>
    }
}
