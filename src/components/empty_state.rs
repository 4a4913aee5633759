//! Empty State Components
//!
//! Placeholders for the habit grid: loading skeleton, load error, no habits.

use leptos::prelude::*;

use crate::tabs::Tab;

const SKELETON_CARDS: usize = 6;

fn empty_copy(tab: Tab) -> (&'static str, &'static str) {
    match tab {
        Tab::Do => (
            "Aún no tienes hábitos por hacer",
            "Crea uno nuevo o pide sugerencias a la IA para empezar.",
        ),
        Tab::Stop => (
            "Aún no tienes hábitos por dejar",
            "Registra lo que quieres evitar y sigue tu progreso día a día.",
        ),
        Tab::Group => (
            "No participas en hábitos grupales",
            "Únete a un grupo o crea uno desde la sección Grupal.",
        ),
    }
}

/// Error or empty-list placeholder. An error wins over the empty copy.
#[component]
pub fn EmptyState(
    #[prop(into)] tab: Signal<Tab>,
    #[prop(into, optional)] error: Option<String>,
) -> impl IntoView {
    match error {
        Some(message) => view! {
            <div class="empty-state error">
                <div class="empty-state-icon">"⚠️"</div>
                <h3>"No pudimos cargar tus hábitos"</h3>
                <p>{message}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="empty-state">
                <div class="empty-state-icon">"🌱"</div>
                <h3>{move || empty_copy(tab.get()).0}</h3>
                <p>{move || empty_copy(tab.get()).1}</p>
            </div>
        }
        .into_any(),
    }
}

/// Grid of placeholder cards shown only on the first load
#[component]
pub fn SkeletonGrid() -> impl IntoView {
    view! {
        <div class="habit-grid skeleton" aria-busy="true">
            {(0..SKELETON_CARDS).map(|_| view! {
                <div class="habit-card skeleton-card">
                    <div class="skeleton-line short"></div>
                    <div class="skeleton-line"></div>
                    <div class="skeleton-line"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
