//! Streak Animation Component
//!
//! Full-screen celebration overlay shown after a successful registration.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::STREAK_OVERLAY_MS;

#[component]
pub fn StreakAnimation(
    streak: u32,
    first_time: bool,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    // Auto-dismiss; the timer must not outlive the overlay
    let dismiss = set_timeout_with_handle(
        move || on_close.run(()),
        Duration::from_millis(STREAK_OVERLAY_MS),
    )
    .ok();
    on_cleanup(move || {
        if let Some(handle) = dismiss {
            handle.clear();
        }
    });

    let headline = if first_time {
        "¡Primer día completado!"
    } else {
        "¡Tu racha sigue creciendo!"
    };
    let unit = if streak == 1 { "día" } else { "días" };

    view! {
        <div class="streak-overlay" on:click=move |_| on_close.run(())>
            <div class="streak-card" class:first-time=first_time>
                <div class="streak-flame">"🔥"</div>
                <div class="streak-count">{streak}</div>
                <div class="streak-unit">{unit}</div>
                <p class="streak-headline">{headline}</p>
                <button class="btn-primary" on:click=move |ev| {
                    ev.stop_propagation();
                    on_close.run(());
                }>
                    "Continuar"
                </button>
            </div>
        </div>
    }
}
