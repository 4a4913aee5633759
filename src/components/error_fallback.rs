//! Error Fallback Component
//!
//! Shown by the root error boundary. Client storage has already been wiped
//! by the time this renders; the page returns home on its own.

use leptos::prelude::*;

use crate::nav;
use crate::recovery::{
    fallback_redirect, report_fault, Redirect, FALLBACK_DEV_HINT, FALLBACK_MESSAGE,
    FALLBACK_REDIRECT_NOTICE, FALLBACK_RELOAD_LABEL, FALLBACK_TITLE,
};

#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let cause = errors
        .get_untracked()
        .into_iter()
        .map(|(_, e)| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    report_fault(&cause);

    let Redirect { route, after } = fallback_redirect();
    let redirect = set_timeout_with_handle(move || nav::navigate(&route), after).ok();
    on_cleanup(move || {
        if let Some(handle) = redirect {
            handle.clear();
        }
    });

    view! {
        <div class="error-fallback">
            <h1 class="error-fallback-title">{FALLBACK_TITLE}</h1>
            <p class="error-fallback-message">{FALLBACK_MESSAGE}</p>
            <div class="error-fallback-box">
                <p>{FALLBACK_REDIRECT_NOTICE}</p>
                <button class="error-fallback-reload" on:click=move |_| nav::reload_page()>
                    {FALLBACK_RELOAD_LABEL}
                </button>
            </div>
            <div class="error-fallback-hint">{FALLBACK_DEV_HINT}</div>
        </div>
    }
}
