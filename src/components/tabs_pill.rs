//! Tabs Pill Component
//!
//! Do / Stop / Group switcher with per-tab counts.

use leptos::prelude::*;

use crate::tabs::{Tab, TabCounts};

#[component]
pub fn TabsPill(
    #[prop(into)] active: Signal<Tab>,
    #[prop(into)] counts: Signal<TabCounts>,
    #[prop(into)] on_select: Callback<Tab>,
) -> impl IntoView {
    view! {
        <div class="tabs-pill" role="tablist">
            {Tab::ALL.iter().map(|&tab| {
                let is_active = move || active.get() == tab;
                view! {
                    <button
                        role="tab"
                        class="tab-pill"
                        class:active=is_active
                        aria-selected=move || is_active().to_string()
                        on:click=move |_| on_select.run(tab)
                    >
                        <span class="tab-label">{tab.label()}</span>
                        <span class="tab-count">{move || counts.get().get(tab)}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
