//! AI Suggestions Modal Component
//!
//! Two phases: capture a goal, then review and bulk-register the suggested habits.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::BULK_REFRESH_DELAY_MS;
use crate::context::use_habits;
use crate::models::Suggestions;
use crate::suggestion_flow::{SuggestionFlow, SuggestionKind};

#[component]
pub fn SuggestionsModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_habits();
    let flow = RwSignal::new(SuggestionFlow::default());

    let reviewing = Memo::new(move |_| flow.with(SuggestionFlow::reviewing));
    let suggestions = Memo::new(move |_| {
        flow.with(|f| f.suggestions.clone().unwrap_or_default())
    });

    let reset = move || {
        flow.update(SuggestionFlow::reset);
        on_close.run(());
    };

    let request = move || {
        let Some((seq, goal)) = flow
            .try_update(|f| f.begin_request().map(|goal| (f.request_seq(), goal)))
            .flatten()
        else {
            return;
        };
        let config = ctx.config();
        log::info!("Solicitando sugerencias para: {}", goal);
        spawn_local(async move {
            let result = api::request_suggestions(&config, &goal).await;
            if let Err(e) = &result {
                log::error!("Error al obtener sugerencias: {}", e);
            }
            flow.update(|f| f.finish_request(seq, result));
        });
    };

    let submit = move || {
        let Some(body) = flow.try_update(SuggestionFlow::begin_submit).flatten() else {
            return;
        };
        let config = ctx.config();
        spawn_local(async move {
            let result = api::register_bulk(&config, &body).await;
            let registered = result.is_ok();
            if let Err(e) = &result {
                log::error!("Error al registrar hábitos: {}", e);
            }
            flow.update(|f| f.finish_submit(result));
            if !registered {
                return;
            }
            TimeoutFuture::new(BULK_REFRESH_DELAY_MS).await;
            ctx.refresh().await;
            // Skip the dismissal if the user already closed or restarted the flow
            if flow.with_untracked(|f| f.success.is_some()) {
                reset();
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-overlay" on:click=move |_| reset()></div>
                <div class="suggestions-modal" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h3>"✨ Sugerencias con IA"</h3>
                        <button class="modal-close" on:click=move |_| reset()>"×"</button>
                    </div>

                    <Show
                        when=move || reviewing.get()
                        fallback=move || view! {
                            <div class="suggestions-goal">
                                <p class="modal-hint">
                                    "Cuéntanos tu meta y te sugeriremos hábitos para lograrla."
                                </p>
                                <input
                                    type="text"
                                    class="modal-input"
                                    placeholder="Ej: bajar 10 kg, leer más, dormir mejor..."
                                    prop:value=move || flow.with(|f| f.goal.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        flow.update(|f| f.goal = value);
                                    }
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            request();
                                        }
                                    }
                                />
                                <button
                                    class="btn-primary"
                                    disabled=move || !flow.with(SuggestionFlow::can_request)
                                    on:click=move |_| request()
                                >
                                    {move || if flow.with(|f| f.requesting) {
                                        "Generando..."
                                    } else {
                                        "✨ Obtener Sugerencias"
                                    }}
                                </button>
                            </div>
                        }
                    >
                        <div class="suggestions-review">
                            <button
                                class="btn-link"
                                on:click=move |_| flow.update(SuggestionFlow::change_goal)
                            >
                                "← Cambiar meta"
                            </button>
                            <p class="suggestions-goal-line">
                                {move || format!("Meta: {}", flow.with(|f| f.goal.clone()))}
                            </p>
                            {suggestion_list(flow, suggestions, SuggestionKind::ToDo)}
                            {suggestion_list(flow, suggestions, SuggestionKind::ToStop)}
                        </div>
                    </Show>

                    {move || flow.with(|f| f.error.clone()).map(|e| view! {
                        <p class="modal-error">{e}</p>
                    })}
                    {move || flow.with(|f| f.success.clone()).map(|msg| view! {
                        <p class="modal-success">{format!("✅ {}", msg)}</p>
                    })}

                    <Show when=move || reviewing.get()>
                        <div class="modal-actions">
                            <button class="btn-secondary" on:click=move |_| reset()>
                                "Cancelar"
                            </button>
                            <span class="modal-hint">"Selecciona los hábitos que quieres agregar"</span>
                            <button
                                class="btn-primary"
                                disabled=move || !flow.with(SuggestionFlow::can_submit)
                                on:click=move |_| submit()
                            >
                                {move || if flow.with(|f| f.submitting) {
                                    "Registrando..."
                                } else {
                                    "Registrar Seleccionados"
                                }}
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}

/// One toggleable list per suggestion kind; items toggle on click or via their checkbox
fn suggestion_list(
    flow: RwSignal<SuggestionFlow>,
    suggestions: Memo<Suggestions>,
    kind: SuggestionKind,
) -> impl IntoView {
    let heading = match kind {
        SuggestionKind::ToDo => "Hábitos para hacer",
        SuggestionKind::ToStop => "Hábitos para dejar",
    };
    let items = move || {
        suggestions.with(|s| match kind {
            SuggestionKind::ToDo => s.to_do.clone(),
            SuggestionKind::ToStop => s.to_stop.clone(),
        })
    };

    view! {
        <div class="suggestion-group">
            <h4>{heading}</h4>
            <ul class="suggestion-list">
                {move || items().into_iter().enumerate().map(|(index, text)| {
                    let checked = move || flow.with(|f| f.selection.is_checked(kind, index));
                    view! {
                        <li
                            class="suggestion-item"
                            class:selected=checked
                            on:click=move |_| flow.update(|f| f.toggle(kind, index))
                        >
                            <input
                                type="checkbox"
                                prop:checked=checked
                                on:click=|ev| ev.stop_propagation()
                                on:change=move |_| flow.update(|f| f.toggle(kind, index))
                            />
                            <span>{text}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </div>
    }
}
