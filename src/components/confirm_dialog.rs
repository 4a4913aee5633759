//! Confirm Dialog Component
//!
//! Generic modal confirmation for destructive actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::guard::{guarded, ActionFuture};

fn button_label(loading: bool, label: &str, loading_label: Option<&str>) -> String {
    match loading_label {
        Some(busy) if loading => busy.to_string(),
        _ => label.to_string(),
    }
}

/// Modal confirmation dialog
///
/// Renders nothing while `open` is false. Confirming runs `on_confirm` with a
/// loading flag raised; a failure is logged and shown inline, and the dialog
/// stays open. Closing is left to the caller's success path.
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `title` - Heading text
/// * `message` - Body text
/// * `confirm_label` - Label of the confirm button (defaults to "Eliminar")
/// * `loading_label` - Label while the action runs (defaults to `confirm_label`)
/// * `on_close` - Cancel / backdrop click
/// * `on_confirm` - Async action run on confirm
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into, optional)] confirm_label: Option<String>,
    #[prop(into, optional)] loading_label: Option<String>,
    #[prop(into)] on_close: Callback<()>,
    on_confirm: Callback<(), ActionFuture>,
) -> impl IntoView {
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let confirm_label = confirm_label.unwrap_or_else(|| "Eliminar".to_string());

    // A fresh opening starts without the previous failure
    Effect::new(move |_| {
        if open.get() {
            set_error.set(None);
        }
    });

    let confirm = move |_| {
        if loading.get_untracked() {
            return;
        }
        set_error.set(None);
        let task = guarded(
            move |v| set_loading.set(v),
            "Error en la confirmación",
            on_confirm.run(()),
        );
        spawn_local(async move {
            if let Err(e) = task.await {
                set_error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
                <div class="confirm-dialog" role="dialog" aria-modal="true">
                    <h3 class="confirm-dialog-title">{title.clone()}</h3>
                    <p class="confirm-dialog-message">{move || message.get()}</p>
                    {move || error.get().map(|e| view! { <p class="modal-error">{e}</p> })}
                    <div class="confirm-dialog-actions">
                        <button
                            class="btn-secondary"
                            disabled=move || loading.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancelar"
                        </button>
                        <button
                            class="btn-danger"
                            disabled=move || loading.get()
                            on:click=confirm
                        >
                            {
                                let label = confirm_label.clone();
                                let busy_label = loading_label.clone();
                                move || button_label(loading.get(), &label, busy_label.as_deref())
                            }
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
