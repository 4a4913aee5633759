//! Edit Habit Modal Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::guard::ActionFuture;

/// The new title, or `None` when there is nothing to save
fn title_change(current: &str, draft: &str) -> Option<String> {
    let draft = draft.trim();
    (!draft.is_empty() && draft != current).then(|| draft.to_string())
}

/// Modal for renaming a habit. Owns its own error display.
#[component]
pub fn EditHabitModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] current_title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    on_save: Callback<String, ActionFuture>,
) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Start from the current title every time the modal opens
    Effect::new(move |_| {
        if open.get() {
            set_draft.set(current_title.get_untracked());
            set_error.set(None);
        }
    });

    let can_save = move || {
        !saving.get() && title_change(&current_title.get(), &draft.get()).is_some()
    };

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let Some(title) = title_change(&current_title.get_untracked(), &draft.get_untracked()) else {
            return;
        };
        set_saving.set(true);
        set_error.set(None);
        let action = on_save.run(title);
        spawn_local(async move {
            match action.await {
                Ok(()) => on_close.run(()),
                Err(e) => {
                    log::error!("Error al editar hábito: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_saving.set(false);
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
                <div class="edit-habit-modal" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h3>"Editar hábito"</h3>
                        <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    <input
                        type="text"
                        class="modal-input"
                        placeholder="Nombre del hábito"
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                save();
                            } else if ev.key() == "Escape" {
                                on_close.run(());
                            }
                        }
                    />
                    {move || error.get().map(|e| view! { <p class="modal-error">{e}</p> })}
                    <div class="modal-actions">
                        <button class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                        <button
                            class="btn-primary"
                            disabled=move || !can_save()
                            on:click=move |_| save()
                        >
                            {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
