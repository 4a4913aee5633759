//! Registration Modal Component
//!
//! Records today's outcome for a habit, with an optional comment.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::guard::{guarded, ActionFuture};
use crate::models::HabitKind;

/// Button labels per registration kind: (question, success, failure)
fn labels(kind: HabitKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        HabitKind::Stop => ("¿Lograste evitarlo hoy?", "Lo evité", "Recaí"),
        _ => ("¿Lo cumpliste hoy?", "Lo hice", "No lo hice"),
    }
}

/// Comment is optional; blank means none
fn comment_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Daily registration modal
///
/// `kind` is the registration kind (group habits already mapped to `do`).
/// The modal does not close itself on success; the caller's callback does.
#[component]
pub fn RegistrationModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] habit_title: Signal<String>,
    #[prop(into)] kind: Signal<HabitKind>,
    #[prop(into)] on_close: Callback<()>,
    on_success: Callback<Option<String>, ActionFuture>,
    on_fail: Callback<Option<String>, ActionFuture>,
) -> impl IntoView {
    let (comment, set_comment) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |success: bool| {
        if submitting.get_untracked() {
            return;
        }
        set_error.set(None);
        let note = comment_value(&comment.get_untracked());
        let action = if success { on_success.run(note) } else { on_fail.run(note) };
        let task = guarded(move |v| set_submitting.set(v), "Error al registrar", action);
        spawn_local(async move {
            match task.await {
                Ok(()) => set_comment.set(String::new()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let close = move || {
        set_error.set(None);
        on_close.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal-overlay" on:click=move |_| close()></div>
                <div class="registration-modal" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <h3>{move || habit_title.get()}</h3>
                        <button class="modal-close" on:click=move |_| close()>"×"</button>
                    </div>
                    <p class="registration-question">{move || labels(kind.get()).0}</p>
                    <textarea
                        class="registration-comment"
                        placeholder="Comentario (opcional)"
                        prop:value=move || comment.get()
                        on:input=move |ev| set_comment.set(event_target_value(&ev))
                    ></textarea>
                    {move || error.get().map(|e| view! { <p class="modal-error">{e}</p> })}
                    <div class="registration-actions">
                        <button
                            class="btn-success"
                            disabled=move || submitting.get()
                            on:click=move |_| submit(true)
                        >
                            {move || labels(kind.get()).1}
                        </button>
                        <button
                            class="btn-danger"
                            disabled=move || submitting.get()
                            on:click=move |_| submit(false)
                        >
                            {move || labels(kind.get()).2}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_comment_is_none() {
        assert_eq!(comment_value("   "), None);
        assert_eq!(comment_value(" me costó "), Some("me costó".to_string()));
    }

    #[test]
    fn test_stop_habits_use_avoidance_labels() {
        assert_eq!(labels(HabitKind::Stop).1, "Lo evité");
        assert_eq!(labels(HabitKind::Do).1, "Lo hice");
    }
}
