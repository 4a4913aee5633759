//! Habit Card Component
//!
//! One habit in the home grid: streaks, today's log, options menu,
//! registration and the streak celebration.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use super::{EditHabitModal, RegistrationModal, StreakAnimation};
use crate::card_state::{menu_close_delay, StreakBaseline};
use crate::guard::{guarded, ActionFuture};
use crate::models::{Habit, TodayLog};
use crate::nav::{self, Route};

/// Habit card
///
/// # Arguments
/// * `habit` - Live view of the habit (resynced after background refreshes)
/// * `on_done` / `on_fail` - Register today's outcome with an optional comment
/// * `on_request_delete` - Ask the parent to stage a delete confirmation
/// * `on_request_edit` - Save a new title
#[component]
pub fn HabitCard(
    #[prop(into)] habit: Signal<Habit>,
    on_done: Callback<Option<String>, ActionFuture>,
    on_fail: Callback<Option<String>, ActionFuture>,
    on_request_delete: Callback<(), ActionFuture>,
    on_request_edit: Callback<String, ActionFuture>,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let (editing, set_editing) = signal(false);
    let (registering, set_registering) = signal(false);
    let (animating, set_animating) = signal(false);
    let (baseline, set_baseline) =
        signal(StreakBaseline::current(habit.with_untracked(Habit::current_streak)));
    let card_ref = NodeRef::<html::Div>::new();

    // Close the menu on a press outside the card, after the grace delay
    let outside = window_event_listener(ev::mousedown, move |ev| {
        let Some(card) = card_ref.get_untracked() else { return };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .is_some_and(|node| card.contains(Some(&node)));
        if let Some(delay) = menu_close_delay(menu_open.get_untracked(), inside) {
            Timeout::new(delay, move || set_menu_open.set(false)).forget();
        }
    });
    on_cleanup(move || outside.remove());

    // Resync the overlay baseline when the streak changes underneath us
    let current_streak = Memo::new(move |_| habit.with(Habit::current_streak));
    Effect::new(move |_| {
        let streak = current_streak.get();
        if !animating.get_untracked() {
            set_baseline.set(StreakBaseline::current(streak));
        }
    });

    let request_delete = move |_| {
        set_menu_open.set(false);
        let task = guarded(
            move |v| set_deleting.set(v),
            "Error al solicitar eliminación",
            on_request_delete.run(()),
        );
        spawn_local(async move {
            let _ = task.await;
        });
    };

    let open_detail = move |_| nav::navigate(&Route::for_habit(&habit.get_untracked()));

    let replay_streak = move |_| {
        set_baseline.set(StreakBaseline::current(current_streak.get_untracked()));
        set_animating.set(true);
    };

    let registration_success = Callback::new(move |comment: Option<String>| -> ActionFuture {
        let previous = habit.with_untracked(Habit::current_streak);
        let done = on_done.run(comment);
        Box::pin(async move {
            done.await?;
            set_registering.set(false);
            set_baseline.set(StreakBaseline::after_success(previous));
            set_animating.set(true);
            Ok(())
        })
    });

    let registration_fail = Callback::new(move |comment: Option<String>| -> ActionFuture {
        let failed = on_fail.run(comment);
        Box::pin(async move {
            failed.await?;
            set_registering.set(false);
            Ok(())
        })
    });

    let title = Signal::derive(move || habit.with(|h| h.title.clone()));
    let registration_kind = Signal::derive(move || habit.with(Habit::registration_kind));

    view! {
        <div class="habit-card" class:is-group=move || habit.with(|h| h.is_group) node_ref=card_ref>
            <div class="habit-card-header">
                <span class="habit-kind-badge">{move || habit.with(Habit::kind_label)}</span>
                {move || habit.with(|h| h.group.as_ref().map(|g| g.name.clone())).map(|name| view! {
                    <span class="habit-group-name">{name}</span>
                })}
                <div class="habit-card-menu">
                    <button
                        class="menu-toggle"
                        aria-haspopup="menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        "⋮"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="card-menu" role="menu">
                            <button
                                class="card-menu-item"
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    set_editing.set(true);
                                }
                            >
                                "✏️ Editar"
                            </button>
                            <button
                                class="card-menu-item danger"
                                disabled=move || deleting.get()
                                on:click=request_delete
                            >
                                {move || if deleting.get() { "⏳ Eliminando..." } else { "🗑️ Eliminar" }}
                            </button>
                        </div>
                    </Show>
                </div>
            </div>

            <button class="habit-title" on:click=open_detail>
                {move || title.get()}
            </button>

            <div class="habit-streaks">
                <button class="streak-flame-btn" title="Ver racha" on:click=replay_streak>
                    "🔥"
                </button>
                <span class="streak-current">
                    {move || format!("{} días", current_streak.get())}
                </span>
                <span class="streak-best">
                    {move || format!("Mejor: {} días", habit.with(Habit::best_streak))}
                </span>
            </div>

            <div class="habit-today">
                {move || {
                    let (today, available_at) =
                        habit.with(|h| (h.today.clone(), h.available_at.clone()));
                    match (today, available_at) {
                        (Some(log), _) if log.completed => today_badge(&log).into_any(),
                        (None, Some(at)) => view! {
                            <span class="habit-available-at">{format!("🕒 Disponible {}", at)}</span>
                        }
                        .into_any(),
                        _ => view! {
                            <button
                                class="btn-primary register-btn"
                                disabled=move || deleting.get()
                                on:click=move |_| set_registering.set(true)
                            >
                                "Registrar"
                            </button>
                        }
                        .into_any(),
                    }
                }}
                {move || habit.with(|h| h.today_comment().map(str::to_string)).map(|c| view! {
                    <p class="today-comment">{format!("\"{}\"", c)}</p>
                })}
            </div>

            <RegistrationModal
                open=registering
                habit_title=title
                kind=registration_kind
                on_close=move |_| set_registering.set(false)
                on_success=registration_success
                on_fail=registration_fail
            />

            <EditHabitModal
                open=editing
                current_title=title
                on_close=move |_| set_editing.set(false)
                on_save=on_request_edit
            />

            {move || animating.get().then(|| {
                let shown = baseline.get_untracked();
                view! {
                    <StreakAnimation
                        streak=shown.streak
                        first_time=shown.first_time
                        on_close=move |_| set_animating.set(false)
                    />
                }
            })}
        </div>
    }
}

/// Badge for a completed log entry
fn today_badge(log: &TodayLog) -> impl IntoView {
    let (class, label) = if log.is_success() {
        ("today-badge success", "✅ Completado hoy")
    } else {
        ("today-badge failure", "📝 Registrado hoy")
    };
    view! { <span class=class>{label}</span> }
}
