//! Home Screen Component
//!
//! Header, tab switcher and the filtered habit grid, plus the delete
//! confirmation and AI suggestions modals.

use leptos::prelude::*;

use super::{
    ConfirmDialog, EmptyState, HabitCard, HomeHeader, SkeletonGrid, SuggestionsModal, TabsPill,
};
use crate::context::{use_habits, HabitsContext};
use crate::guard::{confirm_removal, ActionFuture};
use crate::models::Habit;
use crate::nav;
use crate::tabs::{filter_habits, Tab, TabCounts};

/// What the grid area shows
#[derive(Debug, Clone, PartialEq)]
enum GridView {
    Skeleton,
    Error(String),
    Empty,
    Cards,
}

fn grid_view(loading: bool, has_habits: bool, error: Option<String>, has_visible: bool) -> GridView {
    if loading && !has_habits {
        GridView::Skeleton
    } else if let Some(message) = error {
        GridView::Error(message)
    } else if !has_visible {
        GridView::Empty
    } else {
        GridView::Cards
    }
}

fn delete_message(habit: Option<&Habit>) -> String {
    let title = habit.map(|h| h.title.as_str()).unwrap_or_default();
    format!(
        "¿Seguro que deseas eliminar \"{}\"? Esta acción no se puede deshacer.",
        title
    )
}

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_habits();

    let (active_tab, set_active_tab) = signal(nav::tab_from_search(&nav::current_search()));
    let (pending_delete, set_pending_delete) = signal::<Option<Habit>>(None);
    let (suggestions_open, set_suggestions_open) = signal(false);

    // Keep `?tab=` in step with the active tab
    Effect::new(move |_| nav::sync_tab_query(active_tab.get()));

    let counts = Memo::new(move |_| TabCounts::from_habits(&ctx.habits()));
    let visible = Memo::new(move |_| filter_habits(&ctx.habits(), active_tab.get()));
    let view_mode = Memo::new(move |_| {
        grid_view(
            ctx.is_loading(),
            !ctx.habits().is_empty(),
            ctx.error(),
            visible.with(|v| !v.is_empty()),
        )
    });

    let confirm_delete = Callback::new(move |_: ()| -> ActionFuture {
        let staged = pending_delete.get_untracked();
        Box::pin(confirm_removal(
            staged,
            move |id| ctx.remove_habit(id),
            move || set_pending_delete.set(None),
        ))
    });

    view! {
        <div class="home-screen">
            <HomeHeader on_open_suggestions=move |_| set_suggestions_open.set(true) />

            <TabsPill
                active=active_tab
                counts=counts
                on_select=move |tab: Tab| set_active_tab.set(tab)
            />

            {move || match view_mode.get() {
                GridView::Skeleton => view! { <SkeletonGrid /> }.into_any(),
                GridView::Error(message) => view! {
                    <EmptyState tab=active_tab error=message />
                }
                .into_any(),
                GridView::Empty => view! { <EmptyState tab=active_tab /> }.into_any(),
                GridView::Cards => view! {
                    <div class="habit-grid">
                        <For
                            each=move || visible.get()
                            key=|habit| habit.id.clone()
                            children=move |habit| habit_card(ctx, set_pending_delete, habit)
                        />
                    </div>
                }
                .into_any(),
            }}

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Eliminar hábito"
                message=Signal::derive(move || pending_delete.with(|h| delete_message(h.as_ref())))
                confirm_label="Eliminar definitivamente"
                loading_label="Eliminando..."
                on_close=move |_| set_pending_delete.set(None)
                on_confirm=confirm_delete
            />

            <SuggestionsModal
                open=suggestions_open
                on_close=move |_| set_suggestions_open.set(false)
            />
        </div>
    }
}

/// Card wired to the habit-list context. The card follows the store entry so
/// refreshed streaks reach it without remounting.
fn habit_card(
    ctx: HabitsContext,
    set_pending_delete: WriteSignal<Option<Habit>>,
    snapshot: Habit,
) -> impl IntoView {
    let id = snapshot.id.clone();
    let habit = {
        let id = id.clone();
        Signal::derive(move || ctx.find_habit(&id).unwrap_or_else(|| snapshot.clone()))
    };

    let on_done = {
        let id = id.clone();
        Callback::new(move |comment: Option<String>| -> ActionFuture {
            Box::pin(ctx.mark_done(id.clone(), comment))
        })
    };
    let on_fail = {
        let id = id.clone();
        Callback::new(move |comment: Option<String>| -> ActionFuture {
            Box::pin(ctx.mark_fail(id.clone(), comment))
        })
    };
    let on_request_delete = Callback::new(move |_: ()| -> ActionFuture {
        set_pending_delete.set(Some(habit.get_untracked()));
        Box::pin(async { Ok(()) })
    });
    let on_request_edit = Callback::new(move |title: String| -> ActionFuture {
        Box::pin(ctx.edit_habit(id.clone(), title))
    });

    view! {
        <HabitCard
            habit=habit
            on_done=on_done
            on_fail=on_fail
            on_request_delete=on_request_delete
            on_request_edit=on_request_edit
        />
    }
}
