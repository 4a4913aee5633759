//! Async Action Guards
//!
//! Loading-flag bookkeeping shared by every control that fires a request.

use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;

use crate::error::ApiError;
use crate::models::{Habit, HabitId};

/// Boxed, single-threaded result of an async UI action
pub type ActionFuture = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

/// Raise the loading flag now, then run `fut`. The flag is lowered once the
/// future settles either way; errors are logged with `label` and handed back
/// for the caller to display or drop. Nothing is retried.
pub fn guarded<T, E, F>(
    set_loading: impl Fn(bool) + 'static,
    label: &'static str,
    fut: F,
) -> impl Future<Output = Result<T, E>>
where
    E: Display,
    F: Future<Output = Result<T, E>>,
{
    set_loading(true);
    async move {
        let result = fut.await;
        set_loading(false);
        if let Err(e) = &result {
            log::error!("{}: {}", label, e);
        }
        result
    }
}

/// Remove the staged habit; `clear` runs only after the removal succeeded
pub async fn confirm_removal<R, Fut>(
    staged: Option<Habit>,
    remove: R,
    clear: impl FnOnce(),
) -> Result<(), ApiError>
where
    R: FnOnce(HabitId) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let Some(habit) = staged else {
        return Ok(());
    };
    log::info!("Eliminando hábito {} ({})", habit.id, habit.title);
    remove(habit.id).await?;
    clear();
    Ok(())
}
