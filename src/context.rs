//! Application Context
//!
//! Shared collaborators provided via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::{Habit, HabitId, Outcome, Subscription};
use crate::store::{
    store_remove_habit, store_rename_habit, store_set_error, store_set_habits, store_set_loading,
    HabitsStateStoreFields, HabitsStore,
};

/// Habit-list collaborator: the only path through which habits are read or mutated
#[derive(Clone, Copy)]
pub struct HabitsContext {
    store: HabitsStore,
    config: StoredValue<AppConfig>,
}

impl HabitsContext {
    pub fn new(store: HabitsStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn habits(&self) -> Vec<Habit> {
        self.store.habits().get()
    }

    pub fn find_habit(&self, id: &str) -> Option<Habit> {
        self.store
            .habits()
            .with(|habits| habits.iter().find(|h| h.id == id).cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.store.loading().get()
    }

    pub fn error(&self) -> Option<String> {
        self.store.error().get()
    }

    /// Fetch the list again; failures land in the error slot
    pub async fn refresh(self) {
        store_set_loading(&self.store, true);
        match api::list_habits(&self.config()).await {
            Ok(habits) => {
                log::info!("Cargados {} hábitos", habits.len());
                store_set_habits(&self.store, habits);
            }
            Err(e) => {
                log::error!("Error al cargar hábitos: {}", e);
                store_set_error(&self.store, Some(e.to_string()));
            }
        }
        store_set_loading(&self.store, false);
    }

    /// Trigger a background refresh
    pub fn reload(&self) {
        let ctx = *self;
        spawn_local(ctx.refresh());
    }

    pub async fn mark_done(self, id: HabitId, comment: Option<String>) -> Result<(), ApiError> {
        api::register_outcome(&self.config(), &id, Outcome::Success, comment.as_deref()).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn mark_fail(self, id: HabitId, comment: Option<String>) -> Result<(), ApiError> {
        api::register_outcome(&self.config(), &id, Outcome::Failure, comment.as_deref()).await?;
        self.refresh().await;
        Ok(())
    }

    pub async fn remove_habit(self, id: HabitId) -> Result<(), ApiError> {
        api::delete_habit(&self.config(), &id).await?;
        store_remove_habit(&self.store, &id);
        Ok(())
    }

    pub async fn edit_habit(self, id: HabitId, title: String) -> Result<(), ApiError> {
        api::edit_habit(&self.config(), &id, &title).await?;
        store_rename_habit(&self.store, &id, &title);
        Ok(())
    }
}

pub fn use_habits() -> HabitsContext {
    use_context::<HabitsContext>().expect("HabitsContext should be provided")
}

/// Subscription collaborator; premium users may use group habits
#[derive(Clone, Copy)]
pub struct SubscriptionContext {
    subscription: RwSignal<Option<Subscription>>,
}

impl SubscriptionContext {
    pub fn new() -> Self {
        Self {
            subscription: RwSignal::new(None),
        }
    }

    pub fn is_premium(&self) -> bool {
        self.subscription
            .with(|s| s.as_ref().is_some_and(Subscription::allows_groups))
    }

    pub async fn load(self, config: AppConfig) {
        match api::current_subscription(&config).await {
            Ok(subscription) => self.subscription.set(subscription),
            Err(e) => log::warn!("No se pudo cargar la suscripción: {}", e),
        }
    }
}

pub fn use_subscription() -> SubscriptionContext {
    use_context::<SubscriptionContext>().expect("SubscriptionContext should be provided")
}
