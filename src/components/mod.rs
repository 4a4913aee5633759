//! UI Components
//!
//! Leptos components for the home screen and its modals.

mod confirm_dialog;
mod edit_habit_modal;
mod empty_state;
mod error_fallback;
mod habit_card;
mod home_header;
mod home_screen;
mod registration_modal;
mod streak_animation;
mod suggestions_modal;
mod tabs_pill;

pub use confirm_dialog::ConfirmDialog;
pub use edit_habit_modal::EditHabitModal;
pub use empty_state::{EmptyState, SkeletonGrid};
pub use error_fallback::ErrorFallback;
pub use habit_card::HabitCard;
pub use home_header::HomeHeader;
pub use home_screen::HomeScreen;
pub use registration_modal::RegistrationModal;
pub use streak_animation::StreakAnimation;
pub use suggestions_modal::SuggestionsModal;
pub use tabs_pill::TabsPill;
