//! Home Tabs
//!
//! Tab selection, filter predicates and per-tab counts.

use crate::models::{Habit, HabitKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Do,
    Stop,
    Group,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Do, Tab::Stop, Tab::Group];

    /// Unknown values fall back to the default tab
    pub fn from_param(value: &str) -> Self {
        match value {
            "dejar" => Tab::Stop,
            "grupal" => Tab::Group,
            _ => Tab::Do,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Tab::Do => HabitKind::Do.as_str(),
            Tab::Stop => HabitKind::Stop.as_str(),
            Tab::Group => HabitKind::Group.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Do => "Hacer",
            Tab::Stop => "Dejar",
            Tab::Group => "Grupales",
        }
    }

    /// Group tab shows every group habit; the others show non-group habits of that kind
    pub fn matches(&self, habit: &Habit) -> bool {
        match self {
            Tab::Group => habit.is_group,
            Tab::Do => !habit.is_group && habit.kind == HabitKind::Do,
            Tab::Stop => !habit.is_group && habit.kind == HabitKind::Stop,
        }
    }
}

pub fn filter_habits(habits: &[Habit], tab: Tab) -> Vec<Habit> {
    habits.iter().filter(|h| tab.matches(h)).cloned().collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabCounts {
    pub to_do: usize,
    pub to_stop: usize,
    pub group: usize,
}

impl TabCounts {
    pub fn from_habits(habits: &[Habit]) -> Self {
        let count = |tab: Tab| habits.iter().filter(|h| tab.matches(h)).count();
        Self {
            to_do: count(Tab::Do),
            to_stop: count(Tab::Stop),
            group: count(Tab::Group),
        }
    }

    pub fn get(&self, tab: Tab) -> usize {
        match tab {
            Tab::Do => self.to_do,
            Tab::Stop => self.to_stop,
            Tab::Group => self.group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HabitKind;
    use pretty_assertions::assert_eq;

    fn make_habit(id: u32, kind: HabitKind, is_group: bool) -> Habit {
        Habit {
            id: id.to_string(),
            title: format!("Habit {}", id),
            kind,
            is_group,
            group: None,
            streak: None,
            today: None,
            available_at: None,
        }
    }

    fn sample() -> Vec<Habit> {
        vec![
            make_habit(1, HabitKind::Do, false),
            make_habit(2, HabitKind::Stop, false),
            make_habit(3, HabitKind::Do, true),   // group habit of kind do
            make_habit(4, HabitKind::Group, true),
            make_habit(5, HabitKind::Do, false),
            make_habit(6, HabitKind::Stop, true), // group habit of kind stop
        ]
    }

    fn ids(habits: &[Habit]) -> Vec<&str> {
        habits.iter().map(|h| h.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_tab() {
        let habits = sample();
        assert_eq!(ids(&filter_habits(&habits, Tab::Do)), vec!["1", "5"]);
        assert_eq!(ids(&filter_habits(&habits, Tab::Stop)), vec!["2"]);
        assert_eq!(ids(&filter_habits(&habits, Tab::Group)), vec!["3", "4", "6"]);
    }

    #[test]
    fn test_counts_match_filtered_lengths() {
        let habits = sample();
        let counts = TabCounts::from_habits(&habits);
        for tab in Tab::ALL {
            assert_eq!(counts.get(tab), filter_habits(&habits, tab).len());
        }
        assert_eq!(counts, TabCounts { to_do: 2, to_stop: 1, group: 3 });
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(TabCounts::from_habits(&[]), TabCounts::default());
        assert!(filter_habits(&[], Tab::Group).is_empty());
    }

    #[test]
    fn test_param_round_trip_names() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_param(tab.as_param()), tab);
        }
    }
}
