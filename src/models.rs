//! Frontend Models
//!
//! Data structures matching the habits API payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Habit identifier as sent by the API (numeric ids are normalised to strings)
pub type HabitId = String;

/// Kind of habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HabitKind {
    #[serde(rename = "hacer")]
    Do,
    #[serde(rename = "dejar")]
    Stop,
    #[serde(rename = "grupal")]
    Group,
}

impl HabitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitKind::Do => "hacer",
            HabitKind::Stop => "dejar",
            HabitKind::Group => "grupal",
        }
    }
}

/// Outcome of today's registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "exito")]
    Success,
    #[serde(rename = "fallo")]
    Failure,
}

/// Group a shared habit belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRef {
    #[serde(deserialize_with = "id_from_any")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Streak summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakSummary {
    #[serde(rename = "actual", default)]
    pub current: u32,
    #[serde(rename = "mejor", default)]
    pub best: u32,
}

/// Today's log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayLog {
    #[serde(rename = "completado", default)]
    pub completed: bool,
    #[serde(rename = "estado", default)]
    pub outcome: Option<Outcome>,
    #[serde(rename = "comentario", default)]
    pub comment: Option<String>,
}

impl TodayLog {
    pub fn is_success(&self) -> bool {
        self.outcome == Some(Outcome::Success)
    }
}

/// Habit data structure (read-only projection of the API entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    #[serde(deserialize_with = "id_from_any")]
    pub id: HabitId,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "tipo")]
    pub kind: HabitKind,
    #[serde(rename = "es_grupal", default)]
    pub is_group: bool,
    #[serde(rename = "grupo", default)]
    pub group: Option<GroupRef>,
    #[serde(rename = "rachas", default)]
    pub streak: Option<StreakSummary>,
    #[serde(rename = "registro_hoy", default)]
    pub today: Option<TodayLog>,
    #[serde(rename = "disponibleEn", default)]
    pub available_at: Option<String>,
}

impl Habit {
    pub fn current_streak(&self) -> u32 {
        self.streak.map(|s| s.current).unwrap_or(0)
    }

    pub fn best_streak(&self) -> u32 {
        self.streak.map(|s| s.best).unwrap_or(0)
    }

    /// Kind used when registering today's outcome; group habits register as `do`
    pub fn registration_kind(&self) -> HabitKind {
        match self.kind {
            HabitKind::Group => HabitKind::Do,
            other => other,
        }
    }

    /// Comment of today's log, whether or not the log is complete
    pub fn today_comment(&self) -> Option<&str> {
        self.today
            .as_ref()
            .and_then(|log| log.comment.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Badge label shown on the card
    pub fn kind_label(&self) -> &'static str {
        if self.is_group {
            "Grupal"
        } else if self.kind == HabitKind::Do {
            "Hacer"
        } else {
            "Dejar"
        }
    }
}

/// AI suggestion set: ordered free-text suggestions per kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    #[serde(rename = "hacer", default)]
    pub to_do: Vec<String>,
    #[serde(rename = "dejar", default)]
    pub to_stop: Vec<String>,
}

/// Subscription plan entitlements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub permite_grupos: bool,
}

/// Current user's subscription
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub plan: Option<Plan>,
}

impl Subscription {
    pub fn allows_groups(&self) -> bool {
        self.plan.as_ref().is_some_and(|p| p.permite_grupos)
    }
}

fn id_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Num(u64),
        Str(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Num(n) => n.to_string(),
        RawId::Str(s) => s,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_habit_from_api_payload() {
        let json = r#"{
            "id": 7,
            "titulo": "Leer",
            "tipo": "hacer",
            "es_grupal": false,
            "rachas": { "actual": 3, "mejor": 9 },
            "registro_hoy": { "completado": true, "estado": "exito", "comentario": "20 páginas" }
        }"#;
        let habit: Habit = serde_json::from_str(json).unwrap();

        assert_eq!(habit.id, "7");
        assert_eq!(habit.kind, HabitKind::Do);
        assert_eq!(habit.current_streak(), 3);
        assert_eq!(habit.best_streak(), 9);
        let today = habit.today.unwrap();
        assert!(today.is_success());
        assert_eq!(today.comment.as_deref(), Some("20 páginas"));
        assert_eq!(habit.available_at, None);
    }

    #[test]
    fn test_habit_without_streak_defaults_to_zero() {
        let json = r#"{ "id": "abc", "titulo": "Correr", "tipo": "grupal", "es_grupal": true,
                        "grupo": { "id": 4, "nombre": "Club" }, "disponibleEn": "en 3 horas" }"#;
        let habit: Habit = serde_json::from_str(json).unwrap();

        assert_eq!(habit.current_streak(), 0);
        assert_eq!(habit.group.as_ref().map(|g| g.name.as_str()), Some("Club"));
        assert_eq!(habit.group.as_ref().map(|g| g.id.as_str()), Some("4"));
        assert_eq!(habit.available_at.as_deref(), Some("en 3 horas"));
    }

    #[test]
    fn test_group_habit_registers_as_do() {
        let mut habit: Habit = serde_json::from_str(
            r#"{ "id": 1, "titulo": "x", "tipo": "grupal", "es_grupal": true }"#,
        )
        .unwrap();
        assert_eq!(habit.registration_kind(), HabitKind::Do);
        assert_eq!(habit.kind_label(), "Grupal");

        habit.kind = HabitKind::Stop;
        habit.is_group = false;
        assert_eq!(habit.registration_kind(), HabitKind::Stop);
        assert_eq!(habit.kind_label(), "Dejar");
    }

    #[test]
    fn test_subscription_group_entitlement() {
        let none: Subscription = serde_json::from_str("{}").unwrap();
        assert!(!none.allows_groups());

        let premium: Subscription =
            serde_json::from_str(r#"{ "plan": { "permite_grupos": true } }"#).unwrap();
        assert!(premium.allows_groups());
    }

    #[test]
    fn test_today_comment_shown_for_incomplete_log() {
        let habit: Habit = serde_json::from_str(
            r#"{ "id": 2, "titulo": "Meditar", "tipo": "hacer",
                 "registro_hoy": { "completado": false, "comentario": " a medias " } }"#,
        )
        .unwrap();
        assert_eq!(habit.today_comment(), Some("a medias"));

        let blank: Habit = serde_json::from_str(
            r#"{ "id": 3, "titulo": "x", "tipo": "hacer", "registro_hoy": { "comentario": "  " } }"#,
        )
        .unwrap();
        assert_eq!(blank.today_comment(), None);
    }
}
