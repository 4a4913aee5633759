//! AI Suggestion Flow
//!
//! State for the two-phase suggestion modal: goal capture, then review and
//! bulk registration. Components hold one `SuggestionFlow` in a signal and
//! drive it through these transitions; the network calls happen in between.

use serde::Serialize;

use crate::error::ApiError;
use crate::models::Suggestions;

pub const NOTHING_SELECTED: &str = "Selecciona al menos un hábito para registrar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    ToDo,
    ToStop,
}

/// Checked state, parallel to the suggestion lists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub to_do: Vec<bool>,
    pub to_stop: Vec<bool>,
}

impl Selection {
    pub fn unchecked_for(suggestions: &Suggestions) -> Self {
        Self {
            to_do: vec![false; suggestions.to_do.len()],
            to_stop: vec![false; suggestions.to_stop.len()],
        }
    }

    fn list_mut(&mut self, kind: SuggestionKind) -> &mut Vec<bool> {
        match kind {
            SuggestionKind::ToDo => &mut self.to_do,
            SuggestionKind::ToStop => &mut self.to_stop,
        }
    }

    pub fn is_checked(&self, kind: SuggestionKind, index: usize) -> bool {
        let list = match kind {
            SuggestionKind::ToDo => &self.to_do,
            SuggestionKind::ToStop => &self.to_stop,
        };
        list.get(index).copied().unwrap_or(false)
    }

    /// Out-of-range indexes are ignored
    pub fn toggle(&mut self, kind: SuggestionKind, index: usize) {
        if let Some(slot) = self.list_mut(kind).get_mut(index) {
            *slot = !*slot;
        }
    }

    pub fn any(&self) -> bool {
        self.to_do.iter().chain(self.to_stop.iter()).any(|&b| b)
    }
}

/// Body of the bulk-create request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkHabits {
    #[serde(rename = "hacer")]
    pub to_do: Vec<String>,
    #[serde(rename = "dejar")]
    pub to_stop: Vec<String>,
}

impl BulkHabits {
    fn pick(items: &[String], checked: &[bool]) -> Vec<String> {
        items
            .iter()
            .zip(checked.iter())
            .filter(|(_, on)| **on)
            .map(|(s, _)| s.clone())
            .collect()
    }

    pub fn from_selection(suggestions: &Suggestions, selection: &Selection) -> Self {
        Self {
            to_do: Self::pick(&suggestions.to_do, &selection.to_do),
            to_stop: Self::pick(&suggestions.to_stop, &selection.to_stop),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_do.is_empty() && self.to_stop.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionFlow {
    pub goal: String,
    pub requesting: bool,
    pub suggestions: Option<Suggestions>,
    pub selection: Selection,
    pub error: Option<String>,
    pub submitting: bool,
    pub success: Option<String>,
    /// Bumped by every request; answers carrying an older value are stale
    request_seq: u64,
}

impl SuggestionFlow {
    /// True once suggestions have arrived (review phase)
    pub fn reviewing(&self) -> bool {
        self.suggestions.is_some()
    }

    pub fn can_request(&self) -> bool {
        !self.requesting && !self.goal.trim().is_empty()
    }

    /// Enter the requesting state. Returns the trimmed goal to send, or `None`
    /// when the request must not be issued.
    pub fn begin_request(&mut self) -> Option<String> {
        if !self.can_request() {
            return None;
        }
        self.requesting = true;
        self.request_seq += 1;
        self.error = None;
        Some(self.goal.trim().to_string())
    }

    /// Identifies the request most recently started by `begin_request`
    pub fn request_seq(&self) -> u64 {
        self.request_seq
    }

    /// Apply the answer to request `seq`. Answers to a request that was
    /// abandoned by `reset` or superseded by a newer one are dropped.
    pub fn finish_request(&mut self, seq: u64, result: Result<Suggestions, ApiError>) {
        if !self.requesting || seq != self.request_seq {
            log::debug!("Descartando sugerencias obsoletas (petición {})", seq);
            return;
        }
        self.requesting = false;
        match result {
            Ok(suggestions) => {
                self.selection = Selection::unchecked_for(&suggestions);
                self.suggestions = Some(suggestions);
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn toggle(&mut self, kind: SuggestionKind, index: usize) {
        self.selection.toggle(kind, index);
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.selection.any()
    }

    /// Enter the submitting state. Returns the selected subsets to post, or
    /// `None` when there is nothing to submit.
    pub fn begin_submit(&mut self) -> Option<BulkHabits> {
        if self.submitting {
            return None;
        }
        let suggestions = self.suggestions.as_ref()?;
        let body = BulkHabits::from_selection(suggestions, &self.selection);
        if body.is_empty() {
            self.error = Some(NOTHING_SELECTED.to_string());
            return None;
        }
        self.submitting = true;
        self.error = None;
        self.success = None;
        Some(body)
    }

    pub fn finish_submit(&mut self, result: Result<String, ApiError>) {
        self.submitting = false;
        match result {
            Ok(message) => self.success = Some(message),
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    /// Back to goal capture, keeping the goal text
    pub fn change_goal(&mut self) {
        self.suggestions = None;
        self.selection = Selection::default();
        self.error = None;
        self.success = None;
    }

    /// Clear everything; an answer still in flight will be ignored
    pub fn reset(&mut self) {
        *self = Self {
            request_seq: self.request_seq,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn suggestions(to_do: &[&str], to_stop: &[&str]) -> Suggestions {
        Suggestions {
            to_do: to_do.iter().map(|s| s.to_string()).collect(),
            to_stop: to_stop.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Deliver `result` as the answer to the current request, starting one if needed
    fn receive(flow: &mut SuggestionFlow, result: Result<Suggestions, ApiError>) {
        if !flow.requesting {
            flow.begin_request();
        }
        let seq = flow.request_seq();
        flow.finish_request(seq, result);
    }

    fn flow_with_goal(goal: &str) -> SuggestionFlow {
        SuggestionFlow { goal: goal.to_string(), ..Default::default() }
    }

    #[test]
    fn test_blank_goal_never_requests() {
        for goal in ["", "   ", "\t\n"] {
            let mut flow = flow_with_goal(goal);
            assert!(!flow.can_request());
            assert_eq!(flow.begin_request(), None);
            assert!(!flow.requesting);
        }
    }

    #[test]
    fn test_request_in_flight_blocks_second_request() {
        let mut flow = flow_with_goal("  bajar 10 kg ");
        assert_eq!(flow.begin_request().as_deref(), Some("bajar 10 kg"));
        assert!(flow.requesting);
        assert_eq!(flow.begin_request(), None);
    }

    #[test]
    fn test_selection_matches_suggestion_lengths() {
        for (n_do, n_stop) in [(0, 0), (1, 0), (0, 3), (4, 2)] {
            let to_do: Vec<String> = (0..n_do).map(|i| format!("hacer {}", i)).collect();
            let to_stop: Vec<String> = (0..n_stop).map(|i| format!("dejar {}", i)).collect();
            let mut flow = flow_with_goal("meta");
            flow.begin_request();
            receive(&mut flow, Ok(Suggestions { to_do, to_stop }));

            assert_eq!(flow.selection.to_do, vec![false; n_do]);
            assert_eq!(flow.selection.to_stop, vec![false; n_stop]);
        }
    }

    #[test]
    fn test_scenario_goal_to_bulk_body() {
        let mut flow = flow_with_goal("bajar 10 kg");
        assert_eq!(flow.begin_request().as_deref(), Some("bajar 10 kg"));
        receive(&mut flow, Ok(suggestions(&["Caminar 30 min"], &["Refrescos"])));

        assert!(flow.reviewing());
        assert_eq!(flow.selection, Selection { to_do: vec![false], to_stop: vec![false] });
        assert!(!flow.can_submit());

        flow.toggle(SuggestionKind::ToDo, 0);
        assert!(flow.can_submit());

        let body = flow.begin_submit().unwrap();
        assert_eq!(
            body,
            BulkHabits { to_do: vec!["Caminar 30 min".into()], to_stop: vec![] }
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "hacer": ["Caminar 30 min"], "dejar": [] })
        );
        assert!(flow.submitting);
        assert!(!flow.can_submit());
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut selection = Selection::unchecked_for(&suggestions(&["a", "b"], &["c"]));
        selection.toggle(SuggestionKind::ToStop, 0);
        let before = selection.clone();

        selection.toggle(SuggestionKind::ToDo, 1);
        selection.toggle(SuggestionKind::ToDo, 1);
        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_out_of_range_is_ignored() {
        let mut selection = Selection::unchecked_for(&suggestions(&["a"], &[]));
        selection.toggle(SuggestionKind::ToStop, 0);
        selection.toggle(SuggestionKind::ToDo, 5);
        assert_eq!(selection, Selection { to_do: vec![false], to_stop: vec![] });
    }

    #[test]
    fn test_submit_enabled_by_either_list() {
        let mut flow = flow_with_goal("meta");
        receive(&mut flow, Ok(suggestions(&["a"], &["b", "c"])));
        assert!(!flow.can_submit());

        flow.toggle(SuggestionKind::ToStop, 1);
        assert!(flow.can_submit());
        flow.toggle(SuggestionKind::ToStop, 1);
        assert!(!flow.can_submit());
        flow.toggle(SuggestionKind::ToDo, 0);
        assert!(flow.can_submit());
    }

    #[test]
    fn test_submit_with_nothing_selected_sets_error() {
        let mut flow = flow_with_goal("meta");
        receive(&mut flow, Ok(suggestions(&["a"], &[])));

        assert_eq!(flow.begin_submit(), None);
        assert_eq!(flow.error.as_deref(), Some(NOTHING_SELECTED));
        assert!(!flow.submitting);
    }

    #[test]
    fn test_request_error_is_surfaced() {
        let mut flow = flow_with_goal("meta");
        flow.begin_request();
        receive(&mut flow, Err(ApiError::MissingToken));

        assert!(!flow.requesting);
        assert!(!flow.reviewing());
        assert_eq!(flow.error.as_deref(), Some("No hay token de autenticación"));
    }

    #[test]
    fn test_submit_outcomes() {
        let mut flow = flow_with_goal("meta");
        receive(&mut flow, Ok(suggestions(&["a"], &[])));
        flow.toggle(SuggestionKind::ToDo, 0);

        flow.begin_submit();
        flow.finish_submit(Err(ApiError::Http { status: 500, message: "caído".into() }));
        assert_eq!(flow.error.as_deref(), Some("caído"));
        assert!(flow.can_submit());

        flow.begin_submit();
        assert_eq!(flow.error, None);
        flow.finish_submit(Ok("2 hábitos creados".into()));
        assert_eq!(flow.success.as_deref(), Some("2 hábitos creados"));
    }

    #[test]
    fn test_change_goal_keeps_text_and_reset_clears_all() {
        let mut flow = flow_with_goal("dormir mejor");
        receive(&mut flow, Ok(suggestions(&["a"], &["b"])));
        flow.toggle(SuggestionKind::ToDo, 0);

        flow.change_goal();
        assert_eq!(flow.goal, "dormir mejor");
        assert!(!flow.reviewing());
        assert_eq!(flow.selection, Selection::default());

        receive(&mut flow, Ok(suggestions(&["a"], &[])));
        flow.error = Some("x".into());
        flow.reset();
        assert_eq!(
            flow,
            SuggestionFlow { request_seq: flow.request_seq(), ..Default::default() }
        );
    }

    #[test]
    fn test_answer_after_reset_is_discarded() {
        let mut flow = flow_with_goal("bajar 10 kg");
        flow.begin_request();
        let seq = flow.request_seq();
        flow.reset();

        flow.finish_request(seq, Ok(suggestions(&["Caminar"], &[])));
        assert!(!flow.reviewing());
        assert_eq!(flow.suggestions, None);
        assert_eq!(flow.selection, Selection::default());
    }

    #[test]
    fn test_answer_to_superseded_request_is_discarded() {
        let mut flow = flow_with_goal("bajar 10 kg");
        flow.begin_request();
        let stale = flow.request_seq();
        flow.reset();

        flow.goal = "leer más".into();
        flow.begin_request();
        let current = flow.request_seq();

        flow.finish_request(stale, Ok(suggestions(&["Caminar"], &[])));
        assert!(flow.requesting);
        assert!(!flow.reviewing());

        flow.finish_request(current, Ok(suggestions(&["Leer 10 páginas"], &[])));
        assert_eq!(flow.suggestions, Some(suggestions(&["Leer 10 páginas"], &[])));
    }
}
