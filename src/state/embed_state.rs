//! Embedded viewer state.
//!
//! Lifecycle of the tool pane: `Loading -> Ready`, `Loading -> Failed`,
//! `Failed -> Loading` (retry), and `any -> Loading` on tool switch, which
//! also bumps the reload token so the content is recreated rather than
//! revealed from a cache. Embedded pages can hold broken internal state
//! after being hidden, so recreation is the policy even when the URL
//! repeats.

use crate::embed::EmbedContent;

/// Display phase of the embed pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedPhase {
    /// Mount requested, no signal yet.
    Loading,
    /// The boundary reported a load failure.
    Failed,
    /// Content loaded.
    Ready,
}

/// State of the embedded viewer.
///
/// Invariant: `is_loading` and `has_error` are never both true.
#[derive(Debug, Clone)]
pub struct EmbedState {
    /// Id of the selected tool.
    pub selected_tool_id: String,
    /// Height of the embed pane, in rows. Derived from terminal metrics,
    /// never persisted.
    pub computed_height: u16,
    /// True from mount request until a load signal arrives.
    pub is_loading: bool,
    /// True after a failure signal, until retry or switch.
    pub has_error: bool,
    /// Monotonically increasing counter; a bump forces the embedded content
    /// to be torn down and recreated.
    pub reload_token: u64,
    /// Snapshot of the last successful load.
    pub content: Option<EmbedContent>,
}

impl EmbedState {
    /// Initial state: the given tool selected and its first mount pending.
    pub fn new(selected_tool_id: impl Into<String>) -> Self {
        Self {
            selected_tool_id: selected_tool_id.into(),
            computed_height: 0,
            is_loading: true,
            has_error: false,
            reload_token: 0,
            content: None,
        }
    }

    /// Current display phase. Loading and Failed cannot coincide, so the
    /// mapping is total and unambiguous.
    pub fn phase(&self) -> EmbedPhase {
        if self.has_error {
            EmbedPhase::Failed
        } else if self.is_loading {
            EmbedPhase::Loading
        } else {
            EmbedPhase::Ready
        }
    }

    /// Switch to another tool. Re-selecting the current tool is a no-op;
    /// a new id resets load state and bumps the reload token.
    ///
    /// Returns true when a new mount is required.
    pub fn select(&mut self, tool_id: &str) -> bool {
        if self.selected_tool_id == tool_id {
            return false;
        }
        self.selected_tool_id = tool_id.to_string();
        self.begin_load();
        true
    }

    /// The boundary reported a successful load.
    pub fn loaded(&mut self, content: EmbedContent) {
        self.is_loading = false;
        self.has_error = false;
        self.content = Some(content);
    }

    /// The boundary reported a load failure.
    pub fn failed(&mut self) {
        self.is_loading = false;
        self.has_error = true;
        self.content = None;
    }

    /// User-initiated retry. Only reachable from the error state; anywhere
    /// else this is a no-op.
    ///
    /// Returns true when a new mount is required.
    pub fn retry(&mut self) -> bool {
        if !self.has_error {
            return false;
        }
        self.begin_load();
        true
    }

    fn begin_load(&mut self) {
        self.is_loading = true;
        self.has_error = false;
        self.reload_token += 1;
        self.content = None;
        debug_assert!(!(self.is_loading && self.has_error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn content() -> EmbedContent {
        EmbedContent {
            final_url: "https://a.example/".into(),
            status: 200,
            bytes: 1024,
            title: Some("A".into()),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = EmbedState::new("A");
        assert_eq!(state.selected_tool_id, "A");
        assert!(state.is_loading);
        assert!(!state.has_error);
        assert_eq!(state.phase(), EmbedPhase::Loading);
    }

    #[test]
    fn test_switch_resets_state_and_bumps_token() {
        let mut state = EmbedState::new("A");
        state.loaded(content());
        let token_before = state.reload_token;

        assert!(state.select("B"));
        assert_eq!(state.selected_tool_id, "B");
        assert!(state.is_loading);
        assert!(!state.has_error);
        assert!(state.reload_token > token_before);
        assert_eq!(state.content, None);
    }

    #[test]
    fn test_reselecting_current_tool_is_noop() {
        let mut state = EmbedState::new("A");
        state.loaded(content());
        let token_before = state.reload_token;

        assert!(!state.select("A"));
        assert!(!state.is_loading);
        assert_eq!(state.reload_token, token_before);
    }

    #[test]
    fn test_retry_is_noop_without_error() {
        let mut state = EmbedState::new("A");
        state.loaded(content());
        let before = state.clone();

        assert!(!state.retry());
        assert_eq!(state.is_loading, before.is_loading);
        assert_eq!(state.has_error, before.has_error);
        assert_eq!(state.reload_token, before.reload_token);
    }

    #[test]
    fn test_retry_from_error_reloads() {
        let mut state = EmbedState::new("A");
        state.failed();
        let token_before = state.reload_token;

        assert!(state.retry());
        assert!(state.is_loading);
        assert!(!state.has_error);
        assert_eq!(state.reload_token, token_before + 1);
    }

    #[test]
    fn test_loading_and_error_never_coincide() {
        // Exhaustively walk event sequences of bounded length and check the
        // invariant after every step.
        fn walk(state: EmbedState, depth: usize) {
            assert!(
                !(state.is_loading && state.has_error),
                "loading and error both set after some sequence"
            );
            if depth == 0 {
                return;
            }
            for event in 0..4 {
                let mut next = state.clone();
                match event {
                    0 => next.loaded(content()),
                    1 => next.failed(),
                    2 => {
                        next.retry();
                    }
                    _ => {
                        next.select(if next.selected_tool_id == "A" { "B" } else { "A" });
                    }
                }
                walk(next, depth - 1);
            }
        }
        walk(EmbedState::new("A"), 5);
    }

    #[test]
    fn test_full_scenario_transcript() {
        // Mount on A, load, switch to B, fail, retry.
        let mut state = EmbedState::new("A");
        assert!(state.is_loading && !state.has_error);

        state.loaded(content());
        assert!(!state.is_loading && !state.has_error);

        let t0 = state.reload_token;
        assert!(state.select("B"));
        assert_eq!(state.selected_tool_id, "B");
        assert!(state.is_loading && !state.has_error);
        assert!(state.reload_token > t0);

        state.failed();
        assert!(!state.is_loading && state.has_error);

        let t1 = state.reload_token;
        assert!(state.retry());
        assert!(state.is_loading && !state.has_error);
        assert!(state.reload_token > t1);
    }
}
