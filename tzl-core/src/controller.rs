//! The lookup state machine.
//!
//! `LookupController` owns the input text, the current [`ViewState`] and a request
//! generation. Each submission bumps the generation and hands out a [`LookupTicket`];
//! an outcome is applied only if its ticket is still current, so a slow response can
//! never overwrite the view of a later search.

use log::{debug, warn};

use crate::error::LookupError;
use crate::lookup::LookupResult;
use crate::query::{validate_input, SearchQuery};
use crate::verification::Verdict;

/// What the result region is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Success(LookupResult),
    /// User-facing error message
    Error(String),
    Verifying(LookupResult, Verdict),
}

/// Proof of a dispatched lookup, returned by [`LookupController::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    generation: u64,
    query: SearchQuery,
}

impl LookupTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupController {
    input: String,
    state: ViewState,
    generation: u64,
}

impl LookupController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Record the current contents of the city input.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn submit_enabled(&self) -> bool {
        validate_input(&self.input) && !self.is_loading()
    }

    /// The result on screen, if any.
    pub fn current_result(&self) -> Option<&LookupResult> {
        match &self.state {
            ViewState::Success(result) | ViewState::Verifying(result, _) => Some(result),
            _ => None,
        }
    }

    /// Start a lookup for the current input.
    ///
    /// Blank input is ignored: no ticket, no state change. A submission while another
    /// lookup is loading supersedes it.
    pub fn begin_submit(&mut self) -> Option<LookupTicket> {
        let query = SearchQuery::parse(&self.input)?;
        self.generation += 1;
        self.state = ViewState::Loading;
        debug!("Lookup #{} dispatched for {}", self.generation, query);
        Some(LookupTicket {
            generation: self.generation,
            query,
        })
    }

    /// Apply the outcome of a lookup. Returns `false` when the ticket is stale and the
    /// outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: &LookupTicket,
        outcome: Result<LookupResult, LookupError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale lookup #{} for {} (current #{})",
                ticket.generation, ticket.query, self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => ViewState::Success(result),
            Err(err) => {
                warn!("Lookup for {} failed: {}", ticket.query, err);
                ViewState::Error(err.user_message().to_string())
            }
        };
        true
    }

    /// Record a verdict on the shown document and return it for the verification sink.
    /// Only the verification region changes; the document stays on screen.
    pub fn verify(&mut self, verdict: Verdict) -> Option<LookupResult> {
        let result = self.current_result()?.clone();
        self.state = ViewState::Verifying(result.clone(), verdict);
        Some(result)
    }

    pub fn confirm_document(&mut self) -> Option<LookupResult> {
        self.verify(Verdict::Confirmed)
    }

    pub fn reject_document(&mut self) -> Option<LookupResult> {
        self.verify(Verdict::Rejected)
    }

    /// Clear the result region. Any lookup still in flight is ignored when it lands.
    pub fn search_again(&mut self) {
        self.generation += 1;
        self.state = ViewState::Idle;
    }

    /// Link of the shown document.
    pub fn open_document(&self) -> Option<&str> {
        self.current_result().map(|result| result.link.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::CONNECTION_ERROR_MESSAGE;

    fn result(city: &str) -> LookupResult {
        LookupResult {
            city: city.to_string(),
            link: format!("https://{}.example/zoning.pdf", city.to_lowercase()),
            file_type: None,
            notes: None,
        }
    }

    fn controller_with(input: &str) -> LookupController {
        let mut controller = LookupController::new();
        controller.set_input(input);
        controller
    }

    #[test]
    fn test_blank_input_never_submits() {
        for input in ["", "   ", "\t\n"] {
            let mut controller = controller_with(input);
            assert!(!controller.submit_enabled());
            assert_eq!(controller.begin_submit(), None);
            assert_eq!(controller.state(), &ViewState::Idle);
            assert_eq!(controller.generation(), 0);
        }
    }

    #[test]
    fn test_submit_disables_until_outcome() {
        let mut controller = controller_with("  Boston  ");
        assert!(controller.submit_enabled());

        let ticket = controller.begin_submit().unwrap();
        assert_eq!(ticket.query().as_str(), "Boston");
        assert!(controller.is_loading());
        assert!(!controller.submit_enabled());

        assert!(controller.complete(&ticket, Ok(result("Boston"))));
        assert!(controller.submit_enabled());
        assert_eq!(controller.state(), &ViewState::Success(result("Boston")));
    }

    #[test]
    fn test_error_outcomes() {
        let mut controller = controller_with("Atlantis");
        let ticket = controller.begin_submit().unwrap();
        controller.complete(&ticket, Err(LookupError::Application("City not found".to_string())));
        assert_eq!(controller.state(), &ViewState::Error("City not found".to_string()));
        assert!(controller.submit_enabled());

        let ticket = controller.begin_submit().unwrap();
        controller.complete(&ticket, Err(LookupError::Transport("connection refused".to_string())));
        assert_eq!(
            controller.state(),
            &ViewState::Error(CONNECTION_ERROR_MESSAGE.to_string())
        );
        assert_eq!(controller.current_result(), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller = controller_with("Springfield");
        let first = controller.begin_submit().unwrap();
        controller.set_input("Springfield, IL");
        let second = controller.begin_submit().unwrap();
        assert!(second.generation() > first.generation());

        assert!(controller.complete(&second, Ok(result("Springfield IL"))));
        // The first request resolves last but must not win
        assert!(!controller.complete(&first, Ok(result("Springfield MA"))));
        assert_eq!(controller.state(), &ViewState::Success(result("Springfield IL")));
    }

    #[test]
    fn test_stale_error_does_not_replace_loading() {
        let mut controller = controller_with("Boston");
        let first = controller.begin_submit().unwrap();
        let _second = controller.begin_submit().unwrap();
        assert!(!controller.complete(&first, Err(LookupError::Timeout(10))));
        assert!(controller.is_loading());
    }

    #[test]
    fn test_confirm_keeps_document() {
        let mut controller = controller_with("Boston");
        let ticket = controller.begin_submit().unwrap();
        controller.complete(&ticket, Ok(result("Boston")));

        let confirmed = controller.confirm_document().unwrap();
        assert_eq!(confirmed, result("Boston"));
        assert_eq!(
            controller.state(),
            &ViewState::Verifying(result("Boston"), Verdict::Confirmed)
        );
        assert_eq!(controller.current_result(), Some(&result("Boston")));

        // Changing one's mind replaces the verdict only
        controller.reject_document().unwrap();
        assert_eq!(
            controller.state(),
            &ViewState::Verifying(result("Boston"), Verdict::Rejected)
        );
    }

    #[test]
    fn test_verify_requires_result() {
        let mut controller = controller_with("Boston");
        assert_eq!(controller.confirm_document(), None);
        controller.begin_submit().unwrap();
        assert_eq!(controller.reject_document(), None);
        assert!(controller.is_loading());
    }

    #[test]
    fn test_search_again_resets_and_ignores_in_flight() {
        let mut controller = controller_with("Boston");
        let ticket = controller.begin_submit().unwrap();
        controller.complete(&ticket, Ok(result("Boston")));
        controller.reject_document();

        let late = controller.begin_submit().unwrap();
        controller.search_again();
        assert_eq!(controller.state(), &ViewState::Idle);
        assert_eq!(controller.current_result(), None);
        assert_eq!(controller.open_document(), None);
        assert!(!controller.complete(&late, Ok(result("Boston"))));
        assert_eq!(controller.state(), &ViewState::Idle);
        // Input is kept for the user to edit
        assert_eq!(controller.input(), "Boston");
    }

    #[test]
    fn test_open_document_link() {
        let mut controller = controller_with("Salem");
        let ticket = controller.begin_submit().unwrap();
        controller.complete(&ticket, Ok(result("Salem")));
        assert_eq!(controller.open_document(), Some("https://salem.example/zoning.pdf"));
    }
}
