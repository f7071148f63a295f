//! Pure rendering of controller state into a view model.
//!
//! The web components and the HTML fragment renderer both draw from [`View`]; neither
//! looks at [`ViewState`] directly.

use crate::controller::{LookupController, ViewState};
use crate::lookup::LookupResult;
use crate::verification::Verdict;

pub const SUBMIT_LABEL: &str = "🔍 Find Zoning Ordinance";
pub const SUBMIT_BUSY_LABEL: &str = "Searching...";

pub const LOADING_STATUS: &str = "Searching for zoning ordinance...";
pub const LOADING_DETAIL: &str =
    "This may take a few moments as we search through municipal documents.";

pub const ERROR_TITLE: &str = "Unable to Find Zoning Ordinance";

/// Fixed advice under every error.
pub const ERROR_SUGGESTIONS: [&str; 3] = [
    "Try including the state (e.g., \"Boston, MA\")",
    "Check the spelling of the city name",
    "Try a nearby larger city if yours is very small",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub submit: SubmitControl,
    pub result: ResultView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    /// Show the spinner
    pub busy: bool,
    pub label: &'static str,
}

/// Contents of the result region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Empty,
    Loading,
    Found(DocumentCard, VerificationPanel),
    Failed(ErrorCard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCard {
    pub city: String,
    pub link: String,
    pub file_type: String,
    pub notes: Option<String>,
}

impl From<&LookupResult> for DocumentCard {
    fn from(result: &LookupResult) -> Self {
        Self {
            city: result.city.clone(),
            link: result.link.clone(),
            file_type: result.display_file_type().to_string(),
            notes: result.display_notes().map(str::to_string),
        }
    }
}

/// The verify-this-document section below a found document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationPanel {
    pub city: String,
    pub notice: Option<VerificationNotice>,
}

impl VerificationPanel {
    pub fn prompt(&self) -> String {
        format!(
            "Please review the document to ensure it's the correct zoning ordinance for {}.",
            self.city
        )
    }
}

/// Acknowledgment shown inside the panel after the user decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationNotice {
    Verified,
    Rejected,
}

impl VerificationNotice {
    pub fn status(&self) -> &'static str {
        match self {
            VerificationNotice::Verified => "✓ Document Verified",
            VerificationNotice::Rejected => "✗ Document Rejected",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            VerificationNotice::Verified => {
                "Great! This document has been confirmed as the correct zoning ordinance. \
                 In the future, this will be analyzed against zoning best practices."
            }
            VerificationNotice::Rejected => {
                "Thank you for the feedback. You can try searching again with a more \
                 specific city name or state."
            }
        }
    }

    /// Only a rejection offers to search again.
    pub fn offers_search_again(&self) -> bool {
        matches!(self, VerificationNotice::Rejected)
    }
}

impl From<Verdict> for VerificationNotice {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Confirmed => VerificationNotice::Verified,
            Verdict::Rejected => VerificationNotice::Rejected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCard {
    pub message: String,
    pub suggestions: [&'static str; 3],
}

fn found(result: &LookupResult, notice: Option<VerificationNotice>) -> ResultView {
    ResultView::Found(
        DocumentCard::from(result),
        VerificationPanel {
            city: result.city.clone(),
            notice,
        },
    )
}

/// Map the controller to what should be on screen.
pub fn render(controller: &LookupController) -> View {
    let busy = controller.is_loading();
    let submit = SubmitControl {
        enabled: controller.submit_enabled(),
        busy,
        label: if busy { SUBMIT_BUSY_LABEL } else { SUBMIT_LABEL },
    };

    let result = match controller.state() {
        ViewState::Idle => ResultView::Empty,
        ViewState::Loading => ResultView::Loading,
        ViewState::Success(result) => found(result, None),
        ViewState::Verifying(result, verdict) => found(result, Some((*verdict).into())),
        ViewState::Error(message) => ResultView::Failed(ErrorCard {
            message: message.clone(),
            suggestions: ERROR_SUGGESTIONS,
        }),
    };

    View { submit, result }
}
