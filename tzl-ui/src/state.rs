//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use std::rc::Rc;

use dioxus::prelude::*;
use tzl_core::config::ClientConfig;
use tzl_core::verification::{LocalVerification, VerificationSink};
use tzl_core::LookupController;

/// Shared state of the lookup page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Input text, view state and request generation
    pub lookup: Signal<LookupController>,
    /// Endpoint and timeout for lookups
    pub config: Signal<ClientConfig>,
    /// Receives confirm/reject verdicts
    pub verifier: Signal<Rc<dyn VerificationSink>>,
}

impl AppState {
    /// Same-origin endpoint, local-only verification.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let verifier: Rc<dyn VerificationSink> = Rc::new(LocalVerification);
        Self {
            lookup: Signal::new(LookupController::new()),
            config: Signal::new(config),
            verifier: Signal::new(verifier),
        }
    }
}
