//! Post-lookup verification: the user confirms or rejects the returned document.
//!
//! Verdicts go to a [`VerificationSink`]. The only implementation today is
//! [`LocalVerification`], which records the verdict in the log and nowhere else.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::lookup::LookupResult;

/// The user's judgement of a returned document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Confirmed,
    Rejected,
}

/// What a sink reports back after accepting a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    /// Accepted by a backend
    Recorded,
    /// Kept on this side only; nothing left the client
    LocalOnly,
}

/// A verdict together with the document it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub city: String,
    pub link: String,
    pub verdict: Verdict,
    pub recorded_at: DateTime<Utc>,
}

impl VerificationRecord {
    pub fn new(result: &LookupResult, verdict: Verdict) -> Self {
        Self {
            city: result.city.clone(),
            link: result.link.clone(),
            verdict,
            recorded_at: Utc::now(),
        }
    }
}

/// Destination for verification verdicts.
pub trait VerificationSink {
    fn submit_verification(&self, result: &LookupResult, verdict: Verdict) -> Ack;
}

/// Logs the verdict and acknowledges locally. No network call is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalVerification;

impl VerificationSink for LocalVerification {
    fn submit_verification(&self, result: &LookupResult, verdict: Verdict) -> Ack {
        let record = VerificationRecord::new(result, verdict);
        match serde_json::to_string(&record) {
            Ok(json) => info!("Document {:?} (local only): {}", verdict, json),
            Err(_) => info!("Document {:?} (local only): {}", verdict, record.link),
        }
        Ack::LocalOnly
    }
}
