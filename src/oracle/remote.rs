//! HTTP scoring service client
//!
//! The service scores a guess with `GET {base}/{daily|random|word/<target>}`
//! and answers with one JSON object per slot:
//!
//! ```json
//! [{"slot": 0, "guess": "a", "result": "correct"}, ...]
//! ```

use super::{Oracle, OracleError};
use crate::core::{Feedback, Mark, WORD_LENGTH, Word, WordError};
use log::debug;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

/// Public scoring service
pub const DEFAULT_BASE_URL: &str = "https://wordle.votee.dev:8000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Which hidden answer the service scores against
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RemoteMode {
    /// Today's puzzle
    #[default]
    Daily,
    /// A random word; the same seed always picks the same word
    Random { seed: Option<u64> },
    /// A caller-chosen answer
    Word { target: Word },
}

impl RemoteMode {
    /// Score against a caller-chosen answer
    ///
    /// # Errors
    /// Returns `WordError` if `target` is not a 5-letter word.
    pub fn word(target: &str) -> Result<Self, WordError> {
        Ok(Self::Word {
            target: Word::new(target)?,
        })
    }
}

/// Connection settings for [`RemoteOracle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub base_url: String,
    pub mode: RemoteMode,
    /// `None` disables the timeout
    pub timeout: Option<Duration>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mode: RemoteMode::Daily,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

/// Per-slot verdict as sent by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotMark {
    Absent,
    Present,
    Correct,
}

impl From<SlotMark> for Mark {
    fn from(mark: SlotMark) -> Self {
        match mark {
            SlotMark::Absent => Self::Absent,
            SlotMark::Present => Self::Present,
            SlotMark::Correct => Self::Correct,
        }
    }
}

/// One element of the service response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlotResult {
    pub slot: usize,
    pub guess: String,
    pub result: SlotMark,
}

/// Oracle backed by the HTTP scoring service
#[derive(Debug, Clone)]
pub struct RemoteOracle {
    client: Client,
    config: RemoteConfig,
}

impl RemoteOracle {
    /// Build a client for `config`
    ///
    /// # Errors
    /// Returns `OracleError::Transport` if the HTTP client cannot be built.
    pub fn new(config: RemoteConfig) -> Result<Self, OracleError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }

    /// URL scored against for the configured mode
    #[must_use]
    pub fn endpoint(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match &self.config.mode {
            RemoteMode::Daily => format!("{base}/daily"),
            RemoteMode::Random { .. } => format!("{base}/random"),
            RemoteMode::Word { target } => format!("{base}/word/{}", target.text().to_lowercase()),
        }
    }

    /// Query parameters sent with `guess`
    #[must_use]
    pub fn query(&self, guess: &Word) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("guess", guess.text().to_lowercase()),
            ("size", WORD_LENGTH.to_string()),
        ];
        if let RemoteMode::Random { seed: Some(seed) } = self.config.mode {
            query.push(("seed", seed.to_string()));
        }
        query
    }
}

impl Oracle for RemoteOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Feedback, OracleError> {
        let url = self.endpoint();
        debug!("GET {url} guess={guess}");

        let response = self.client.get(&url).query(&self.query(guess)).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(OracleError::Status(status.as_u16()));
        }

        let slots: Vec<SlotResult> = serde_json::from_str(&response.text()?)?;
        feedback_from_slots(guess, &slots)
    }
}

/// Convert a service response into feedback for `guess`
///
/// Slots may arrive in any order but must cover every position exactly once
/// and echo the guessed letters.
///
/// # Errors
/// Returns `OracleError::Payload` describing the first inconsistency.
pub fn feedback_from_slots(guess: &Word, slots: &[SlotResult]) -> Result<Feedback, OracleError> {
    if slots.len() != WORD_LENGTH {
        return Err(OracleError::Payload(format!(
            "expected {WORD_LENGTH} slots, got {}",
            slots.len()
        )));
    }

    let mut marks = [None; WORD_LENGTH];
    for slot in slots {
        let expected = guess
            .chars()
            .get(slot.slot)
            .copied()
            .ok_or_else(|| OracleError::Payload(format!("slot {} out of range", slot.slot)))?;

        if !slot.guess.eq_ignore_ascii_case(&char::from(expected).to_string()) {
            return Err(OracleError::Payload(format!(
                "slot {} echoes {:?}, expected {:?}",
                slot.slot,
                slot.guess,
                char::from(expected)
            )));
        }

        if marks[slot.slot].replace(Mark::from(slot.result)).is_some() {
            return Err(OracleError::Payload(format!("slot {} repeated", slot.slot)));
        }
    }

    let mut resolved = [Mark::Absent; WORD_LENGTH];
    for (mark, slot) in resolved.iter_mut().zip(marks) {
        // Five distinct in-range slots fill every position
        *mark = slot.ok_or_else(|| OracleError::Payload("missing slot".to_string()))?;
    }
    Ok(Feedback::from_marks(resolved))
}
