//! Background section loading
//!
//! Fetches live portfolio content from the API in the background, using
//! tokio channels to deliver results to the main application as they arrive.

use tokio::sync::mpsc;

use crate::api::ApiError;
use crate::content::{Section, SectionContent};
use crate::provider::SectionProvider;

/// Messages sent from background loading tasks to the main app
#[derive(Debug, Clone)]
pub enum DataMessage {
    /// Live content arrived for a section
    SectionLoaded {
        section: Section,
        content: SectionContent,
    },
    /// A fetch failed; the bundled content stays on screen
    SectionFailed { section: Section, error: String },
}

/// Handle for spawning background loads and receiving their results
pub struct LoadHandle {
    /// Channel for receiving load results
    pub receiver: mpsc::Receiver<DataMessage>,
    sender: mpsc::Sender<DataMessage>,
    provider: SectionProvider,
}

impl LoadHandle {
    /// Creates a handle without starting any loads.
    ///
    /// # Arguments
    /// * `provider` - The section provider used by all spawned tasks
    pub fn new(provider: SectionProvider) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        Self {
            receiver,
            sender,
            provider,
        }
    }

    /// Spawns one fetch task per section.
    ///
    /// Results arrive on `receiver` in completion order, so fast sections
    /// show live data without waiting for slow ones.
    pub fn load_sections(&self, sections: &[Section]) {
        for &section in sections {
            let provider = self.provider.clone();
            let tx = self.sender.clone();
            tokio::spawn(async move {
                let message = outcome_message(section, provider.fetch_live(section).await);
                // The receiver may already be gone during shutdown
                let _ = tx.send(message).await;
            });
        }
    }

    /// Spawns a cache-bypassing refetch for a single section.
    pub fn refresh_section(&self, section: Section) {
        let provider = self.provider.clone();
        let tx = self.sender.clone();
        tokio::spawn(async move {
            let message = outcome_message(section, provider.refresh(section).await);
            let _ = tx.send(message).await;
        });
    }

    /// Drops every cached response, then refetches all sections concurrently.
    ///
    /// Outcomes are reported per section once the whole batch settles.
    pub fn full_reload(&self) {
        let provider = self.provider.clone();
        let tx = self.sender.clone();
        tokio::spawn(async move {
            provider.client().invalidate_all();

            let sections = Section::all();
            let fetches: Vec<_> = sections
                .iter()
                .map(|&section| provider.refresh(section))
                .collect();
            let results = futures::future::join_all(fetches).await;

            for (&section, result) in sections.iter().zip(results) {
                let _ = tx.send(outcome_message(section, result)).await;
            }
        });
    }
}

/// Converts a fetch outcome into the message the app receives.
fn outcome_message(section: Section, result: Result<SectionContent, ApiError>) -> DataMessage {
    match result {
        Ok(content) => DataMessage::SectionLoaded { section, content },
        Err(err) => {
            tracing::warn!(section = section.title(), error = %err, "background load failed");
            DataMessage::SectionFailed {
                section,
                error: err.to_string(),
            }
        }
    }
}

/// Checks for pending load messages without blocking
///
/// # Arguments
/// * `handle` - The LoadHandle to check
///
/// # Returns
/// * `Some(DataMessage)` if a message was available
/// * `None` if no messages are pending
pub fn try_recv(handle: &mut LoadHandle) -> Option<DataMessage> {
    handle.receiver.try_recv().ok()
}
