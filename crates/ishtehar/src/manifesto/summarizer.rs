use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use super::generator::{GeneratorError, ManifestoGenerator};
use super::prompt::{
    approved_text_lines, build_request, FAILURE_MESSAGE, INSUFFICIENT_DATA_MESSAGE,
    UNAVAILABLE_MESSAGE,
};
use crate::wall::PostSnapshot;

/// Why a summary request produced no draft at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SummaryRefusal {
    #[error("a manifesto draft is already being generated")]
    AlreadyInFlight,
    #[error("manifesto generation was cancelled")]
    Cancelled,
}

/// One-shot manifesto drafting over approved text posts.
///
/// At most one generator call is outstanding at a time. Generator failures
/// never escape: they are logged and replaced by a fixed message.
pub struct ManifestoSummarizer<G> {
    generator: Arc<G>,
    in_flight: AtomicBool,
    timeout: Option<Duration>,
}

impl<G> ManifestoSummarizer<G>
where
    G: ManifestoGenerator + 'static,
{
    pub fn new(generator: Arc<G>) -> Self {
        Self {
            generator,
            in_flight: AtomicBool::new(false),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub async fn summarize(&self, snapshot: &PostSnapshot) -> Result<String, SummaryRefusal> {
        self.summarize_with_cancel(snapshot, &CancellationToken::new())
            .await
    }

    /// Drafts a manifesto, resolving to `Cancelled` if `cancel` fires first.
    /// A cancelled call discards whatever the generator eventually returns.
    pub async fn summarize_with_cancel(
        &self,
        snapshot: &PostSnapshot,
        cancel: &CancellationToken,
    ) -> Result<String, SummaryRefusal> {
        let Some(opinions) = approved_text_lines(snapshot) else {
            return Ok(INSUFFICIENT_DATA_MESSAGE.to_string());
        };

        let _guard = InFlightGuard::acquire(&self.in_flight)?;
        let request = build_request(&opinions);

        let call = async {
            match self.timeout {
                Some(limit) => tokio::time::timeout(limit, self.generator.generate(&request))
                    .await
                    .unwrap_or(Err(GeneratorError::Timeout(limit))),
                None => self.generator.generate(&request).await,
            }
        };

        let result = tokio::select! {
            _ = cancel.cancelled() => {
                info!("manifesto generation cancelled");
                return Err(SummaryRefusal::Cancelled);
            }
            result = call => result,
        };

        match result {
            Ok(text) if text.trim().is_empty() => Ok(UNAVAILABLE_MESSAGE.to_string()),
            Ok(text) => Ok(text),
            Err(err) => {
                error!(error = %err, "error generating manifesto");
                Ok(FAILURE_MESSAGE.to_string())
            }
        }
    }
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, SummaryRefusal> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| SummaryRefusal::AlreadyInFlight)?;
        Ok(Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
