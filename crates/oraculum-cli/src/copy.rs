//! The clipboard copy affordance.
//!
//! Copying is fire-and-forget against an external platform capability:
//! write-only, never read, no retry. On success a transient "copied"
//! indicator shows and clears itself after a fixed interval; on failure the
//! error is logged and the indicator never leaves idle — the user may
//! simply try again.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;

/// How long the "copied" indicator stays up.
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Indicator state. `Copied` is always transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    /// Nothing in flight; the default.
    #[default]
    Idle,
    /// A write just succeeded; clears back to `Idle` automatically.
    Copied,
}

/// Write-only seam to the platform clipboard capability.
#[async_trait]
pub trait CopySink: Send + Sync {
    /// Deliver text to the sink.
    async fn write_text(&self, text: &str) -> std::io::Result<()>;
}

/// Sink that writes to stdout, for piping into `pbcopy`/`xclip`/`wl-copy`.
pub struct StdoutSink;

#[async_trait]
impl CopySink for StdoutSink {
    async fn write_text(&self, text: &str) -> std::io::Result<()> {
        use std::io::Write;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()
    }
}

/// Shared handle for the transient "copied" indicator.
///
/// Cheap to clone (Arc internals). State changes are broadcast to all
/// subscribers via a watch channel.
#[derive(Clone)]
pub struct CopyIndicator {
    inner: Arc<CopyIndicatorInner>,
}

struct CopyIndicatorInner {
    tx: watch::Sender<CopyState>,
    reset_after: Duration,
}

impl CopyIndicator {
    /// Create an indicator with the standard reset interval.
    pub fn new() -> Self {
        Self::with_reset_after(COPIED_RESET)
    }

    /// Create an indicator with a custom reset interval (tests use short ones).
    pub fn with_reset_after(reset_after: Duration) -> Self {
        let (tx, _rx) = watch::channel(CopyState::default());
        Self {
            inner: Arc::new(CopyIndicatorInner { tx, reset_after }),
        }
    }

    /// Current indicator state.
    pub fn state(&self) -> CopyState {
        *self.inner.tx.borrow()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<CopyState> {
        self.inner.tx.subscribe()
    }

    /// Copy text through the sink.
    ///
    /// Returns `true` when the write succeeded. On success the indicator
    /// flips to `Copied` and a background task clears it after the reset
    /// interval; on failure the error is logged and the indicator stays
    /// `Idle` throughout.
    pub async fn copy(&self, sink: &dyn CopySink, text: &str) -> bool {
        match sink.write_text(text).await {
            Ok(()) => {
                self.inner.tx.send_replace(CopyState::Copied);
                let indicator = self.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(indicator.inner.reset_after).await;
                    indicator.inner.tx.send_replace(CopyState::Idle);
                });
                true
            }
            Err(err) => {
                log::warn!("clipboard write failed: {err}");
                false
            }
        }
    }
}

impl Default for CopyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSink {
        written: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                written: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CopySink for RecordingSink {
        async fn write_text(&self, text: &str) -> std::io::Result<()> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl CopySink for FailingSink {
        async fn write_text(&self, _text: &str) -> std::io::Result<()> {
            Err(std::io::Error::other("denied"))
        }
    }

    #[test]
    fn test_indicator_starts_idle() {
        let indicator = CopyIndicator::new();
        assert_eq!(indicator.state(), CopyState::Idle);
    }

    #[tokio::test]
    async fn test_successful_copy_shows_then_clears() {
        let sink = RecordingSink::new();
        let indicator = CopyIndicator::with_reset_after(Duration::from_millis(20));

        assert!(indicator.copy(&sink, "template text").await);
        assert_eq!(indicator.state(), CopyState::Copied);
        assert_eq!(sink.written.lock().unwrap().as_slice(), ["template text"]);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(indicator.state(), CopyState::Idle);
    }

    #[tokio::test]
    async fn test_failed_copy_stays_idle_throughout() {
        let indicator = CopyIndicator::with_reset_after(Duration::from_millis(20));

        assert!(!indicator.copy(&FailingSink, "template text").await);
        assert_eq!(indicator.state(), CopyState::Idle);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(indicator.state(), CopyState::Idle);
    }

    #[tokio::test]
    async fn test_user_may_retry_after_failure() {
        let indicator = CopyIndicator::with_reset_after(Duration::from_millis(20));
        assert!(!indicator.copy(&FailingSink, "text").await);

        let sink = RecordingSink::new();
        assert!(indicator.copy(&sink, "text").await);
        assert_eq!(indicator.state(), CopyState::Copied);
    }

    #[tokio::test]
    async fn test_clones_share_indicator_state() {
        let indicator = CopyIndicator::with_reset_after(Duration::from_millis(50));
        let observer = indicator.clone();

        indicator.copy(&RecordingSink::new(), "text").await;
        assert_eq!(observer.state(), CopyState::Copied);
    }

    #[tokio::test]
    async fn test_subscribe_sees_transitions() {
        let indicator = CopyIndicator::with_reset_after(Duration::from_millis(10));
        let mut rx = indicator.subscribe();
        assert_eq!(*rx.borrow(), CopyState::Idle);

        indicator.copy(&RecordingSink::new(), "text").await;
        assert_eq!(*rx.borrow_and_update(), CopyState::Copied);

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), CopyState::Idle);
    }
}
