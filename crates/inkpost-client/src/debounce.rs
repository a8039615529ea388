//! Debouncing for search-as-you-type.

use std::time::Duration;

use tokio::sync::mpsc;

/// Default idle window before a query is issued.
pub const DEFAULT_WINDOW: Duration = Duration::from_millis(300);

/// Receiving half of a debounced channel.
///
/// Values sent in quick succession collapse into the last one; a value is
/// released once no newer value arrives within the window.
pub struct Debounced<T> {
    rx: mpsc::UnboundedReceiver<T>,
    window: Duration,
}

/// Create a debounced channel with the given idle window.
pub fn channel<T>(window: Duration) -> (mpsc::UnboundedSender<T>, Debounced<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, Debounced { rx, window })
}

impl<T> Debounced<T> {
    /// Wait for the next settled value. `None` once every sender is gone and
    /// nothing is pending.
    pub async fn next(&mut self) -> Option<T> {
        let mut latest = self.rx.recv().await?;

        loop {
            tokio::select! {
                newer = self.rx.recv() => match newer {
                    Some(value) => latest = value,
                    None => return Some(latest),
                },
                _ = tokio::time::sleep(self.window) => return Some(latest),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (tx, mut debounced) = channel(DEFAULT_WINDOW);

        for query in ["r", "ru", "rus", "rust"] {
            tx.send(query.to_string()).unwrap();
        }

        assert_eq!(debounced.next().await.as_deref(), Some("rust"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_values_apart_from_each_other_are_all_released() {
        let (tx, mut debounced) = channel(Duration::from_millis(100));

        tokio::spawn(async move {
            tx.send("first").unwrap();
            tokio::time::sleep(Duration::from_millis(500)).await;
            tx.send("second").unwrap();
        });

        assert_eq!(debounced.next().await, Some("first"));
        assert_eq!(debounced.next().await, Some("second"));
        assert_eq!(debounced.next().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_value_is_flushed_when_senders_close() {
        let (tx, mut debounced) = channel(Duration::from_secs(60));
        tx.send(1).unwrap();
        drop(tx);

        assert_eq!(debounced.next().await, Some(1));
        assert_eq!(debounced.next().await, None);
    }
}
