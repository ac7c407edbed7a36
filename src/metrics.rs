use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing upload activity.
#[derive(Default)]
pub struct UploadMetrics {
    upload_requests: AtomicU64,
    files_accepted: AtomicU64,
    files_skipped: AtomicU64,
}

impl UploadMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished upload request and how many of its files were stored or skipped.
    pub fn record_upload(&self, accepted: u64, skipped: u64) {
        self.upload_requests.fetch_add(1, Ordering::Relaxed);
        self.files_accepted.fetch_add(accepted, Ordering::Relaxed);
        self.files_skipped.fetch_add(skipped, Ordering::Relaxed);
    }

    /// Return a snapshot of the current counters alongside the live store size.
    pub fn snapshot(&self, documents_stored: usize) -> MetricsSnapshot {
        MetricsSnapshot {
            documents_stored: documents_stored as u64,
            upload_requests: self.upload_requests.load(Ordering::Relaxed),
            files_accepted: self.files_accepted.load(Ordering::Relaxed),
            files_skipped: self.files_skipped.load(Ordering::Relaxed),
        }
    }
}

/// Immutable view of upload counters used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Documents currently held by the store.
    pub documents_stored: u64,
    /// Upload requests handled since startup, successful or not.
    pub upload_requests: u64,
    /// Files turned into documents since startup.
    pub files_accepted: u64,
    /// Files skipped (non-PDF, unreadable, or empty) since startup.
    pub files_skipped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_uploads_and_files() {
        let metrics = UploadMetrics::new();
        metrics.record_upload(2, 1);
        metrics.record_upload(0, 3);

        let snapshot = metrics.snapshot(2);
        assert_eq!(snapshot.upload_requests, 2);
        assert_eq!(snapshot.files_accepted, 2);
        assert_eq!(snapshot.files_skipped, 4);
        assert_eq!(snapshot.documents_stored, 2);
    }

    #[test]
    fn snapshot_starts_empty() {
        let metrics = UploadMetrics::new();
        assert_eq!(
            metrics.snapshot(0),
            MetricsSnapshot {
                documents_stored: 0,
                upload_requests: 0,
                files_accepted: 0,
                files_skipped: 0,
            }
        );
    }
}
