//! Dispatch Tests
//!
//! The dry-run dispatcher and the dispatcher trait as a seam.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Mutex;

use crate::dispatch::{DispatchReceipt, DispatchRequest, Dispatcher, DryRunDispatcher, Schedule};
use crate::error::AppError;

/// Records every request instead of sending it
#[derive(Default)]
struct RecordingDispatcher {
    sent: Mutex<Vec<DispatchRequest>>,
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: DispatchRequest) -> Result<DispatchReceipt, AppError> {
        request.validate()?;
        let mut sent = self
            .sent
            .lock()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        sent.push(request);
        Ok(DispatchReceipt {
            success: true,
            id: Some(format!("post-{}", sent.len())),
            ..DispatchReceipt::default()
        })
    }
}

#[cfg(test)]
mod dry_run_tests {
    use super::*;

    #[tokio::test]
    async fn test_statuses() {
        let dispatcher = DryRunDispatcher;
        let cases = vec![
            (Schedule::Now, "published"),
            (Schedule::NextFreeSlot, "scheduled"),
            (Schedule::Draft, "draft"),
        ];

        for (schedule, expected) in cases {
            let receipt = dispatcher
                .dispatch(DispatchRequest::new("My $500 Mistake", schedule))
                .await
                .unwrap();
            assert!(receipt.success);
            assert_eq!(receipt.status.as_deref(), Some(expected));
            assert!(receipt.id.is_some());
        }
    }

    #[tokio::test]
    async fn test_scheduled_time_kept() {
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let receipt = DryRunDispatcher
            .dispatch(DispatchRequest::new("Title", Schedule::At(at)))
            .await
            .unwrap();

        assert_eq!(receipt.scheduled_time, Some(at));
        assert!(receipt.summary().contains("Scheduled: 2026-03-01T09:30:00+00:00"));
    }

    #[tokio::test]
    async fn test_empty_text_fails_receipt() {
        let receipt = DryRunDispatcher
            .dispatch(DispatchRequest::new("   ", Schedule::Now))
            .await
            .unwrap();
        assert!(!receipt.success);
        assert!(receipt.id.is_none());
        assert!(receipt.summary().contains("Post text is empty"));

        let err = receipt.into_result().unwrap_err();
        assert!(matches!(err, AppError::Dispatch(_)));
    }

    #[tokio::test]
    async fn test_unique_ids() {
        let a = DryRunDispatcher
            .dispatch(DispatchRequest::new("a", Schedule::Draft))
            .await
            .unwrap();
        let b = DryRunDispatcher
            .dispatch(DispatchRequest::new("b", Schedule::Draft))
            .await
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}

#[cfg(test)]
mod seam_tests {
    use super::*;

    #[tokio::test]
    async fn test_trait_object() {
        let recorder = RecordingDispatcher::default();
        {
            let dispatcher: &dyn Dispatcher = &recorder;
            let request = DispatchRequest::new("Hook text", Schedule::NextFreeSlot)
                .with_option("thumbnail", "auto");
            let receipt = dispatcher.dispatch(request).await.unwrap();
            assert_eq!(receipt.id.as_deref(), Some("post-1"));
        }

        let sent = recorder.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].options.get("thumbnail").map(String::as_str), Some("auto"));
    }

    #[test]
    fn test_request_json_shape() {
        let at = Utc.with_ymd_and_hms(2026, 1, 20, 16, 0, 0).unwrap();
        let request = DispatchRequest::new("Title", Schedule::At(at));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["text"], "Title");
        assert_eq!(json["schedule"]["kind"], "at");
        assert_eq!(json["schedule"]["at"], "2026-01-20T16:00:00Z");

        let back: DispatchRequest = serde_json::from_value(json).unwrap();
        assert_eq!(back, request);
    }
}
