//! Post/broadcast dispatcher seam.
//!
//! The analyzers never publish anything. A caller hands a finished title,
//! hook or post body to a [`Dispatcher`] together with a [`Schedule`]; real
//! implementations wrap a scheduling API. [`DryRunDispatcher`] only logs the
//! payload it would send.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AppError;

/// When a post should go out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "at")]
pub enum Schedule {
    Now,
    NextFreeSlot,
    At(DateTime<Utc>),
    /// Keep as an unscheduled draft
    Draft,
}

impl Schedule {
    /// Value for a scheduling API's `publish_at`/`send_at` field; `None` for drafts
    pub fn api_value(&self) -> Option<String> {
        match self {
            Schedule::Now => Some("now".to_string()),
            Schedule::NextFreeSlot => Some("next-free-slot".to_string()),
            Schedule::At(at) => Some(at.to_rfc3339()),
            Schedule::Draft => None,
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.api_value() {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "draft"),
        }
    }
}

impl FromStr for Schedule {
    type Err = AppError;

    /// Accepts `now`, `next-free-slot`, `draft` (or empty) and RFC 3339 timestamps.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "draft" => Ok(Schedule::Draft),
            "now" => Ok(Schedule::Now),
            "next-free-slot" => Ok(Schedule::NextFreeSlot),
            other => {
                let at = DateTime::parse_from_rfc3339(other)?;
                Ok(Schedule::At(at.with_timezone(&Utc)))
            }
        }
    }
}

/// A finished piece of text to publish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchRequest {
    pub text: String,
    pub schedule: Schedule,
    /// Share/preview options passed through to the service
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

impl DispatchRequest {
    pub fn new(text: impl Into<String>, schedule: Schedule) -> Self {
        Self {
            text: text.into(),
            schedule,
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Reject requests no service would accept
    pub fn validate(&self) -> Result<(), AppError> {
        if self.text.trim().is_empty() {
            return Err(AppError::Validation("Post text is empty".to_string()));
        }
        Ok(())
    }
}

/// Delivery confirmation returned by a dispatcher
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DispatchReceipt {
    pub success: bool,
    pub id: Option<String>,
    pub status: Option<String>,
    pub scheduled_time: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub error: Option<String>,
}

impl DispatchReceipt {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Turn a failed receipt into [`AppError::Dispatch`]
    pub fn into_result(self) -> Result<Self, AppError> {
        if self.success {
            Ok(self)
        } else {
            Err(AppError::Dispatch(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if self.success {
            lines.push("Post dispatched successfully".to_string());
            if let Some(id) = &self.id {
                lines.push(format!("   ID: {}", id));
            }
            if let Some(status) = &self.status {
                lines.push(format!("   Status: {}", status));
            }
            if let Some(at) = &self.scheduled_time {
                lines.push(format!("   Scheduled: {}", at.to_rfc3339()));
            }
            if let Some(url) = &self.url {
                lines.push(format!("   URL: {}", url));
            }
        } else {
            lines.push("Failed to dispatch post".to_string());
            if let Some(error) = &self.error {
                lines.push(format!("   Error: {}", error));
            }
        }
        lines.join("\n")
    }
}

/// Publishes finished text to an external service.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: DispatchRequest) -> Result<DispatchReceipt, AppError>;
}

/// Dispatcher that validates and logs the payload without sending it.
///
/// Requests a service would reject come back as a failed receipt, not an
/// `Err`, the same way a real service reports them.
#[derive(Debug, Default, Clone)]
pub struct DryRunDispatcher;

#[async_trait]
impl Dispatcher for DryRunDispatcher {
    async fn dispatch(&self, request: DispatchRequest) -> Result<DispatchReceipt, AppError> {
        if let Err(e) = request.validate() {
            warn!(error = %e, "dry run dispatch rejected");
            return Ok(DispatchReceipt::failed(e.to_string()));
        }

        let payload = serde_json::to_string(&request)?;
        info!(schedule = %request.schedule, payload = %payload, "dry run dispatch");

        let (status, scheduled_time) = match request.schedule {
            Schedule::Now => ("published", Some(Utc::now())),
            Schedule::NextFreeSlot => ("scheduled", None),
            Schedule::At(at) => ("scheduled", Some(at)),
            Schedule::Draft => ("draft", None),
        };

        Ok(DispatchReceipt {
            success: true,
            id: Some(Uuid::new_v4().to_string()),
            status: Some(status.to_string()),
            scheduled_time,
            url: None,
            error: None,
        })
    }
}
