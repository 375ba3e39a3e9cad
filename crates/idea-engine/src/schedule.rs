//! Schedule service seam
//!
//! The daily generation run is owned by an external scheduler; the engine
//! only inspects and toggles it. Cron evaluation stays on the service side.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Schedule service errors
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// HTTP request failed
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A scheduled recurring run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub cron_expression: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub next_run_time: Option<String>,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default)]
    pub last_run_success: Option<bool>,
}

/// One past execution of a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionLog {
    pub id: String,
    pub executed_at: String,
    pub success: bool,
    #[serde(default)]
    pub attempt: u32,
    #[serde(default)]
    pub max_attempts: u32,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Narrow interface to the external scheduler
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Fetch a schedule by id
    async fn get(&self, schedule_id: &str) -> Result<Schedule, ScheduleError>;

    /// Most recent executions, newest first
    async fn list_executions(
        &self,
        schedule_id: &str,
        limit: usize,
    ) -> Result<Vec<ExecutionLog>, ScheduleError>;

    /// Pause the schedule
    async fn pause(&self, schedule_id: &str) -> Result<(), ScheduleError>;

    /// Resume a paused schedule
    async fn resume(&self, schedule_id: &str) -> Result<(), ScheduleError>;

    /// Run the schedule immediately, out of band
    async fn trigger_now(&self, schedule_id: &str) -> Result<(), ScheduleError>;
}

/// HTTP implementation of the schedule service
#[derive(Debug, Clone)]
pub struct HttpScheduleService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpScheduleService {
    /// Create a client against `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, tail: &str) -> String {
        format!("{}/v1/schedules/{tail}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ScheduleService for HttpScheduleService {
    async fn get(&self, schedule_id: &str) -> Result<Schedule, ScheduleError> {
        let schedule = self
            .client
            .get(self.url(schedule_id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(schedule)
    }

    async fn list_executions(
        &self,
        schedule_id: &str,
        limit: usize,
    ) -> Result<Vec<ExecutionLog>, ScheduleError> {
        let executions = self
            .client
            .get(self.url(&format!("{schedule_id}/executions")))
            .query(&[("limit", limit)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(executions)
    }

    async fn pause(&self, schedule_id: &str) -> Result<(), ScheduleError> {
        self.client
            .post(self.url(&format!("{schedule_id}/pause")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn resume(&self, schedule_id: &str) -> Result<(), ScheduleError> {
        self.client
            .post(self.url(&format!("{schedule_id}/resume")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn trigger_now(&self, schedule_id: &str) -> Result<(), ScheduleError> {
        self.client
            .post(self.url(&format!("{schedule_id}/trigger")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Human-readable form of the common cron shapes
///
/// Unrecognized expressions come back verbatim.
#[must_use]
pub fn cron_to_human(expr: &str) -> String {
    const DAYS: [&str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    let fields: Vec<&str> = expr.split_whitespace().collect();
    let [minute, hour, dom, month, dow] = fields.as_slice() else {
        return expr.to_string();
    };

    if let Some(step) = minute.strip_prefix("*/") {
        if *hour == "*" && *dom == "*" && *month == "*" && *dow == "*" {
            return format!("Every {step} minutes");
        }
    }

    let Ok(minute_num) = minute.parse::<u32>() else {
        return expr.to_string();
    };

    if *hour == "*" && *dom == "*" && *month == "*" && *dow == "*" {
        return format!("Hourly at :{minute_num:02}");
    }

    let Ok(hour_num) = hour.parse::<u32>() else {
        return expr.to_string();
    };

    if *dom == "*" && *month == "*" {
        if *dow == "*" {
            return format!("Daily at {hour_num:02}:{minute_num:02}");
        }
        if let Some(day) = dow.parse::<usize>().ok().and_then(|d| DAYS.get(d)) {
            return format!("Weekly on {day} at {hour_num:02}:{minute_num:02}");
        }
    }

    expr.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cron_common_shapes() {
        assert_eq!(cron_to_human("0 9 * * *"), "Daily at 09:00");
        assert_eq!(cron_to_human("30 17 * * *"), "Daily at 17:30");
        assert_eq!(cron_to_human("*/15 * * * *"), "Every 15 minutes");
        assert_eq!(cron_to_human("5 * * * *"), "Hourly at :05");
        assert_eq!(cron_to_human("0 9 * * 1"), "Weekly on Monday at 09:00");
    }

    #[test]
    fn cron_unknown_shapes_pass_through() {
        assert_eq!(cron_to_human("0 9 1 * *"), "0 9 1 * *");
        assert_eq!(cron_to_human("not cron"), "not cron");
        assert_eq!(cron_to_human(""), "");
    }

    #[test]
    fn schedule_deserializes_with_missing_optionals() {
        let schedule: Schedule = serde_json::from_str(r#"{"id":"sched-1"}"#).unwrap();
        assert_eq!(schedule.id, "sched-1");
        assert!(!schedule.is_active);
        assert!(schedule.next_run_time.is_none());
        assert!(schedule.last_run_success.is_none());
    }

    #[test]
    fn execution_log_deserializes() {
        let log: ExecutionLog = serde_json::from_str(
            r#"{"id":"run-1","executed_at":"2026-02-17T09:00:00Z","success":false,
                "attempt":2,"max_attempts":3,"error_message":"timeout"}"#,
        )
        .unwrap();
        assert_eq!(log.attempt, 2);
        assert_eq!(log.error_message.as_deref(), Some("timeout"));
    }
}
