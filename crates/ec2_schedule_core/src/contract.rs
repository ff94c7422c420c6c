use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const COMPLETION_STATUS_CODE: u16 = 200;
pub const COMPLETION_BODY: &str = "Function execution completed.";
pub const MAX_HOUR: u32 = 23;
pub const MAX_MINUTE: u32 = 59;

pub type ScheduleTable = BTreeMap<String, TimeOfDay>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn completed() -> Self {
        Self {
            status_code: COMPLETION_STATUS_CODE,
            body: COMPLETION_BODY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Deserialize)]
struct StartTimeEntry {
    start_time: (u32, u32),
}

#[derive(Debug, Clone, Deserialize)]
struct StopTimeEntry {
    stop_time: (u32, u32),
}

pub fn parse_start_schedule(raw: &str) -> Result<ScheduleTable, ValidationError> {
    let entries: BTreeMap<String, StartTimeEntry> = serde_json::from_str(raw)
        .map_err(|error| ValidationError::new(format!("Malformed start schedule: {error}")))?;
    build_table(entries.into_iter().map(|(id, entry)| (id, entry.start_time)))
}

pub fn parse_stop_schedule(raw: &str) -> Result<ScheduleTable, ValidationError> {
    let entries: BTreeMap<String, StopTimeEntry> = serde_json::from_str(raw)
        .map_err(|error| ValidationError::new(format!("Malformed stop schedule: {error}")))?;
    build_table(entries.into_iter().map(|(id, entry)| (id, entry.stop_time)))
}

fn build_table(
    entries: impl Iterator<Item = (String, (u32, u32))>,
) -> Result<ScheduleTable, ValidationError> {
    let mut table = ScheduleTable::new();
    for (raw_id, (hour, minute)) in entries {
        let instance_id = raw_id.trim().to_string();
        if instance_id.is_empty() {
            return Err(ValidationError::new("Instance id cannot be empty"));
        }
        if hour > MAX_HOUR {
            return Err(ValidationError::new(format!(
                "Instance '{instance_id}' hour must be at most {MAX_HOUR} (got {hour})"
            )));
        }
        if minute > MAX_MINUTE {
            return Err(ValidationError::new(format!(
                "Instance '{instance_id}' minute must be at most {MAX_MINUTE} (got {minute})"
            )));
        }
        if table.contains_key(&instance_id) {
            return Err(ValidationError::new(format!(
                "Duplicate instance id '{instance_id}'"
            )));
        }
        table.insert(instance_id, TimeOfDay::new(hour, minute));
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_start_schedule_accepts_hour_minute_pairs() {
        let table = parse_start_schedule(
            r#"{"i-0abc": {"start_time": [9, 0]}, "i-0def": {"start_time": [23, 59]}}"#,
        )
        .expect("schedule should parse");

        assert_eq!(table.len(), 2);
        assert_eq!(table["i-0abc"], TimeOfDay::new(9, 0));
        assert_eq!(table["i-0def"], TimeOfDay::new(23, 59));
    }

    #[test]
    fn parse_start_schedule_accepts_empty_table() {
        let table = parse_start_schedule("{}").expect("empty schedule should parse");
        assert!(table.is_empty());
    }

    #[test]
    fn parse_start_schedule_trims_instance_ids() {
        let table = parse_start_schedule(r#"{" i-0abc ": {"start_time": [9, 0]}}"#)
            .expect("schedule should parse");

        assert!(table.contains_key("i-0abc"));
    }

    #[test]
    fn parse_start_schedule_rejects_malformed_json() {
        let error = parse_start_schedule("not json").expect_err("parse should fail");
        assert!(error.message().starts_with("Malformed start schedule"));
    }

    #[test]
    fn parse_start_schedule_rejects_out_of_range_hour() {
        let error = parse_start_schedule(r#"{"i-0abc": {"start_time": [24, 0]}}"#)
            .expect_err("parse should fail");
        assert_eq!(
            error.message(),
            "Instance 'i-0abc' hour must be at most 23 (got 24)"
        );
    }

    #[test]
    fn parse_start_schedule_rejects_out_of_range_minute() {
        let error = parse_start_schedule(r#"{"i-0abc": {"start_time": [9, 60]}}"#)
            .expect_err("parse should fail");
        assert_eq!(
            error.message(),
            "Instance 'i-0abc' minute must be at most 59 (got 60)"
        );
    }

    #[test]
    fn parse_start_schedule_rejects_blank_instance_id() {
        let error = parse_start_schedule(r#"{"  ": {"start_time": [9, 0]}}"#)
            .expect_err("parse should fail");
        assert_eq!(error.message(), "Instance id cannot be empty");
    }

    #[test]
    fn parse_start_schedule_rejects_duplicate_ids_after_trim() {
        let error = parse_start_schedule(
            r#"{" i-0abc": {"start_time": [9, 0]}, "i-0abc": {"start_time": [10, 0]}}"#,
        )
        .expect_err("parse should fail");
        assert_eq!(error.message(), "Duplicate instance id 'i-0abc'");
    }

    #[test]
    fn parse_stop_schedule_requires_stop_time_key() {
        let table = parse_stop_schedule(r#"{"i-0abc": {"stop_time": [18, 30]}}"#)
            .expect("stop schedule should parse");
        assert_eq!(table["i-0abc"], TimeOfDay::new(18, 30));

        let error = parse_stop_schedule(r#"{"i-0abc": {"start_time": [18, 30]}}"#)
            .expect_err("start-shaped table should fail");
        assert!(error.message().starts_with("Malformed stop schedule"));
    }

    #[test]
    fn completed_response_is_fixed() {
        let response = InvocationResponse::completed();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, "Function execution completed.");
    }

    #[test]
    fn invocation_response_serializes_status_code_key() {
        let serialized = serde_json::to_value(InvocationResponse::completed())
            .expect("response should serialize");
        assert_eq!(serialized["statusCode"], 200);
        assert_eq!(serialized["body"], "Function execution completed.");
    }
}
