use chrono::{Local, Timelike};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use ec2_schedule_lambda::adapters::ec2::Ec2InstanceControl;
use ec2_schedule_lambda::handlers::start::handle_start_event;
use ec2_schedule_lambda::handlers::stop::handle_stop_event;
use ec2_schedule_lambda::runtime::contract::{
    parse_start_schedule, parse_stop_schedule, InvocationResponse, ScheduleTable, TimeOfDay,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScheduleAction {
    Start,
    Stop,
}

fn resolve_action(event: &Value) -> Result<ScheduleAction, Error> {
    let action = event
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::from("event must include an action of \"start\" or \"stop\""))?;

    match action {
        "start" => Ok(ScheduleAction::Start),
        "stop" => Ok(ScheduleAction::Stop),
        other => Err(Error::from(format!(
            "unsupported action '{other}' (expected start or stop)"
        ))),
    }
}

fn schedule_env_var(action: ScheduleAction) -> &'static str {
    match action {
        ScheduleAction::Start => "START_SCHEDULE",
        ScheduleAction::Stop => "STOP_SCHEDULE",
    }
}

fn parse_schedule(action: ScheduleAction, raw: &str) -> Result<ScheduleTable, Error> {
    let table = match action {
        ScheduleAction::Start => parse_start_schedule(raw),
        ScheduleAction::Stop => parse_stop_schedule(raw),
    };
    table.map_err(|error| Error::from(error.message().to_string()))
}

fn load_schedule(action: ScheduleAction) -> Result<ScheduleTable, Error> {
    let var_name = schedule_env_var(action);
    let raw = std::env::var(var_name)
        .map_err(|_| Error::from(format!("{var_name} must be configured")))?;
    parse_schedule(action, &raw)
}

async fn handle_request(event: LambdaEvent<Value>) -> Result<InvocationResponse, Error> {
    let action = resolve_action(&event.payload)?;
    let schedule = load_schedule(action)?;

    let now = Local::now();
    let current = TimeOfDay::new(now.hour(), now.minute());

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let control = Ec2InstanceControl::new(aws_sdk_ec2::Client::new(&config));

    match action {
        ScheduleAction::Start => handle_start_event(&schedule, current, &control)
            .map_err(|error| Error::from(error.message)),
        ScheduleAction::Stop => handle_stop_event(&schedule, current, &control)
            .map_err(|error| Error::from(error.message)),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn resolves_start_action() {
        let action = resolve_action(&json!({"action": "start"})).expect("action should resolve");
        assert_eq!(action, ScheduleAction::Start);
    }

    #[test]
    fn resolves_stop_action() {
        let action = resolve_action(&json!({"action": "stop"})).expect("action should resolve");
        assert_eq!(action, ScheduleAction::Stop);
    }

    #[test]
    fn rejects_event_without_action() {
        let error = resolve_action(&json!({})).expect_err("missing action should fail");
        assert!(error.to_string().contains("event must include an action"));
    }

    #[test]
    fn rejects_unsupported_action() {
        let error = resolve_action(&json!({"action": "restart"}))
            .expect_err("unknown action should fail");
        assert!(error.to_string().contains("unsupported action 'restart'"));
    }

    #[test]
    fn selects_the_env_var_for_the_action() {
        assert_eq!(schedule_env_var(ScheduleAction::Start), "START_SCHEDULE");
        assert_eq!(schedule_env_var(ScheduleAction::Stop), "STOP_SCHEDULE");
    }

    #[test]
    fn parses_the_schedule_for_the_action() {
        let raw = r#"{"i-1": {"start_time": [9, 0]}}"#;

        let table = parse_schedule(ScheduleAction::Start, raw).expect("start table should parse");
        assert_eq!(table["i-1"], TimeOfDay::new(9, 0));

        let error = parse_schedule(ScheduleAction::Stop, raw)
            .expect_err("start-shaped table should fail the stop parser");
        assert!(error.to_string().contains("Malformed stop schedule"));
    }
}
