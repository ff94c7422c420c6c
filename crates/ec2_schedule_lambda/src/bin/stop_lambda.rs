use chrono::{Local, Timelike};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use ec2_schedule_lambda::adapters::ec2::Ec2InstanceControl;
use ec2_schedule_lambda::handlers::stop::handle_stop_event;
use ec2_schedule_lambda::runtime::contract::{parse_stop_schedule, InvocationResponse, TimeOfDay};

async fn handle_request(_event: LambdaEvent<Value>) -> Result<InvocationResponse, Error> {
    let raw_schedule = std::env::var("STOP_SCHEDULE")
        .map_err(|_| Error::from("STOP_SCHEDULE must be configured"))?;
    let schedule = parse_stop_schedule(&raw_schedule)
        .map_err(|error| Error::from(error.message().to_string()))?;

    let now = Local::now();
    let current = TimeOfDay::new(now.hour(), now.minute());

    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let control = Ec2InstanceControl::new(aws_sdk_ec2::Client::new(&config));

    handle_stop_event(&schedule, current, &control).map_err(|error| Error::from(error.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
