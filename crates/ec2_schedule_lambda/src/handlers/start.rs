use serde_json::json;

use crate::adapters::compute::InstanceControl;
use crate::handlers::{log_handler_error, log_handler_info, HandlerError};
use crate::runtime::contract::{InvocationResponse, ScheduleTable, TimeOfDay};
use crate::runtime::schedule::due_instances;

const COMPONENT: &str = "start_handler";

pub fn handle_start_event(
    schedule: &ScheduleTable,
    now: TimeOfDay,
    control: &dyn InstanceControl,
) -> Result<InvocationResponse, HandlerError> {
    for instance_id in due_instances(schedule, now) {
        if let Err(error) = control.start_instance(instance_id) {
            log_handler_error(
                COMPONENT,
                "instance_start_failed",
                json!({
                    "instance_id": instance_id,
                    "hour": now.hour,
                    "minute": now.minute,
                    "error": error.clone(),
                }),
            );
            return Err(HandlerError {
                message: format!("Failed to start instance {instance_id}: {error}"),
                instance_id: Some(instance_id.to_string()),
            });
        }

        log_handler_info(
            COMPONENT,
            "instance_started",
            json!({
                "instance_id": instance_id,
                "hour": now.hour,
                "minute": now.minute,
            }),
        );
    }

    Ok(InvocationResponse::completed())
}
