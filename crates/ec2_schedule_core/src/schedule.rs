use crate::contract::{ScheduleTable, TimeOfDay};

/// Ids of every entry whose target equals `now`, in table iteration order.
///
/// Matching is exact-minute equality: an invocation that lands even one
/// minute off the configured boundary matches nothing.
pub fn due_instances(table: &ScheduleTable, now: TimeOfDay) -> Vec<&str> {
    table
        .iter()
        .filter(|(_, target)| **target == now)
        .map(|(instance_id, _)| instance_id.as_str())
        .collect()
}
