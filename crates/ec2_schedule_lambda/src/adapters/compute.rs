pub trait InstanceControl {
    fn start_instance(&self, instance_id: &str) -> Result<(), String>;
    fn stop_instance(&self, instance_id: &str) -> Result<(), String>;
}
