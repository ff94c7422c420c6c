use crate::adapters::compute::InstanceControl;

/// EC2-backed control-plane adapter. Each call issues one
/// `StartInstances`/`StopInstances` request for a single instance id.
#[derive(Debug, Clone)]
pub struct Ec2InstanceControl {
    client: aws_sdk_ec2::Client,
}

impl Ec2InstanceControl {
    pub fn new(client: aws_sdk_ec2::Client) -> Self {
        Self { client }
    }
}

impl InstanceControl for Ec2InstanceControl {
    fn start_instance(&self, instance_id: &str) -> Result<(), String> {
        let client = self.client.clone();
        let id = instance_id.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .start_instances()
                    .instance_ids(id)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("ec2 start_instances call failed: {error}"))
            })
        })
    }

    fn stop_instance(&self, instance_id: &str) -> Result<(), String> {
        let client = self.client.clone();
        let id = instance_id.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .stop_instances()
                    .instance_ids(id)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("ec2 stop_instances call failed: {error}"))
            })
        })
    }
}
