pub mod compute;
pub mod ec2;
