//! AWS adapters
//!
//! Implement the control plane and blob store ports by shelling out to the
//! `aws` CLI, the same way remote file operations shell out to `ssh`.

mod cli;
mod cloudformation;
mod dto;
mod s3;

pub use cli::{AwsCli, AwsCliError};
pub use cloudformation::{request_args, CloudFormationControlPlane};
pub use s3::{region_from_constraint, s3_endpoint, S3BlobStore};
