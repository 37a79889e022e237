//! S3 blob store backed by the AWS CLI

use std::io::Write;

use crate::domain::ports::BlobStore;
use crate::error::{StackError, StackResult};

use super::cli::{args, AwsCli};
use super::dto::BucketLocationResponse;

const SERVICE: &str = "s3api";
const DEFAULT_REGION: &str = "us-east-1";

pub struct S3BlobStore {
    cli: AwsCli,
}

impl S3BlobStore {
    pub fn new(cli: AwsCli) -> Self {
        Self { cli }
    }
}

/// Normalize a `LocationConstraint` to a region name.
///
/// Buckets in us-east-1 report no constraint; very old EU buckets report `EU`.
pub fn region_from_constraint(constraint: Option<&str>) -> String {
    match constraint.map(str::trim) {
        None | Some("") => DEFAULT_REGION.to_string(),
        Some("EU") => "eu-west-1".to_string(),
        Some(region) => region.to_string(),
    }
}

/// Path-style host for a region
pub fn s3_endpoint(region: &str) -> String {
    if region == DEFAULT_REGION {
        "s3.amazonaws.com".to_string()
    } else {
        format!("s3-{}.amazonaws.com", region)
    }
}

impl BlobStore for S3BlobStore {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> StackResult<()> {
        let mut staged = tempfile::NamedTempFile::new()?;
        staged.write_all(body)?;
        staged.flush()?;

        let mut list = args(["--bucket", bucket, "--key", key, "--body"]);
        list.push(staged.path().as_os_str().to_os_string());

        self.cli.run(SERVICE, "put-object", &list)?;
        Ok(())
    }

    fn resolve_location(&self, bucket: &str) -> StackResult<String> {
        let unavailable = |message: String| StackError::StoreUnavailable {
            bucket: bucket.to_string(),
            message,
        };

        let value = self
            .cli
            .run(SERVICE, "get-bucket-location", &args(["--bucket", bucket]))
            .map_err(|err| unavailable(err.message))?;
        let response: BucketLocationResponse =
            serde_json::from_value(value).map_err(|e| unavailable(e.to_string()))?;

        Ok(region_from_constraint(response.location_constraint.as_deref()))
    }

    fn endpoint(&self, location: &str) -> String {
        s3_endpoint(location)
    }
}
