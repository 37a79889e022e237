//! BlobStore port - object storage the control plane can fetch templates from

use crate::error::StackResult;

/// Abstract object store
pub trait BlobStore {
    /// Store `body` under `bucket/key`, replacing any previous object
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> StackResult<()>;

    /// Region token of the bucket; `StackError::StoreUnavailable` if unknown
    fn resolve_location(&self, bucket: &str) -> StackResult<String>;

    /// Host serving objects for a bucket in `location`
    fn endpoint(&self, location: &str) -> String;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn put_object(&self, bucket: &str, key: &str, body: &[u8]) -> StackResult<()> {
        (**self).put_object(bucket, key, body)
    }

    fn resolve_location(&self, bucket: &str) -> StackResult<String> {
        (**self).resolve_location(bucket)
    }

    fn endpoint(&self, location: &str) -> String {
        (**self).endpoint(location)
    }
}
