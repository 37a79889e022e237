//! Template publishing
//!
//! Uploads a template's wire form to the blob store under one key per stack
//! and returns the URL the control plane fetches it from.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::entities::Template;
use crate::domain::ports::BlobStore;
use crate::error::{StackError, StackResult};

/// Where a template was published
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedTemplate {
    pub bucket: String,
    pub key: String,
    pub url: String,
    /// `sha256:<hex>` of the uploaded bytes
    pub sha256: String,
}

/// Object key for a stack's template; publishing again overwrites it
pub fn template_key(stack_name: &str) -> String {
    format!("{}.template", stack_name)
}

/// Publishes templates into a single bucket
pub struct TemplatePublisher<BS: BlobStore> {
    store: BS,
    bucket: String,
}

impl<BS: BlobStore> TemplatePublisher<BS> {
    pub fn new(store: BS, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }

    pub fn publish(&self, template: &Template, stack_name: &str) -> StackResult<PublishedTemplate> {
        let key = template_key(stack_name);
        let body = template.to_compact_json()?.into_bytes();
        let sha256 = content_hash(&body);

        self.store.put_object(&self.bucket, &key, &body)?;

        let location = self
            .store
            .resolve_location(&self.bucket)
            .map_err(|err| match err {
                StackError::StoreUnavailable { .. } => err,
                other => StackError::StoreUnavailable {
                    bucket: self.bucket.clone(),
                    message: other.to_string(),
                },
            })?;
        let url = format!(
            "https://{}/{}/{}",
            self.store.endpoint(&location),
            self.bucket,
            key
        );

        tracing::info!(bucket = %self.bucket, key = %key, %sha256, bytes = body.len(), "published template");

        Ok(PublishedTemplate {
            bucket: self.bucket.clone(),
            key,
            url,
            sha256,
        })
    }
}

fn content_hash(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    format!("sha256:{:x}", hasher.finalize())
}
