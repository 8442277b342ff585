use crate::storage::backend::{ObjectStore, PutObjectRequest};
use crate::types::StorageError;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ServerSideEncryption;

pub struct S3Backend {
    client: S3Client,
}

impl S3Backend {
    pub fn from_client(client: S3Client) -> Self {
        Self { client }
    }

    /// Build a client from the default provider chain, with optional overrides
    pub async fn new(
        region: Option<String>,
        endpoint: Option<String>,
        force_path_style: bool,
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Self {
        let mut config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest());

        if let Some(region) = region {
            config_loader = config_loader.region(aws_config::Region::new(region));
        }

        // Set credentials if provided
        if let (Some(key_id), Some(secret_key)) = (access_key_id, secret_access_key) {
            config_loader = config_loader.credentials_provider(
                aws_sdk_s3::config::Credentials::new(key_id, secret_key, None, None, "static"),
            );
        }

        let config = config_loader.load().await;

        let mut s3_config_builder =
            aws_sdk_s3::config::Builder::from(&config).force_path_style(force_path_style);

        if let Some(endpoint_url) = endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint_url);
        }

        Self::from_client(S3Client::from_conf(s3_config_builder.build()))
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3Backend {
    async fn put_object(&self, request: PutObjectRequest) -> Result<String, StorageError> {
        tracing::debug!("Putting object s3://{}/{}", request.bucket, request.key);

        let mut builder = self
            .client
            .put_object()
            .bucket(&request.bucket)
            .key(&request.key)
            .content_type(&request.content_type)
            .body(ByteStream::from(request.body));

        if let Some(sse) = request.server_side_encryption.as_deref() {
            builder = builder.server_side_encryption(ServerSideEncryption::from(sse));
        }

        match builder.send().await {
            Ok(output) => {
                tracing::debug!("Stored object s3://{}/{}", request.bucket, request.key);
                Ok(output.e_tag().map(|s| s.to_string()).unwrap_or_default())
            }
            Err(err) => match err.code() {
                Some("NoSuchBucket") => Err(StorageError::NoSuchBucket(request.bucket)),
                Some("AccessDenied") => Err(StorageError::AccessDenied),
                _ => Err(StorageError::InternalError(format!(
                    "Failed to store s3://{}/{}: {}",
                    request.bucket,
                    request.key,
                    DisplayErrorContext(&err)
                ))),
            },
        }
    }
}
