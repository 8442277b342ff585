use clap::Parser;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use metasidecar::{Cli, S3Notification, SidecarGenerator, storage, telemetry};

async fn handle_request(
    generator: &SidecarGenerator,
    event: LambdaEvent<S3Notification>,
) -> Result<String, Error> {
    tracing::debug!("Handling request {}", event.context.request_id);

    let message = generator.handle(&event.payload).await?;
    tracing::info!("{}", message);
    Ok(message)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let config = Cli::parse().into_config().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let storage = storage::from_config(&config.storage).await;
    let generator = SidecarGenerator::new(storage, config.write_mode, config.record_scope)
        .with_key_decoding(config.decode_keys);

    run(service_fn(move |event: LambdaEvent<S3Notification>| {
        let generator = generator.clone();
        async move { handle_request(&generator, event).await }
    }))
    .await
}
