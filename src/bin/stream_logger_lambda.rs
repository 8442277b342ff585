use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use metasidecar::{KinesisEvent, StreamDecoder, telemetry};

async fn handle_request(
    decoder: StreamDecoder,
    event: LambdaEvent<KinesisEvent>,
) -> Result<(), Error> {
    decoder.handle(&event.payload);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();

    let decoder = StreamDecoder::new();
    run(service_fn(move |event: LambdaEvent<KinesisEvent>| {
        handle_request(decoder, event)
    }))
    .await
}
