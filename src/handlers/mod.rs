mod sidecar;
mod stream_decoder;

pub use sidecar::SidecarGenerator;
pub use stream_decoder::{DecodedBatch, StreamDecoder, decode_record};
