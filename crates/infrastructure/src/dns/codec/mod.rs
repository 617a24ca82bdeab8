pub mod cursor;
pub mod query_encoder;
pub mod response_decoder;
pub mod wire;

pub use cursor::WireCursor;
pub use query_encoder::QueryEncoder;
pub use response_decoder::ResponseDecoder;
pub use wire::WireHeader;
