pub mod decoder;
pub mod encoder;
pub mod error;
pub mod matcher;
pub mod window;

pub use decoder::decode;
pub use encoder::{encode, encode_with_window, DEFAULT_WINDOW_SIZE};
pub use error::{Error, Result};
