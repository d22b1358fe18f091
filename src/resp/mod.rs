mod error;
mod reader;
mod value;
mod writer;

pub use error::DecodeError;
pub use reader::Reader;
pub use value::Value;
pub use writer::Writer;
