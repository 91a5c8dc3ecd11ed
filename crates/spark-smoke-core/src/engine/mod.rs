//! Engine traits: backend-agnostic session, reader, and dataframe.

mod dataframe;
mod reader;
mod session;

pub use dataframe::DataFrameBackend;
pub use reader::DataFrameReaderBackend;
pub use session::SparkSessionBackend;
