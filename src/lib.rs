pub mod client;
pub mod driver;
pub mod error;
pub mod params;
pub mod registry;

pub use client::DataSourceClient;
pub use driver::Driver;
pub use driver::connection::Connection;
pub use driver::value::Value;
pub use error::{ClientError, Result};
pub use params::{COMMON_USER, COMMON_VALIDATION_QUERY, ConnectionParams, DbType};
pub use registry::{DRIVERS, DriverRegistry};
