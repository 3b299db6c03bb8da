pub mod executor;
pub mod pool;
pub mod queries;
pub mod schema;

pub use executor::SchemaExecutor;
pub use pool::create_pool;
pub use queries::*;
