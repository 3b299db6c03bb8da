pub mod schema_initializer;

pub use schema_initializer::SchemaInitializer;
