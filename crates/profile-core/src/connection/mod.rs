//! Connection records and the store they are read from.
//!
//! The mapping layer only ever reads connections: a store hands out owned
//! records by identifier and nothing here writes them back.

mod store;
mod types;

pub use store::{ConnectionStore, InMemoryConnectionStore, JsonFileConnectionStore};
pub use types::ConnectionRecord;
