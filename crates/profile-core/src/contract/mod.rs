//! The contract every warehouse variant implements, and the mapping instance
//! built from it.

pub mod mapper;
pub mod mapping;
pub mod types;

pub use mapper::{ParamMapping, ProfileMapper};
pub use mapping::ProfileMapping;
pub use types::{EnvVarMap, Profile, ProfileArgs};
