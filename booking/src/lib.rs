pub mod error;
pub mod ids;
pub mod manager;
pub mod model;
pub mod store;
