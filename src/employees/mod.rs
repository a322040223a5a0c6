//! Employee records: storage and CRUD endpoints

pub mod api;
pub mod models;
pub mod store;

pub use api::AppState;
pub use store::EmployeeStore;
