//! Application service layer.
//!
//! Services contain the load/mutate/persist lifecycle and orchestrate the
//! contact book and its repositories. They provide a clean boundary between
//! the interactive controller and the data access layer.

mod contact_service;

pub use contact_service::ContactService;
