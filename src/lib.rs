//! Document state and pricing engine for an event-rental quotation/invoice
//! application: item selection with degressive multi-day pricing, and the
//! bridge mapping the in-memory aggregate onto the remote storage schema.

pub mod backend;
pub mod models;
pub mod services;
pub mod utils;

pub use backend::{Backend, BackendError, HttpBackend};
pub use services::bridge::SaveOutcome;
pub use services::pricing::rental_price;
pub use services::selection::Update;
pub use services::session::{Session, SessionError};
