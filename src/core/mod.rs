//! Core module containing the order model and the intake pipeline

pub mod error;
pub mod gateway;
pub mod order;
pub mod pipeline;
pub mod store;
pub mod validation;

pub use error::{DecodeError, OrderError, PersistenceError, StartupError, ValidationError};
pub use gateway::{DEFAULT_STORE_TIMEOUT, StoreGateway};
pub use order::{Order, OrderForm, OrderId, OrderReceipt};
pub use pipeline::OrderPipeline;
pub use store::OrderStore;
pub use validation::{ValidatedOrder, validate_order};
