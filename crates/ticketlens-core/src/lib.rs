//! Dataset loading and record types for support ticket exports

mod dataset;
mod paths;
mod types;

pub use dataset::{Dataset, DatasetError};
pub use paths::Paths;
pub use types::TicketRecord;
