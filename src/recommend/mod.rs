pub mod controller;
pub mod error;
pub mod history;
pub mod selection;
pub mod status;

pub use controller::{Controller, PendingRequest};
pub use error::RecommendError;
pub use history::{History, HistoryAction};
pub use selection::Selection;
pub use status::RequestStatus;
