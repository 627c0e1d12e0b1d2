//! CNAPP widget board: categories of widgets picked from a static catalog.
//!
//! Everything here is plain data and pure functions; the reactive store in the
//! frontend wraps [`board`] operations around a signal.

pub mod board;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod model;
pub mod signal;

pub use board::WidgetBoard;
pub use dataset::DashboardData;
pub use error::DatasetError;
pub use filter::{filter_catalog, picker_entries, search_categories, PickerEntry};
pub use model::{Category, CustomWidgetDraft, Widget};
pub use signal::{DashboardSignal, SignalConcern};
