pub mod layout_type;
pub mod time_range;
pub mod widget_type;

pub use layout_type::LayoutType;
pub use time_range::TimeRange;
pub use widget_type::WidgetType;
