pub mod add_widget_modal;
pub mod category_section;
pub mod dashboard;
pub mod widget_card;

pub use dashboard::WidgetBoardDashboard;
