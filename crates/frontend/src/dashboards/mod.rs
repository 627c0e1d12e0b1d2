pub mod d100_widget_board;

pub use d100_widget_board::ui::WidgetBoardDashboard;
