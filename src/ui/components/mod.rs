pub mod control_bar;
pub mod popup_menu;
