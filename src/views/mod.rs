pub mod about;
pub mod menu;

pub use about::AboutView;
pub use menu::MenuView;
