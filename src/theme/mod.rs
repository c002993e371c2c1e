//! Theme - Table classes and colors

pub mod classes;
pub mod colors;

pub use classes::TableTheme;
pub use colors::TableColors;
