pub mod error;
pub mod loading;
pub mod share_buttons;

pub use share_buttons::ShareButtons;
