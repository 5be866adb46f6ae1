pub mod card;
pub mod progress;
pub mod tabs;
pub mod toast;
