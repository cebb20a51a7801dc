//! UI layer: app shell, screens, overlays and theme.

pub mod app;
pub mod overlays;
pub mod theme;
pub mod views;

pub use app::DesktopGuiApp;
