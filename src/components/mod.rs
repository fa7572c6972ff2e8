//! UI Components
//!
//! Reusable Leptos components for the console.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod sidebar;
pub mod toast;

pub use chart::ChartPanel;
pub use loading::{AnalysisSkeleton, TypingIndicator};
pub use nav::Navbar;
pub use sidebar::Sidebar;
pub use toast::Toast;
