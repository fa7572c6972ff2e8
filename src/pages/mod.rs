//! Pages
//!
//! Top-level page components for each route.

pub mod analysis;
pub mod chat;
pub mod login;
pub mod register;

pub use analysis::Analysis;
pub use chat::Chat;
pub use login::Login;
pub use register::Register;
