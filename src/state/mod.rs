//! State Management
//!
//! Global reactive state, the chat session log, and the auth gate.

pub mod auth;
pub mod global;
pub mod session;

pub use auth::{provide_auth_state, AuthState};
pub use global::{provide_global_state, AnalysisReport, GlobalState, Theme, Visualization, VizKind};
pub use session::{clean_input, insight_summary, ChatLog, Message, Sender};
