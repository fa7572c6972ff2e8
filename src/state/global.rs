//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::state::session::ChatLog;

/// localStorage key for the persisted theme choice
const THEME_STORAGE_KEY: &str = "agent_theme";

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Ordered chat log; lives only for the page session
    pub chat: RwSignal<ChatLog>,
    /// Last successful analysis result, if any
    pub analysis: RwSignal<Option<AnalysisReport>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Color theme
    pub theme: RwSignal<Theme>,
}

/// Color theme for the whole shell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Classes applied to the app root
    pub fn root_class(self) -> &'static str {
        match self {
            Theme::Dark => "min-h-screen bg-gray-900 text-white flex",
            Theme::Light => "min-h-screen bg-gray-50 text-gray-900 flex",
        }
    }

    /// Classes for panel surfaces (sidebar, cards)
    pub fn surface_class(self) -> &'static str {
        match self {
            Theme::Dark => "bg-gray-800 border-gray-700",
            Theme::Light => "bg-white border-gray-200",
        }
    }

    fn storage_value(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    fn from_storage_value(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }
}

/// Full result of a file analysis, produced entirely by the server.
///
/// The client treats everything beyond `basic_info` as an opaque display
/// object; chart payloads are parsed only at render time.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AnalysisReport {
    pub analysis: AnalysisSummary,
    pub visualizations: Vec<Visualization>,
    pub insights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AnalysisSummary {
    pub basic_info: BasicInfo,
    /// Remaining server-side statistics, kept opaque
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct BasicInfo {
    pub rows: u64,
    pub columns: Vec<String>,
}

/// Server-provided chart descriptor
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Visualization {
    #[serde(rename = "type")]
    pub kind: VizKind,
    pub title: String,
    /// Serialized chart payload, parsed as JSON immediately before drawing
    pub data: String,
}

/// Chart type for a visualization descriptor
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VizKind {
    Line,
    Bar,
    Pie,
    /// Anything the client cannot draw; rendered as nothing
    #[serde(other)]
    Other,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        chat: create_rw_signal(ChatLog::new()),
        analysis: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        theme: create_rw_signal(load_theme()),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Flip the theme and persist the choice
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        store_theme(next);
    }
}

fn load_theme() -> Theme {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
                return Theme::from_storage_value(&value);
            }
        }
    }
    Theme::Dark
}

fn store_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(THEME_STORAGE_KEY, theme.storage_value());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::from_storage_value("light"), Theme::Light);
        assert_eq!(Theme::from_storage_value("garbage"), Theme::Dark);
    }

    #[test]
    fn test_analysis_report_deserializes_server_shape() {
        let raw = r#"{
            "analysis": {
                "basic_info": {"rows": 42, "columns": ["date", "sales"]},
                "statistics": {"sales": {"mean": 10.5}}
            },
            "visualizations": [
                {"type": "line", "title": "sales over time", "data": "{}"},
                {"type": "heatmap", "title": "Correlation Heatmap", "data": "{}"}
            ],
            "insights": ["Sales trend upward"]
        }"#;

        let report: AnalysisReport = serde_json::from_str(raw).unwrap();
        assert_eq!(report.analysis.basic_info.rows, 42);
        assert_eq!(report.analysis.basic_info.columns, vec!["date", "sales"]);
        assert!(report.analysis.extra.contains_key("statistics"));
        assert_eq!(report.visualizations.len(), 2);
        assert_eq!(report.visualizations[0].kind, VizKind::Line);
        // Unsupported chart types still deserialize, they just draw nothing
        assert_eq!(report.visualizations[1].kind, VizKind::Other);
        assert_eq!(report.insights.len(), 1);
    }
}
