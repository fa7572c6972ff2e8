//! Data Analysis Page
//!
//! Upload a spreadsheet/CSV file, render the returned insights, chart
//! descriptors, and summary statistics. A failed upload leaves any prior
//! result untouched.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{AnalysisSkeleton, ChartPanel};
use crate::state::global::{AnalysisReport, GlobalState};

/// Data analysis page component
#[component]
pub fn Analysis() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (uploading, set_uploading) = create_signal(false);

    let state_for_upload = state.clone();
    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };

        let file = match input.files().and_then(|files| files.get(0)) {
            Some(file) => file,
            None => return,
        };
        input.set_value("");

        set_uploading.set(true);

        let state_clone = state_for_upload.clone();
        spawn_local(async move {
            match api::analyze_file(&file).await {
                Ok(report) => {
                    state_clone.analysis.set(Some(report));
                }
                Err(_) => {
                    // Prior result stays as-is
                    state_clone.show_error("Failed to analyze file");
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            // Header and upload control
            <div>
                <h1 class="text-2xl font-bold mb-4">"Data Analysis"</h1>

                <label
                    class="inline-flex items-center space-x-2 px-6 py-3 bg-primary-600
                           hover:bg-primary-700 rounded-lg font-medium cursor-pointer
                           transition-colors"
                >
                    <input
                        type="file"
                        accept=".csv,.xlsx,.xls"
                        class="hidden"
                        on:change=on_file_change
                        disabled=move || uploading.get()
                    />
                    <span>{move || if uploading.get() { "Analyzing..." } else { "Upload File" }}</span>
                </label>
            </div>

            {move || {
                if uploading.get() {
                    view! { <AnalysisSkeleton /> }.into_view()
                } else if let Some(report) = state.analysis.get() {
                    view! { <ReportView report /> }.into_view()
                } else {
                    view! {
                        <p class="text-gray-400">
                            "Upload a CSV or Excel file to see insights and charts."
                        </p>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Rendered analysis result: insights, chart grid, basic statistics
#[component]
fn ReportView(report: AnalysisReport) -> impl IntoView {
    let columns = report.analysis.basic_info.columns.join(", ");
    let rows = report.analysis.basic_info.rows;

    view! {
        <div class="space-y-6">
            // Insights
            <section>
                <h2 class="text-lg font-semibold mb-2">"Insights"</h2>
                <div class="space-y-2">
                    {report.insights
                        .iter()
                        .cloned()
                        .map(|insight| view! {
                            <p class="bg-gray-800 rounded-lg px-4 py-2">{insight}</p>
                        })
                        .collect_view()}
                </div>
            </section>

            // Visualizations
            <section>
                <h2 class="text-lg font-semibold mb-4">"Visualizations"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {report.visualizations
                        .iter()
                        .cloned()
                        .map(|viz| view! { <ChartPanel viz /> })
                        .collect_view()}
                </div>
            </section>

            // Basic statistics
            <section>
                <h2 class="text-lg font-semibold mb-2">"Basic Statistics"</h2>
                <div class="grid grid-cols-2 gap-4">
                    <div class="bg-gray-800 rounded-lg p-4">
                        <p class="font-bold">"Total Rows"</p>
                        <p>{rows.to_string()}</p>
                    </div>
                    <div class="bg-gray-800 rounded-lg p-4">
                        <p class="font-bold">"Columns"</p>
                        <p>{columns}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
