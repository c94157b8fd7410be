//! Analysis panel
//!
//! Owns the upload-and-render workflow: file selection and validation,
//! token-guarded preview decoding, the single in-flight request, and the
//! rendered outcome. All state transitions go through `AnalysisSession`;
//! this component only wires browser events and spawned tasks to it.

use gloo::console;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::FileReader;

use sono_ai_common::{AnalysisSession, SelectedFile, SelectionToken, UploadError};

use crate::api::segment;
use crate::components::{results_panel::ResultsPanel, upload_area::UploadArea};

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = RwSignal::new(AnalysisSession::new());
    // Raw browser handle; not Send, so it lives outside the reactive graph.
    let picked_file = StoredValue::new_local(None::<web_sys::File>);

    let on_pick = move |file: web_sys::File| {
        let meta = SelectedFile {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
        };
        let Some(Ok(token)) = session.try_update(|s| s.select_file(meta)) else {
            return;
        };
        picked_file.set_value(Some(file.clone()));
        start_preview(file, token, session);
    };

    let on_analyze = move |_| {
        if !matches!(session.try_update(|s| s.begin_analysis()), Some(Ok(()))) {
            return;
        }
        let Some(file) = picked_file.get_value() else {
            session.update(|s| {
                s.finish_analysis(Err(UploadError::Transport(
                    "selected file handle is gone".to_string(),
                )))
            });
            return;
        };
        spawn_local(async move {
            let outcome = segment::upload(&file).await;
            if let Err(err) = &outcome {
                console::error!(format!("analysis request failed: {}", err));
            }
            session.update(|s| s.finish_analysis(outcome));
        });
    };

    let selected_name =
        Signal::derive(move || session.with(|s| s.selected().map(|f| f.name.clone())));
    let preview = Signal::derive(move || session.with(|s| s.preview().map(str::to_string)));
    let result = Signal::derive(move || session.with(|s| s.result().cloned()));
    let error = Signal::derive(move || session.with(|s| s.error().map(str::to_string)));
    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let can_analyze =
        Signal::derive(move || session.with(|s| s.selected().is_some() && !s.is_loading()));

    view! {
        <section class="dashboard" id="analyze">
            <h1>"Ultrasound Image Analysis"</h1>
            <p class="dashboard-intro">
                "Upload an ultrasound scan to receive automatic classification and region segmentation."
            </p>

            <UploadArea selected_name=selected_name on_pick=on_pick />

            {move || {
                preview
                    .get()
                    .map(|url| view! {
                        <div class="preview">
                            <span class="preview-title">"Image Preview"</span>
                            <img src=url alt="Preview" class="preview-image" />
                        </div>
                    })
            }}

            <button class="analyze-btn" disabled=move || !can_analyze.get() on:click=on_analyze>
                {move || if is_loading.get() { "Analyzing..." } else { "Analyze" }}
            </button>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="error-message">{message}</div> })
            }}

            <ResultsPanel result=result preview=preview />
        </section>
    }
}

/// Kicks off the asynchronous file-to-preview decode.
///
/// The completion carries the token of the selection it was started for;
/// `apply_preview` drops it if a newer selection has superseded it.
fn start_preview(file: web_sys::File, token: SelectionToken, session: RwSignal<AnalysisSession>) {
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                let landed = session
                    .try_update(|s| s.apply_preview(token, data_url))
                    .unwrap_or(false);
                if !landed {
                    console::debug!("discarded preview decode for a superseded selection");
                }
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
