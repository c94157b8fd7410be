//! Result renderer
//!
//! Pure view over the analysis result and the local preview: classification
//! panel, caption, and the original/mask comparison. Renders nothing until
//! a result exists; every mapping decision comes from `common::display`.

use leptos::prelude::*;
use sono_ai_common::{display, AnalysisResult};

#[component]
pub fn ResultsPanel(
    result: Signal<Option<AnalysisResult>>,
    preview: Signal<Option<String>>,
) -> impl IntoView {
    move || {
        result.get().map(|result| {
            let tone = display::tone_class(&result.prediction);
            let label = result.prediction.label();
            let caption = display::caption(&result.prediction);
            let mask_url = display::mask_data_url(&result);
            let placeholder = display::mask_placeholder(&result.prediction);

            view! {
                <div class="results-card">
                    <h3>"Classification:"</h3>
                    <div class=format!("classification {}", tone)>{label}</div>
                    {caption.map(|text| view! { <p class=format!("caption {}", tone)>{text}</p> })}
                    <div class="comparison">
                        <div class="pane">
                            <p class="pane-title">"Original Image"</p>
                            {move || {
                                preview
                                    .get()
                                    .map(|url| view! { <img src=url alt="Preview" class="pane-image" /> })
                            }}
                        </div>
                        <div class="pane">
                            <p class="pane-title">"Segmentation Mask"</p>
                            {match mask_url {
                                Some(url) => view! {
                                    <img src=url alt="Segmentation Mask" class="pane-image" />
                                }
                                    .into_any(),
                                None => view! { <div class="pane-empty">{placeholder}</div> }.into_any(),
                            }}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
