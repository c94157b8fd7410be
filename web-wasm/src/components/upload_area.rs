//! Image picker
//!
//! Click-to-pick or drag-and-drop upload area. Hands the raw browser file
//! to its owner; validation and state replacement happen there, so a
//! rejected drop never disturbs the current selection.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, HtmlInputElement};

#[component]
pub fn UploadArea<F>(selected_name: Signal<Option<String>>, on_pick: F) -> impl IntoView
where
    F: Fn(web_sys::File) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_change = {
        let on_pick = on_pick.clone();
        move |ev: Event| {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_pick(file);
            }
            // reset so picking the same file again refires change
            input.set_value("");
        }
    };

    let on_drop = {
        let on_pick = on_pick.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                on_pick(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <label
            class=move || {
                if is_dragover.get() {
                    "upload-area dragover"
                } else {
                    "upload-area"
                }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">"📷"</div>
            <input type="file" accept="image/*" class="hidden-input" on:change=on_change />
            <span class="upload-hint">
                "Click or drag and drop an image (JPG, PNG, GIF, Max 10MB)"
            </span>
            {move || {
                selected_name
                    .get()
                    .map(|name| view! { <span class="upload-filename">{name}</span> })
            }}
        </label>
    }
}
