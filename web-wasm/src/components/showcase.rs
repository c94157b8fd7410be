//! Static product showcase section

use leptos::prelude::*;

#[component]
pub fn Showcase() -> impl IntoView {
    view! {
        <section class="showcase" id="about">
            <div class="showcase-grid">
                <img
                    src="assets/laptop.png"
                    alt="Analysis dashboard on a laptop"
                    class="showcase-image"
                />
            </div>
        </section>
    }
}
