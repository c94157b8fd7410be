//! Landing hero section
//!
//! Headline plus a byline that cycles through the site authors on a fixed
//! interval.

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTHORS: [&str; 3] = ["Toshit", "Yash", "Pratyush"];
const ROTATE_MS: u32 = 2400;

#[component]
pub fn Hero() -> impl IntoView {
    let (author, set_author) = signal(0usize);

    // The shell is never unmounted, so the rotation task runs for the life
    // of the page.
    spawn_local(async move {
        loop {
            TimeoutFuture::new(ROTATE_MS).await;
            set_author.update(|i| *i = (*i + 1) % AUTHORS.len());
        }
    });

    view! {
        <section class="hero" id="home">
            <p class="hero-tag">"Website for Ai For Fun."</p>
            <h1>"Exploring Ai For Fun."</h1>
            <p class="hero-byline">
                "This website was created by "
                <span class="hero-author">{move || AUTHORS[author.get()]}</span>
            </p>
            <a class="hero-cta" href="#analyze">"Click Here to Login"</a>
        </section>
    }
}
