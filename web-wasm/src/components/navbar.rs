//! Top navigation bar

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <h1 class="brand">"SONO."</h1>
            <ul class="nav-links">
                <li><a href="#home">"Home"</a></li>
                <li><a href="#analyze">"Analyze"</a></li>
                <li><a href="#about">"About"</a></li>
            </ul>
        </nav>
    }
}
