//! Page shell
//!
//! Static marketing sections with the analysis panel mounted in between.
//! All interactive state lives inside the Dashboard; the shell itself is
//! stateless.

use leptos::prelude::*;

use crate::components::{
    dashboard::Dashboard, hero::Hero, navbar::Navbar, showcase::Showcase,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Navbar />
        <Hero />
        <Dashboard />
        <Showcase />
    }
}
