//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{classic::ClassicChatPage, streaming::StreamingChatPage};

/// Root application component.
///
/// Provides the endpoint configuration and routes between the two chat
/// variants.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ClientConfig::from_build_env());

    view! {
        <Title text="Agent Chat"/>

        <Router>
            <nav class="variant-nav">
                <A href="/">"Streaming"</A>
                <A href="/classic">"Classic"</A>
            </nav>
            <main class="app">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=StreamingChatPage/>
                    <Route path=StaticSegment("classic") view=ClassicChatPage/>
                </Routes>
            </main>
        </Router>
    }
}
