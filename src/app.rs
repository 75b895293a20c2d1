mod components;
mod contact;
mod header;
mod homepage;
mod leadership;
mod notes;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{person_json_ld, SITE_HANDLE};
use crate::state::UiState;
use header::Header;
use homepage::HomePage;

const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="build-time" content=BUILD_TIME />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio.css" />
                <script type="application/ld+json" inner_html=person_json_ld()></script>
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // fresh on every load, nothing is persisted
    let ui = RwSignal::new(UiState::default());

    view! {
        <Title formatter=|title| format!("{SITE_HANDLE} - {title}") />
        // theme marker on the document element
        <Html {..} class=move || ui.get().theme().class() />
        <Meta name="color-scheme" content=move || ui.get().theme().color_scheme() />

        <Router>
            <div class=move || {
                format!("min-h-screen transition-colors duration-300 {}", ui.get().theme().wrapper_class())
            }>
                <Header ui />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
