//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::elements::ElementsPage;
use crate::state::{edit::EditState, elements::ElementsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Seeds the element table from the fixture and provides the table and
/// edit-dialog state to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let elements = RwSignal::new(ElementsState::default());
    let edit = RwSignal::new(EditState::default());

    provide_context(elements);
    provide_context(edit);

    view! {
        <Stylesheet id="leptos" href="/pkg/periodic-table.css"/>
        <Title text="Periodic Table"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ElementsPage/>
            </Routes>
        </Router>
    }
}
