//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::StorageConfig;
use crate::net::storage::{FirebaseStore, StoreHandle};
use crate::pages::{create_post::CreatePostPage, dashboard::DashboardPage, post::PostPage};

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
/// Provides the content store and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(StoreHandle::new(FirebaseStore::new(StorageConfig::from_build_env())));

    view! {
        <Stylesheet id="leptos" href="/pkg/blogdesk.css"/>
        <Title text="Blogdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("create-post") view=CreatePostPage/>
                <Route path=(StaticSegment("post"), ParamSegment("slug")) view=PostPage/>
            </Routes>
        </Router>
    }
}
