mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod hooks;
mod reveal;
mod skills;
mod work;

use footer::Footer;
use header::Header;
use homepage::HomePage;
use hooks::{provide_motion_preference, use_scroll_tracker, BodyScrollHost, PageScrollLock};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::nav::SectionId;

pub const SITE_OWNER: &str = "Alex Rivera";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_motion_preference();
    let scroll_lock = PageScrollLock::new(BodyScrollHost);
    provide_context(use_scroll_tracker(&SectionId::ALL, scroll_lock.clone()));
    provide_context(scroll_lock);

    view! {
        <Title formatter=|title| format!("{SITE_OWNER} - {title}") />
        <Meta name="description" content="Portfolio of a full-stack developer: about, skills, selected work and contact." />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
