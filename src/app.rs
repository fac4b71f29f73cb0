mod about;
mod contact;
mod footer;
mod hero;
mod hooks;
mod navbar;
mod projects;
mod scroll_top;
mod skills;

use std::time::Duration;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;

use crate::content::{portfolio, ContentError};
use crate::theme::{Theme, PREFERS_DARK_QUERY};

use about::About;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use hooks::provide_scroll_tracker;
use navbar::Navbar;
use projects::Projects;
use scroll_top::ScrollToTop;
use skills::Skills;

/// How long the loading spinner stays up on first mount.
pub const SPLASH_DURATION: Duration = Duration::from_millis(1500);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_scroll_tracker();

    // read once up front; later system changes don't override the toggle
    let (theme, set_theme) = signal(Theme::initial(prefers_dark()));

    let (loading, set_loading) = signal(true);
    set_timeout(
        move || {
            // no-op if the app was unmounted first
            let _ = set_loading.try_set(false);
        },
        SPLASH_DURATION,
    );

    view! {
        // sets the document title
        <Title formatter=|title| format!("Akshat Tiwari - {title}") text="Portfolio" />
        <div class=move || theme.get().root_class()>
            <Show when=move || !loading.get() fallback=|| view! { <Splash /> }>
                {match portfolio() {
                    Ok(_) => {
                        Either::Left(
                            view! {
                                <Navbar theme set_theme />
                                <main>
                                    <Hero />
                                    <About />
                                    <Projects />
                                    <Skills />
                                    <Contact />
                                </main>
                                <Footer />
                                <ScrollToTop />
                            },
                        )
                    }
                    Err(err) => Either::Right(view! { <ContentUnavailable err /> }),
                }}
            </Show>
        </div>
    }
}

fn prefers_dark() -> Option<bool> {
    match window().match_media(PREFERS_DARK_QUERY) {
        Ok(query) => query.map(|q| q.matches()),
        Err(err) => {
            log::warn!("couldn't query color scheme: {err:?}");
            None
        }
    }
}

#[component]
fn Splash() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
            <div class="w-12 h-12 border-4 border-blue-600 border-t-transparent rounded-full animate-spin"></div>
        </div>
    }
}

#[component]
fn ContentUnavailable(err: ContentError) -> impl IntoView {
    log::error!("{err}");
    view! {
        <div class="min-h-screen flex flex-col items-center justify-center gap-4 text-gray-800 dark:text-white">
            <h1 class="text-2xl font-bold">"Something went wrong"</h1>
            <p class="text-gray-600 dark:text-gray-300">{err.to_string()}</p>
        </div>
    }
}
