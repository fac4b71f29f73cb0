use leptos::prelude::*;

use crate::content::{portfolio, Section};

use super::hooks::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    let Ok(portfolio) = portfolio() else {
        return None;
    };
    let owner = &portfolio.owner;

    Some(view! {
        <section
            id=Section::Home.id()
            class="relative min-h-screen flex items-center justify-center pt-20 overflow-hidden bg-gradient-to-br from-blue-900/80 to-purple-900/80 dark:from-gray-800/80 dark:to-gray-900/80"
        >
            <div class="max-w-7xl mx-auto px-6 z-10 text-center animate-fade-in-up">
                <h1 class="text-4xl md:text-6xl font-bold mb-6 text-white">
                    "Hi, I'm " <span class="text-blue-300">{owner.name.clone()}</span>
                </h1>
                <p class="text-xl md:text-2xl mb-8 text-gray-200 max-w-3xl mx-auto">
                    {owner.pitch.clone()}
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <a
                        href=Section::Projects.href()
                        class="px-8 py-3 bg-white text-blue-600 rounded-full font-semibold hover:bg-gray-100 transition-colors shadow-lg flex items-center gap-2"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section(Section::Projects);
                        }
                    >
                        "View My Work"
                    </a>
                    <a
                        href=owner.resume.href.clone()
                        download=owner.resume.download_name.clone()
                        class="px-8 py-3 border-2 border-white text-white rounded-full font-semibold hover:bg-white/10 transition-colors flex items-center gap-2"
                    >
                        <i class="extra-download" />
                        "Download Resume"
                    </a>
                </div>
            </div>
            <div class="absolute bottom-10 left-1/2 transform -translate-x-1/2 animate-bounce">
                <a
                    href=Section::About.href()
                    class="text-white text-3xl"
                    aria-label="Scroll to about"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(Section::About);
                    }
                >
                    "⌄"
                </a>
            </div>
        </section>
    })
}
