use leptos::prelude::*;

use crate::content::{portfolio, Section};
use crate::theme::Theme;

use super::hooks::{scroll_to_section, use_scroll_tracker};

#[component]
pub fn Navbar(theme: ReadSignal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let tracker = use_scroll_tracker();
    let progress = tracker.progress();
    let (name, resume) = portfolio()
        .map(|p| (p.owner.name.clone(), p.owner.resume.clone()))
        .unwrap_or_default();

    let toggle_theme = move |_| {
        set_theme.update(|t| *t = t.toggled());
        log::debug!("theme set to {:?}", theme.get_untracked());
    };

    view! {
        <nav class="fixed w-full bg-gray-900/80 dark:bg-gray-800/80 backdrop-blur-md text-white p-4 z-50 border-b border-gray-700 dark:border-gray-600">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <h1 class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                    {name}
                </h1>
                <div class="hidden md:flex space-x-6 items-center">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a
                                    href=section.href()
                                    class="hover:text-blue-400 transition-colors relative group"
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        scroll_to_section(section);
                                    }
                                >
                                    {section.label()}
                                    <span class="absolute bottom-0 left-0 w-0 h-0.5 bg-blue-400 transition-all duration-300 group-hover:w-full"></span>
                                </a>
                            }
                        })
                        .collect_view()}
                    <button
                        class="p-2 rounded-full hover:bg-gray-700 transition-transform hover:scale-110"
                        aria-label=move || theme.get().toggle_label()
                        aria-pressed=move || theme.get().is_dark().to_string()
                        on:click=toggle_theme
                    >
                        {move || theme.get().toggle_icon()}
                    </button>
                </div>
                <a
                    href=resume.href
                    download=resume.download_name
                    class="hidden md:flex items-center gap-2 bg-blue-600 hover:bg-blue-700 px-4 py-2 rounded-lg transition-colors"
                >
                    <i class="extra-download" />
                    <span>"Resume"</span>
                </a>
            </div>
        </nav>
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-blue-500 to-purple-600 z-50 origin-left"
            style:transform=move || format!("scaleX({})", progress.get())
        ></div>
    }
}
