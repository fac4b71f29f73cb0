use leptos::{html, prelude::*};

use crate::content::{portfolio, Section};

use super::hooks::{reveal_class, use_reveal};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(section_ref, Section::About.id());
    let Ok(about) = portfolio().map(|p| p.about.clone()) else {
        return None;
    };

    Some(view! {
        <section id=Section::About.id() class="py-20 bg-gray-50 dark:bg-gray-800">
            <div node_ref=section_ref class="max-w-7xl mx-auto px-6">
                <div class=move || format!("text-center mb-16 {}", reveal_class(revealed.get()))>
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-800 dark:text-white mb-4">
                        "About " <span class="text-blue-600">"Me"</span>
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 mx-auto"></div>
                </div>

                <div class="flex flex-col lg:flex-row gap-12 items-center">
                    <div class=move || format!("lg:w-1/2 {}", reveal_class(revealed.get()))>
                        <div class="bg-white dark:bg-gray-700 p-8 rounded-xl shadow-lg">
                            <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6">
                                "Who I Am"
                            </h3>
                            {about
                                .paragraphs
                                .into_iter()
                                .map(|p| {
                                    view! { <p class="text-gray-600 dark:text-gray-300 mb-4">{p}</p> }
                                })
                                .collect_view()}
                            <div class="flex flex-wrap gap-4 mt-2">
                                {about
                                    .highlights
                                    .into_iter()
                                    .map(|h| {
                                        view! {
                                            <div class=format!(
                                                "px-4 py-2 rounded-lg font-medium {}",
                                                h.tone.badge_class(),
                                            )>{h.label}</div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class=move || format!("lg:w-1/2 delay-200 {}", reveal_class(revealed.get()))>
                        <div class="bg-white dark:bg-gray-700 p-8 rounded-xl shadow-lg">
                            <h3 class="text-2xl font-semibold text-gray-800 dark:text-white mb-6">
                                "Education & Experience"
                            </h3>
                            <div class="space-y-8">
                                {about
                                    .timeline
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <div class="relative pl-8 border-l-2 border-blue-200 dark:border-blue-600">
                                                <div class="absolute -left-2 top-0 w-4 h-4 rounded-full bg-blue-600"></div>
                                                <div class="mb-2">
                                                    <p class="font-medium text-gray-800 dark:text-white">
                                                        {entry.title}
                                                    </p>
                                                    <p class="text-gray-600 dark:text-gray-300">
                                                        {entry.institution}
                                                    </p>
                                                    <p class="text-gray-500 dark:text-gray-400 text-sm">
                                                        {entry.period}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    })
}
