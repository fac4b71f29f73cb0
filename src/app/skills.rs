use leptos::{html, prelude::*};

use crate::content::{portfolio, Section, SkillCategory};

use super::hooks::{reveal_class, use_reveal};

#[component]
pub fn Skills() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(header_ref, Section::Skills.id());
    let skills = portfolio().map(|p| p.skills.clone()).unwrap_or_default();

    view! {
        <section id=Section::Skills.id() class="py-20 bg-white dark:bg-gray-900">
            <div class="max-w-7xl mx-auto px-6">
                <div
                    node_ref=header_ref
                    class=move || format!("text-center mb-16 {}", reveal_class(revealed.get()))
                >
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-800 dark:text-white mb-4">
                        "Technical " <span class="text-blue-600">"Skills"</span>
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 mx-auto"></div>
                    <p class="text-gray-600 dark:text-gray-300 mt-4 max-w-2xl mx-auto">
                        "I've worked with a variety of technologies in the web development world."
                    </p>
                </div>
                <div class=move || {
                    format!(
                        "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 {}",
                        reveal_class(revealed.get()),
                    )
                }>
                    {skills
                        .into_iter()
                        .map(|skill| view! { <SkillCard skill /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: SkillCategory) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-gray-700 p-6 rounded-xl shadow-md hover:shadow-lg transition-shadow">
            <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-4">{skill.category}</h3>
            <ul class="space-y-2">
                {skill
                    .items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center">
                                <span class="text-blue-500 mr-2">"✓"</span>
                                <span class="text-gray-600 dark:text-gray-300">{item}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
