use leptos::{html, prelude::*};

use crate::content::{portfolio, Project, Section};

use super::hooks::{reveal_class, use_reveal};

#[component]
pub fn Projects() -> impl IntoView {
    let header_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(header_ref, Section::Projects.id());
    let projects = portfolio().map(|p| p.projects.clone()).unwrap_or_default();

    view! {
        <section id=Section::Projects.id() class="py-20 bg-gray-100 dark:bg-gray-800">
            <div class="max-w-7xl mx-auto px-6">
                <div
                    node_ref=header_ref
                    class=move || format!("text-center mb-16 {}", reveal_class(revealed.get()))
                >
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-800 dark:text-white mb-4">
                        "My " <span class="text-blue-600">"Projects"</span>
                    </h2>
                    <div class="w-20 h-1 bg-blue-600 mx-auto"></div>
                    <p class="text-gray-600 dark:text-gray-300 mt-4 max-w-2xl mx-auto">
                        "Here are some of my recent projects. Each one was built to solve a specific problem or explore new technologies."
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Each card has its own reveal latch so cards further down the grid animate
/// in as they arrive.
#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let revealed = use_reveal(card_ref, "project card");
    let href = project.repository_href().to_string();
    let external = project.repository.is_some();

    view! {
        <div
            node_ref=card_ref
            class=move || {
                format!(
                    "bg-white dark:bg-gray-700 p-6 rounded-xl shadow-md hover:shadow-xl hover:-translate-y-1 border border-gray-100 dark:border-gray-600 overflow-hidden group {}",
                    reveal_class(revealed.get()),
                )
            }
        >
            <h3 class="text-xl font-semibold text-gray-800 dark:text-white mb-2 group-hover:text-blue-600 dark:group-hover:text-blue-400 transition-colors">
                {project.title}
            </h3>
            <p class="text-gray-600 dark:text-gray-300 mb-4">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {project
                    .tech
                    .into_iter()
                    .map(|item| {
                        view! {
                            <span class="text-xs bg-blue-50 dark:bg-blue-900 text-blue-600 dark:text-blue-300 px-2 py-1 rounded">
                                {item}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <a
                href=href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                class="inline-flex items-center text-blue-600 dark:text-blue-400 hover:text-blue-800 dark:hover:text-blue-300 transition-colors"
            >
                <i class="devicon-github-plain mr-2" />
                "View on GitHub"
            </a>
        </div>
    }
}
