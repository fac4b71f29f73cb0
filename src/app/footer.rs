use leptos::{html, prelude::*};

use crate::content::{copyright_year, portfolio};

use super::hooks::{reveal_class, use_reveal_with_inset};

#[component]
pub fn Footer() -> impl IntoView {
    let footer_ref = NodeRef::<html::Div>::new();
    // the footer sits at the very bottom, so any visible pixel counts
    let revealed = use_reveal_with_inset(footer_ref, "footer", 0.0);
    let Ok(portfolio) = portfolio() else {
        return None;
    };
    let owner = &portfolio.owner;

    Some(view! {
        <footer class="bg-gray-900 text-gray-300 py-12">
            <div class="max-w-7xl mx-auto px-6">
                <div
                    node_ref=footer_ref
                    class=move || {
                        format!(
                            "flex flex-col md:flex-row justify-between items-center {}",
                            reveal_class(revealed.get()),
                        )
                    }
                >
                    <div class="mb-6 md:mb-0">
                        <h2 class="text-xl font-bold bg-gradient-to-r from-blue-400 to-purple-600 bg-clip-text text-transparent">
                            {owner.name.clone()}
                        </h2>
                        <p class="mt-2">{owner.tagline.clone()}</p>
                    </div>
                    <div class="flex space-x-6">
                        {portfolio
                            .footer
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href.clone()
                                        target=link.target()
                                        rel=link.rel()
                                        aria-label=link.label.clone()
                                        class="hover:text-white transition-colors text-2xl"
                                    >
                                        <i class=link.kind.icon_class() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center">
                    <p>
                        {format!("© {} {}. All rights reserved.", copyright_year(), owner.name)}
                    </p>
                </div>
            </div>
        </footer>
    })
}
