//! Section wrapper - consistent vertical rhythm for every content block

use leptos::prelude::*;

/// Page block with an anchor target, optional eyebrow and heading.
///
/// `id` doubles as the same-page navigation target (`#id`).
#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    /// Small label shown above the heading
    #[prop(optional)]
    eyebrow: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="section">
            <div class="container">
                {eyebrow.map(|text| view! { <p class="eyebrow">{text}</p> })}
                <h2 class="section-title">{title}</h2>
                {children()}
            </div>
        </section>
    }
}
