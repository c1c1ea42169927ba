//! Badge and Stat - the two smallest building blocks

use leptos::prelude::*;

/// Rounded label chip.
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! { <span class="badge">{children()}</span> }
}

/// Headline value with a caption underneath.
#[component]
pub fn Stat(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn stat_shows_value_then_label() {
        let html = view! { <Stat value="5.0/5" label="Client rating" /> }.to_html();
        let value = html.find("5.0/5").unwrap();
        let label = html.find("Client rating").unwrap();
        assert!(value < label);
    }

    #[test]
    fn badge_wraps_children() {
        let html = view! { <Badge>"PBR"</Badge> }.to_html();
        assert!(html.contains(r#"<span class="badge">PBR</span>"#));
    }
}
