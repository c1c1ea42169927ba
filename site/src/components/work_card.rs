//! Portfolio card

use leptos::prelude::*;

use super::{Badge, Icon, ICON_CUBE, ICON_TSHIRT};
use crate::types::PortfolioItem;

/// One portfolio entry.
///
/// The framed T-shirt icon stands in for a turntable render or an embedded
/// viewer.
#[component]
pub fn WorkCard(item: PortfolioItem) -> impl IntoView {
    view! {
        <div class="card work-card">
            <div class="work-visual">
                <div class="work-frame">
                    <div class="work-frame-glass"></div>
                    <Icon path=ICON_TSHIRT size="96" class="icon work-icon" />
                </div>
            </div>
            <div class="work-body">
                <div class="work-subtitle">
                    <Icon path=ICON_CUBE size="16" />
                    <span>{item.subtitle}</span>
                </div>
                <h4 class="work-title">{item.title}</h4>
                <div class="badge-row">
                    {item.tags.iter().map(|tag| view! { <Badge>{*tag}</Badge> }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_title_subtitle_and_tags_in_order() {
        let item = PORTFOLIO[0];
        let html = view! { <WorkCard item=item /> }.to_html();

        assert!(html.contains("Techwear Shell Jacket"));
        assert!(html.contains("pre-production"));
        assert_eq!(html.matches(r#"class="badge""#).count(), 3);

        let positions: Vec<usize> = item.tags.iter().map(|t| html.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
