//! Pricing card - one package of the services grid

use leptos::callback::Callable;
use leptos::prelude::*;

use super::{Icon, ICON_CHECK_CIRCLE, ICON_SPARKLE};
use crate::types::PricingTier;

/// One pricing tier with its feature list and call-to-action.
///
/// The button calls `on_select` with the tier name. There is no checkout or
/// quote service behind it; without a callback the button is rendered as a
/// placeholder (`data-cta="placeholder"`) and clicking it does nothing.
#[component]
pub fn PricingCard(
    tier: PricingTier,
    /// Receives the tier name when the call-to-action is clicked
    on_select: Option<Callback<&'static str>>,
) -> impl IntoView {
    let name = tier.tier;
    let cta_state = if on_select.is_some() { "wired" } else { "placeholder" };

    view! {
        <div class="card pricing-card" data-tier=name>
            <div class="pricing-tier">
                <Icon path=ICON_SPARKLE size="16" class="icon muted" />
                <p class="pricing-tier-name">{name}</p>
            </div>
            <h3 class="pricing-price">{tier.price}</h3>
            <ul class="pricing-features">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li class="pricing-feature">
                                <Icon path=ICON_CHECK_CIRCLE class="icon check" />
                                <span>{*feature}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                type="button"
                class="btn btn-primary btn-block"
                data-cta=cta_state
                on:click=move |_| {
                    if let Some(callback) = on_select.as_ref() {
                        callback.run(name);
                    }
                }
            >
                {tier.cta}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PRICING;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn lists_every_feature() {
        let tier = PRICING[1];
        let html = view! { <PricingCard tier=tier on_select=None /> }.to_html();

        assert!(html.contains("Standard"));
        assert!(html.contains("$449 / garment"));
        assert_eq!(html.matches(r#"class="pricing-feature""#).count(), 3);
        for feature in tier.features {
            assert!(html.contains(feature), "missing feature {feature}");
        }
        assert!(html.contains("Book Standard"));
    }

    #[test]
    fn cta_without_callback_is_placeholder() {
        let html = view! { <PricingCard tier=PRICING[0] on_select=None /> }.to_html();
        assert!(html.contains(r#"data-cta="placeholder""#));
    }

    #[test]
    fn cta_with_callback_is_wired() {
        let owner = Owner::new();
        let html = owner.with(|| {
            let on_select = Callback::new(|_tier: &'static str| {});
            view! { <PricingCard tier=PRICING[2] on_select=Some(on_select) /> }.to_html()
        });
        assert!(html.contains(r#"data-cta="wired""#));
        assert!(html.contains("Custom quote"));
    }
}
