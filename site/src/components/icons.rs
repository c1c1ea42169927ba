//! Inline SVG icons.
//!
//! Filled paths on a 256x256 grid, so every icon scales with `size` and
//! takes its colour from the surrounding text.

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
///
/// # Props
///
/// * `path` - SVG path data (d attribute)
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "icon")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_SPARKLE size="16" class="icon muted" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Four-point sparkle (pricing tier label)
pub const ICON_SPARKLE: &str = "M128,24l22,82,82,22-82,22-22,82-22-82-82-22,82-22Z";

/// Circled check mark (feature lists)
pub const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// T-shirt silhouette (portfolio placeholder)
pub const ICON_TSHIRT: &str = "M96,32a32,32,0,0,0,64,0l64,32-24,48H184V224H72V112H56L32,64Z";

/// Hexagonal cube (interactive 3D)
pub const ICON_CUBE: &str = "M128,16l96,56V184l-96,56L32,184V72Zm0,18.5L48,81.2v93.6l80,46.7,80-46.7V81.2Z";

/// Scissors (prototyping savings)
pub const ICON_SCISSORS: &str = "M72,56a32,32,0,1,0,32,32A32,32,0,0,0,72,56Zm0,112a32,32,0,1,0,32,32A32,32,0,0,0,72,168Zm28-62L232,40v16L112,120Zm0,44,12-14L232,200v16Z";

/// Ruler (true-to-fabric details)
pub const ICON_RULER: &str = "M40,168,168,40l48,48L88,216Zm40-8,16,16,12-12-16-16Zm32-32,16,16,12-12-16-16Zm32-32,16,16,12-12-16-16Z";

/// Arrow pointing right (calls to action)
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

/// Envelope (email)
pub const ICON_ENVELOPE: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-96,85.15L52.57,64H203.43ZM98.71,128,40,181.81V74.19Zm11.84,10.85,12,11.05a8,8,0,0,0,10.82,0l12-11.05,58,53.15H52.57ZM157.29,128,216,74.18V181.82Z";

/// Telephone handset
pub const ICON_PHONE: &str = "M222.37,158.46l-47.11-21.11-.13-.06a16,16,0,0,0-15.17,1.4,8.12,8.12,0,0,0-.75.56L134.87,160c-15.42-7.49-31.34-23.29-38.83-38.51l20.78-24.71c.2-.25.39-.5.57-.77a16,16,0,0,0,1.32-15.06l0-.12L97.54,33.64a16,16,0,0,0-16.62-9.52A56.26,56.26,0,0,0,32,80c0,79.4,64.6,144,144,144a56.26,56.26,0,0,0,55.88-48.92A16,16,0,0,0,222.37,158.46ZM176,208A128.14,128.14,0,0,1,48,80,40.2,40.2,0,0,1,82.87,40a.61.61,0,0,0,0,.12l21,47L83.2,111.86a6.13,6.13,0,0,0-.57.77,16,16,0,0,0-1,15.7c9.06,18.53,27.73,37.06,46.46,46.11a16,16,0,0,0,15.75-1.14,8.44,8.44,0,0,0,.74-.56L168.89,152l47,21.05h0s.08,0,.11,0A40.21,40.21,0,0,1,176,208Z";
