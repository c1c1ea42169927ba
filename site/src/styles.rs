//! CSS for the portfolio page.
//!
//! One stylesheet shared by both delivery shapes: the static export inlines
//! it in `<head>`, the browser app injects it with a `<style>` element.
//!
//! # Customization
//!
//! ```rust
//! use atelier_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.len() > SITE_CSS.len());
//! ```
//!
//! The sheet is rendered as element text, so it avoids characters that get
//! HTML-escaped (ampersands, angle brackets, quotes).

/// Complete CSS - zinc dark theme.
///
/// - Sticky translucent header
/// - Two-column hero with the 3D viewer panel
/// - Card grids (2, 3 and 4 columns, single column on narrow screens)
/// - Form fields and the confirmation line
pub const SITE_CSS: &str = r#"
:root {
    --zinc-950: #09090b;
    --zinc-900: #18181b;
    --zinc-800: #27272a;
    --zinc-700: #3f3f46;
    --zinc-400: #a1a1aa;
    --zinc-300: #d4d4d8;
    --zinc-200: #e4e4e7;
    --green-400: #4ade80;
    --radius-lg: 16px;
    --radius-md: 12px;
    --container-max: 1152px;
    --font-sans: Inter, ui-sans-serif, system-ui, -apple-system, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    background: var(--zinc-950);
    color: var(--zinc-200);
    line-height: 1.5;
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.hidden {
    display: none !important;
}

/* Header */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(9, 9, 11, 0.6);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--zinc-900);
}

.header-inner {
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.header-brand {
    font-weight: 600;
    letter-spacing: -0.01em;
    color: #fff;
}

.header-nav {
    display: flex;
    align-items: center;
    gap: 24px;
    font-size: 14px;
    color: var(--zinc-300);
}

.nav-link:hover,
.footer-link:hover {
    color: #fff;
}

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-radius: var(--radius-md);
    padding: 12px 20px;
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    border: 1px solid transparent;
    transition: background 0.15s ease, border-color 0.15s ease;
}

.btn-primary {
    background: #fff;
    color: var(--zinc-900);
}

.btn-primary:hover {
    background: var(--zinc-200);
}

.btn-secondary {
    border-color: var(--zinc-800);
    color: var(--zinc-200);
    background: transparent;
}

.btn-secondary:hover {
    border-color: var(--zinc-700);
}

.btn-small {
    padding: 8px 12px;
}

.btn-block {
    width: 100%;
}

/* Hero */

.hero {
    position: relative;
    overflow: hidden;
    padding: 64px 0 80px;
}

.hero-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 40px;
    align-items: center;
}

.hero-title {
    margin: 0;
    font-size: 48px;
    line-height: 1.15;
    font-weight: 600;
    color: #fff;
    animation: rise 0.6s ease-out both;
}

.hero-title-accent {
    background: linear-gradient(90deg, #fff, var(--zinc-400));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

@keyframes rise {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}

.hero-description {
    margin-top: 16px;
    font-size: 18px;
    color: var(--zinc-300);
    max-width: 65ch;
}

.hero-badges {
    margin-top: 24px;
}

.hero-actions {
    margin-top: 32px;
    display: flex;
    gap: 12px;
}

.hero-stats {
    margin-top: 40px;
}

/* Viewer */

.viewer-panel {
    border: 1px solid var(--zinc-800);
    border-radius: 24px;
    background: rgba(24, 24, 27, 0.4);
    padding: 12px;
}

.viewer-frame {
    border: 1px solid var(--zinc-800);
    border-radius: var(--radius-lg);
    background: var(--zinc-950);
    overflow: hidden;
}

.viewer-stage {
    position: relative;
    height: 360px;
}

.viewer-canvas {
    display: block;
    width: 100%;
    height: 100%;
    cursor: grab;
    touch-action: none;
}

.viewer-canvas:active {
    cursor: grabbing;
}

.viewer-poster {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--zinc-700);
    background: radial-gradient(circle at 50% 40%, var(--zinc-900), var(--zinc-950));
    pointer-events: none;
}

.viewer-caption {
    display: flex;
    justify-content: space-between;
    padding: 12px;
    font-size: 12px;
    color: var(--zinc-400);
    border-top: 1px solid var(--zinc-800);
}

/* Sections */

.section {
    padding: 96px 0;
    scroll-margin-top: 80px;
}

.eyebrow {
    margin: 0 0 8px;
    font-size: 14px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--zinc-400);
}

.section-title {
    margin: 0 0 32px;
    font-size: 36px;
    font-weight: 600;
    color: var(--zinc-200);
}

.section-cta {
    margin-top: 40px;
    text-align: center;
}

.grid {
    display: grid;
    gap: 24px;
}

.grid-2 { grid-template-columns: repeat(2, 1fr); gap: 32px; }
.grid-3 { grid-template-columns: repeat(3, 1fr); }
.grid-4 { grid-template-columns: repeat(4, 1fr); }

/* Cards */

.card {
    border: 1px solid var(--zinc-800);
    border-radius: var(--radius-lg);
    background: rgba(24, 24, 27, 0.4);
    padding: 24px;
}

.card-title {
    margin: 0 0 8px;
    font-size: 20px;
    font-weight: 600;
    color: #fff;
}

.card-text {
    margin: 0;
    color: var(--zinc-300);
}

.badge-row {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
}

.badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    border: 1px solid var(--zinc-700);
    border-radius: 999px;
    background: rgba(24, 24, 27, 0.4);
    padding: 4px 12px;
    font-size: 14px;
    color: var(--zinc-200);
}

.stat-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
}

.stat {
    text-align: center;
}

.stat-value {
    font-size: 30px;
    font-weight: 600;
    color: #fff;
}

.stat-label {
    font-size: 14px;
    color: var(--zinc-400);
}

.icon.muted { color: var(--zinc-400); }
.icon.check { color: var(--green-400); flex-shrink: 0; }

/* Work */

.work-card {
    padding: 0;
    overflow: hidden;
}

.work-visual {
    aspect-ratio: 4 / 3;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(135deg, var(--zinc-800), var(--zinc-900));
}

.work-frame {
    position: relative;
    width: 160px;
    height: 160px;
    display: flex;
    align-items: center;
    justify-content: center;
}

.work-frame-glass {
    position: absolute;
    inset: 0;
    border-radius: var(--radius-md);
    background: rgba(63, 63, 70, 0.3);
    backdrop-filter: blur(4px);
}

.work-icon {
    position: relative;
    color: var(--zinc-300);
    transition: transform 0.3s ease;
}

.work-card:hover .work-icon {
    transform: rotate(6deg);
}

.work-body {
    padding: 20px;
}

.work-subtitle {
    display: flex;
    align-items: center;
    gap: 8px;
    font-size: 14px;
    color: var(--zinc-400);
    margin-bottom: 4px;
}

.work-title {
    margin: 0 0 12px;
    font-size: 18px;
    font-weight: 500;
    color: #fff;
}

/* Pricing */

.pricing-card {
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
    transition: box-shadow 0.2s ease;
}

.pricing-card:hover {
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
}

.pricing-tier {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 8px;
}

.pricing-tier-name {
    margin: 0;
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    color: var(--zinc-400);
}

.pricing-price {
    margin: 0 0 16px;
    font-size: 24px;
    font-weight: 600;
    color: #fff;
}

.pricing-features {
    list-style: none;
    margin: 0 0 24px;
    padding: 0;
    display: grid;
    gap: 12px;
}

.pricing-feature {
    display: flex;
    align-items: flex-start;
    gap: 12px;
    color: var(--zinc-300);
}

/* Process */

.process-list {
    list-style: none;
    margin: 0;
    padding: 0;
}

.process-step {
    padding: 20px;
}

.process-step-number {
    font-size: 14px;
    color: var(--zinc-400);
}

.process-step-title {
    font-size: 18px;
    font-weight: 500;
    color: #fff;
}

.process-step-desc {
    margin: 8px 0 0;
    font-size: 14px;
    color: var(--zinc-300);
}

/* About */

.about-grid {
    align-items: center;
}

.skill-list {
    list-style: none;
    margin: 16px 0 0;
    padding: 0;
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 12px;
    font-size: 14px;
    color: var(--zinc-300);
}

.skill {
    display: flex;
    align-items: center;
    gap: 8px;
}

.about-stats {
    margin-top: 24px;
}

/* Contact */

.contact-grid {
    align-items: start;
}

.contact-line {
    display: flex;
    align-items: center;
    gap: 12px;
    color: var(--zinc-300);
    margin-bottom: 8px;
}

.contact-line:hover {
    color: #fff;
}

.contact-note {
    margin: 24px 0 0;
    font-size: 14px;
    color: var(--zinc-400);
}

.contact-form {
    padding: 24px;
}

.form-fields {
    border: 0;
    margin: 0;
    padding: 0;
    min-width: 0;
}

.form-fields:disabled .field,
.form-fields:disabled .btn {
    opacity: 0.5;
    cursor: not-allowed;
}

.form-note {
    margin: 12px 0 0;
    font-size: 14px;
    color: var(--zinc-400);
}

.form-note a {
    text-decoration: underline;
}

.form-row {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

.field {
    width: 100%;
    border-radius: var(--radius-md);
    background: var(--zinc-900);
    border: 1px solid var(--zinc-800);
    padding: 12px 16px;
    font: inherit;
    color: var(--zinc-200);
}

.field:focus {
    outline: none;
    border-color: var(--zinc-700);
}

.field-wide {
    margin-top: 16px;
    display: block;
}

.field-tall {
    min-height: 140px;
    resize: vertical;
}

.form-submit {
    margin-top: 16px;
}

.form-confirmation {
    margin: 12px 0 0;
    font-size: 14px;
    color: var(--green-400);
}

/* Footer */

.site-footer {
    border-top: 1px solid var(--zinc-900);
}

.footer-inner {
    padding-top: 40px;
    padding-bottom: 40px;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
    font-size: 14px;
    color: var(--zinc-400);
}

.footer-copyright {
    margin: 0;
}

.footer-links {
    display: flex;
    gap: 16px;
}

/* Narrow screens */

@media (max-width: 768px) {
    .header-nav { display: none; }
    .hero-grid,
    .grid-2,
    .grid-3,
    .grid-4,
    .form-row { grid-template-columns: 1fr; }
    .hero-title { font-size: 36px; }
    .section-title { font-size: 30px; }
    .footer-inner { flex-direction: column; align-items: flex-start; }
}
"#;
