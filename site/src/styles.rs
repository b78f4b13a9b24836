//! CSS for the rendered homepage.
//!
//! The original site took its look from the host framework's stylesheet and
//! a couple of CSS modules; here the whole sheet is one constant inlined
//! into the document head, so the generated page has no external style
//! dependency.
//!
//! Class names follow the original markup: framework-style utility classes
//! (`hero hero--primary`, `button button--lg`, `col col--4`, `text--center`)
//! plus the page-local `hero-banner`, `hero-buttons` and `feature-image`.

/// Complete stylesheet for the homepage.
pub const SITE_CSS: &str = r#"
:root {
    --color-primary: #2e8555;
    --color-primary-dark: #29784c;
    --color-text: #1c1e21;
    --color-text-inverse: #ffffff;
    --color-background: #ffffff;
    --font-base: system-ui, -apple-system, 'Segoe UI', Roboto, Ubuntu, sans-serif;
    --container-max: 1140px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-base);
    background: var(--color-background);
    color: var(--color-text);
    line-height: 1.65;
    margin: 0;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
    width: 100%;
}

.row {
    display: flex;
    flex-wrap: wrap;
    margin: 0 -16px;
}

.col {
    padding: 0 16px;
    width: 100%;
}

.col--4 {
    flex: 0 0 33.333%;
    max-width: 33.333%;
}

.text--center {
    text-align: center;
}

.padding-horiz--md {
    padding-left: 16px;
    padding-right: 16px;
}

/* Hero banner */

.hero {
    display: flex;
    align-items: center;
    padding: 64px 0;
}

.hero--primary {
    background: var(--color-primary);
    color: var(--color-text-inverse);
}

.hero-banner {
    padding: 64px 0;
    text-align: center;
    position: relative;
    overflow: hidden;
}

.hero__title {
    font-size: 48px;
    font-weight: 800;
    margin: 0 0 16px;
}

.hero__subtitle {
    font-size: 20px;
    font-weight: 400;
    margin: 0 auto 24px;
    max-width: 820px;
}

.hero-buttons {
    display: flex;
    align-items: center;
    justify-content: center;
}

/* Buttons */

.button {
    display: inline-block;
    border: 1px solid transparent;
    border-radius: 6px;
    cursor: pointer;
    font-weight: 700;
    text-align: center;
    text-decoration: none;
    transition: background 0.2s ease, color 0.2s ease;
}

.button--lg {
    font-size: 18px;
    padding: 12px 24px;
}

.button--secondary {
    background: var(--color-text-inverse);
    color: var(--color-text);
}

.button--secondary:hover {
    background: #e6e6e6;
    color: var(--color-text);
}

/* Feature cards */

.features {
    display: flex;
    align-items: center;
    padding: 32px 0;
    width: 100%;
}

.feature-image {
    height: 200px;
    width: 200px;
    object-fit: contain;
}

.features h3 {
    font-size: 22px;
    margin: 16px 0 8px;
}

.features p {
    margin: 0 0 24px;
}

/* Narrow screens: stack the cards */

@media screen and (max-width: 996px) {
    .col--4 {
        flex: 0 0 100%;
        max-width: 100%;
    }

    .hero-banner {
        padding: 32px 16px;
    }

    .hero__title {
        font-size: 36px;
    }
}
"#;
