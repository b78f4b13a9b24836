use leptos::prelude::*;

use crate::types::SITE;

/// Hero banner: site title, tagline, and the two call-to-action links.
///
/// The link targets live on the documentation router, outside this crate;
/// the hero only emits their `href`s.
#[component]
pub fn HomepageHeader() -> impl IntoView {
    view! {
        <header class="hero hero--primary hero-banner">
            <div class="container">
                <h1 class="hero__title">{SITE.title}</h1>
                <p class="hero__subtitle">{SITE.tagline}</p>
                <div class="hero-buttons">
                    <a class="button button--secondary button--lg" href=SITE.href("docs/overview")>
                        "Overview"
                    </a>
                </div>
                <br />
                <div class="hero-buttons">
                    <a
                        class="button button--secondary button--lg"
                        href=SITE.href("docs/tutorial/get-started")
                    >
                        "Domainify Tutorial - 60min ⏱️"
                    </a>
                </div>
            </div>
        </header>
    }
}
