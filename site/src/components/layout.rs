//! Document shell - the html/head/body frame every page renders into.

use leptos::prelude::*;

use crate::styles::SITE_CSS;
use crate::types::SITE;

/// The complete HTML document around a page's content.
///
/// Carries the page `<title>`, the meta description used by search engines
/// and link previews, the canonical URL, and the inline stylesheet.
/// Navigation chrome is deliberately absent; the homepage supplies its own
/// links.
#[component]
pub fn Layout(
    /// Text for the document `<title>`.
    title: String,
    /// Content of the `<meta name="description">` tag.
    description: String,
    /// Site-relative route of the page, used for the canonical URL.
    #[prop(default = String::new())]
    route: String,
    children: Children,
) -> impl IntoView {
    let canonical = SITE.page_url(&route);
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=description />
                <title>{title}</title>
                <link rel="canonical" href=canonical />
                <style>{SITE_CSS}</style>
            </head>
            <body>{children()}</body>
        </html>
    }
}
