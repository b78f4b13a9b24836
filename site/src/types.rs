//! Content types for the homepage.
//!
//! Everything here is source-level data: the site ships no configuration
//! loader, so the values the page consumes are typed constants compiled into
//! the generator. `&'static str` fields keep the instances `const`-friendly
//! and copyable into component props.

/// One marketing highlight on the homepage.
///
/// Three literal instances exist (see
/// [`FEATURE_LIST`](crate::components::FEATURE_LIST)); the renderer treats
/// the slice position as the only identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureEntry {
    /// Card heading text.
    pub title: &'static str,
    /// Site-relative path of the card illustration under `static/`.
    pub image: &'static str,
    /// Card body text.
    pub description: &'static str,
}

/// Site-level constants the page consumes.
///
/// Stands in for the host framework's site configuration: the hero reads
/// `title` and `tagline`, the layout derives the page `<title>` from
/// `title`, and `base_url` anchors every site-relative link and asset path.
#[derive(Clone, Copy, Debug)]
pub struct SiteMeta {
    /// Site name, rendered as the hero title.
    pub title: &'static str,
    /// One-sentence pitch, rendered as the hero subtitle.
    pub tagline: &'static str,
    /// Canonical URL of the deployed site.
    pub url: &'static str,
    /// Path prefix the site is served under, normally `/`.
    pub base_url: &'static str,
}

impl SiteMeta {
    /// Resolve a site-relative route (e.g. `docs/overview`) against
    /// [`base_url`](Self::base_url).
    ///
    /// The documentation router serving those routes is outside this crate;
    /// only the emitted `href` is our contract.
    pub fn href(&self, route: &str) -> String {
        join(self.base_url, route)
    }

    /// Resolve a static asset path (e.g. `img/easy-to-use.svg`) against
    /// [`base_url`](Self::base_url).
    ///
    /// The generator copies the file itself; this produces the URL the
    /// markup refers to it by.
    pub fn asset(&self, path: &str) -> String {
        join(self.base_url, path)
    }

    /// Absolute URL of a page, for the canonical link in the document head.
    /// Pass `""` for the homepage.
    pub fn page_url(&self, route: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), self.href(route))
    }
}

/// The Domainify site.
pub const SITE: SiteMeta = SiteMeta {
    title: "Domainify",
    tagline: "Domainify is an open-source and lightweight library to develop a Backend \
              service based on DDD (Domain-Driven Design) by DotNet Core.",
    url: "https://domainify.github.io",
    base_url: "/",
};

// Joins with exactly one slash regardless of how the two sides are written.
fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
