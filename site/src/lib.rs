//! # domainify-site
//!
//! Leptos SSR renderer for the Domainify marketing homepage.
//!
//! The site that used to be assembled by a JavaScript static-site framework
//! is produced here from typed Rust components: a hero banner, a fixed
//! three-entry feature list, and a document shell, rendered server-side to a
//! single HTML string. There is no reactive runtime and no hydration - one
//! synchronous render pass at build time, exactly like the original
//! framework's production build.
//!
//! ## Quick Start
//!
//! ```rust
//! use domainify_site::render_home;
//!
//! let html = render_home();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Domainify"));
//! ```
//!
//! To produce the deployable site (page plus static assets), use
//! [`generate::build_site`] or the `domainify-site` binary.
//!
//! ## Architecture
//!
//! - [`types`] - content types and the site-level constants
//! - [`components`] - Leptos components for the page markup
//! - [`pages`] - the assembled homepage
//! - [`styles`] - the inline stylesheet
//! - [`generate`] - writing the rendered site to disk
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <HomePage /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod generate;
pub mod pages;
pub mod styles;
pub mod types;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use pages::HomePage;

/// Render the complete homepage document as an HTML string.
///
/// This is the main entry point. The output is a full document including
/// `<!DOCTYPE html>`, ready to be written as `index.html`.
///
/// # Example
///
/// ```rust
/// let html = domainify_site::render_home();
/// assert!(html.contains("<title>"));
/// ```
pub fn render_home() -> String {
    let doc = view! { <HomePage /> };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
