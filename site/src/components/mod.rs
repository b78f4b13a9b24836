//! Leptos components for the homepage markup.
//!
//! Each component is a `#[component]` function producing static markup in a
//! single synchronous render pass; there is no reactivity, no event
//! handling, and no hydration.
//!
//! # Component Hierarchy
//!
//! ```text
//! HomePage (pages::home)
//! └── Layout (document shell: head, title, description, stylesheet)
//!     ├── HomepageHeader (hero banner + call-to-action links)
//!     └── HomepageFeatures
//!         └── FeatureCard (one per FeatureEntry, ×3)
//! ```

mod features;
mod hero;
mod layout;

pub use features::{FEATURE_LIST, HomepageFeatures};
pub use hero::HomepageHeader;
pub use layout::Layout;
