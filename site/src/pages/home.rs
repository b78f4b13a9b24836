// Homepage - hero banner + feature list inside the document shell.
use leptos::prelude::*;

use crate::components::{FEATURE_LIST, HomepageFeatures, HomepageHeader, Layout};
use crate::types::SITE;

const PAGE_DESCRIPTION: &str =
    "Implement a scalable and testable Backend dotnet service based on Domain-driven \
     design, test-driven development, and clean architecture approaches quickly";

/// The complete homepage document.
#[component]
pub fn HomePage() -> impl IntoView {
    let title = format!("Implement a Backend dotnet service by {}", SITE.title);
    view! {
        <Layout title=title description=PAGE_DESCRIPTION.to_string()>
            <HomepageHeader />
            <main>
                <HomepageFeatures features=FEATURE_LIST.to_vec() />
            </main>
        </Layout>
    }
}
