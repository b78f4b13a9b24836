use leptos::prelude::*;

use crate::types::{FeatureEntry, SITE};

/// The three marketing highlights shown on the homepage, in display order.
pub const FEATURE_LIST: [FeatureEntry; 3] = [
    FeatureEntry {
        title: "Use it easily",
        image: "img/easy-to-use.svg",
        description: "It helps to implement a Backend service in detail easily. Domainify is \
                      easy to learn and use too.",
    },
    FeatureEntry {
        title: "Focus on your business logic",
        image: "img/focus-on-the-business-logic.svg",
        description: "The main goal of Domainify is to reduce codes and simply cover most \
                      technical cases for developers to be prepared to focus on the business \
                      logic.",
    },
    FeatureEntry {
        title: "Don't worry about complexity and scalability",
        image: "img/do-not-worry-about-scalability.svg",
        description: "Domainify has been designed based on Clean Architecture and the DDD \
                      (Domain-Driven Design) approaches.",
    },
];

/// Feature list section: one card per entry, in slice order.
#[component]
pub fn HomepageFeatures(features: Vec<FeatureEntry>) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    {features
                        .into_iter()
                        .map(|entry| view! { <FeatureCard entry=entry /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One centered card: illustration, heading, description.
///
/// Entries are rendered as given; an entry with a bad image path shows up
/// as a broken image in the page, not as an error here.
#[component]
fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    let image_url = SITE.asset(entry.image);
    view! {
        <div class="col col--4">
            <div class="text--center">
                <img class="feature-image" src=image_url alt=entry.title />
            </div>
            <div class="text--center padding-horiz--md">
                <h3>{entry.title}</h3>
                <p>{entry.description}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(features: Vec<FeatureEntry>) -> String {
        view! { <HomepageFeatures features=features /> }.to_html()
    }

    #[test]
    fn feature_list_has_three_populated_entries() {
        assert_eq!(FEATURE_LIST.len(), 3);
        for entry in FEATURE_LIST {
            assert!(!entry.title.is_empty());
            assert!(!entry.image.is_empty());
            assert!(!entry.description.is_empty());
        }
    }

    #[test]
    fn renders_one_card_per_entry() {
        let html = render(FEATURE_LIST.to_vec());
        assert_eq!(html.matches(r#"class="col col--4""#).count(), 3);

        // Dropping an entry drops its card and nothing else.
        let html = render(FEATURE_LIST[..2].to_vec());
        assert_eq!(html.matches(r#"class="col col--4""#).count(), 2);
        assert!(!html.contains("complexity and scalability"));
    }

    #[test]
    fn card_heading_shows_entry_title() {
        let html = render(vec![FEATURE_LIST[0]]);
        assert!(html.contains("<h3>Use it easily</h3>"));
        assert!(html.contains(r#"src="/img/easy-to-use.svg""#));
        assert!(html.contains(r#"alt="Use it easily""#));
    }

    #[test]
    fn entry_without_image_still_renders() {
        let broken = FeatureEntry {
            title: "No illustration",
            image: "",
            description: "Still renders as a card.",
        };
        let html = render(vec![broken]);
        assert!(html.contains("<h3>No illustration</h3>"));
        assert_eq!(html.matches(r#"class="col col--4""#).count(), 1);
    }
}
