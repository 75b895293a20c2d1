use leptos::prelude::*;

const CARD_CLASS: &str = "bg-white dark:bg-slate-800 rounded-xl p-6 shadow-sm border border-slate-200 dark:border-slate-700 hover:border-indigo-500 dark:hover:border-indigo-400 transition-colors duration-300";

/// Bordered panel used for project and note cards.
#[component]
pub fn Card(children: Children, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <article class=format!("{CARD_CLASS} {class}")>{children()}</article> }
}

#[component]
pub fn SectionHeading(children: Children, #[prop(optional)] subtitle: bool) -> impl IntoView {
    view! {
        <div class="mb-12">
            <h2 class="text-3xl md:text-4xl font-bold tracking-tight mb-3 text-slate-900 dark:text-white">
                {children()}
            </h2>
            {subtitle.then(|| view! { <div class="h-1 w-20 bg-indigo-500 rounded-full"></div> })}
        </div>
    }
}

/// Inline style for the staggered fade-in of list items.
pub fn stagger(index: usize) -> String {
    format!("animation-delay: {}ms", index * 100)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{count, render};

    #[test]
    fn test_card_wraps_children() {
        let html = render(|| view! { <Card class="h-full">"inner"</Card> });
        assert_eq!(count(&html, "<article"), 1);
        assert!(html.contains("inner"));
        assert!(html.contains("h-full"));
    }

    #[test]
    fn test_heading_underline_optional() {
        let with = render(|| view! { <SectionHeading subtitle=true>"Title"</SectionHeading> });
        let without = render(|| view! { <SectionHeading>"Title"</SectionHeading> });
        assert!(with.contains("bg-indigo-500 rounded-full"));
        assert!(!without.contains("bg-indigo-500 rounded-full"));
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), "animation-delay: 0ms");
        assert_eq!(stagger(3), "animation-delay: 300ms");
    }
}
