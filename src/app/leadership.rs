use leptos::prelude::*;

use super::components::SectionHeading;
use crate::content::LeadershipEntry;

#[component]
pub fn LeadershipSection(entries: &'static [LeadershipEntry]) -> impl IntoView {
    view! {
        <section id="leadership" class="py-20 px-6 max-w-4xl mx-auto">
            <SectionHeading subtitle=true>
                <span class="flex items-center gap-2">
                    <i class="extra-users text-indigo-500 text-2xl" />
                    "Leadership & Community"
                </span>
            </SectionHeading>
            <ol class="space-y-6">
                {entries
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="flex flex-col sm:flex-row gap-4 sm:gap-6 p-4 rounded-lg hover:bg-slate-100 dark:hover:bg-slate-800/50 transition-colors border-l-4 border-indigo-500 pl-4 bg-white dark:bg-transparent">
                                <div class="sm:w-1/3">
                                    <h4 class="font-bold text-slate-900 dark:text-white">{item.role}</h4>
                                    <p class="text-xs text-indigo-600 dark:text-indigo-400 font-mono mt-1">
                                        {item.period}
                                    </p>
                                </div>
                                <div class="sm:w-2/3">
                                    <h5 class="text-sm font-semibold text-slate-700 dark:text-slate-300 mb-1">
                                        {item.org}
                                    </h5>
                                    <p class="text-sm text-slate-600 dark:text-slate-400 leading-relaxed">
                                        {item.description}
                                    </p>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{count, render};
    use crate::content::LEADERSHIP;

    #[test]
    fn test_one_row_per_entry() {
        let html = render(|| view! { <LeadershipSection entries=LEADERSHIP /> });
        assert_eq!(count(&html, "<li"), LEADERSHIP.len());
        for entry in LEADERSHIP {
            assert!(html.contains(entry.period));
        }
    }
}
