use leptos::prelude::*;

use super::components::SectionHeading;
use crate::content::SkillGroup;

#[component]
pub fn SkillsSection(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section
            id="skills"
            class="py-20 px-6 bg-slate-50 dark:bg-slate-900/30 border-y border-slate-200 dark:border-slate-800"
        >
            <div class="max-w-6xl mx-auto">
                <SectionHeading subtitle=true>"Technical Arsenal"</SectionHeading>
                <div class="grid md:grid-cols-3 gap-8">
                    {groups.iter().map(|group| view! { <SkillColumn group /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillColumn(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="space-y-4">
            <div class="flex items-center gap-2 mb-2">
                <i class=format!("{} text-indigo-500 text-2xl", group.category.icon()) />
                <h3 class="text-xl font-bold text-slate-900 dark:text-white">
                    {group.category.label()}
                </h3>
            </div>
            <ul class="space-y-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <li class="flex items-center gap-2 text-slate-600 dark:text-slate-400 text-sm">
                                <span class="w-1.5 h-1.5 bg-indigo-500 rounded-full"></span>
                                {*skill}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
