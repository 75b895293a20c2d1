use leptos::prelude::*;
use leptos_meta::Title;

use super::components::SectionHeading;
use super::contact::ContactFooter;
use super::leadership::LeadershipSection;
use super::notes::NotesSection;
use super::projects::ProjectsSection;
use super::skills::SkillsSection;
use crate::content::{BLOG_POSTS, LEADERSHIP, PROJECTS, SITE_OWNER, SKILLS};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Sections />
    }
}

/// Every section of the page, in anchor order.
#[component]
pub fn Sections() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <ProjectsSection projects=PROJECTS />
        <SkillsSection groups=SKILLS />
        <LeadershipSection entries=LEADERSHIP />
        <NotesSection posts=BLOG_POSTS />
        <ContactFooter />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 px-6 max-w-6xl mx-auto min-h-[90vh] flex items-center justify-center">
            <div class="w-full max-w-3xl text-center md:text-left md:flex md:items-center md:justify-between gap-12">
                <div class="flex-1 space-y-6">
                    <div class="fade-in-up">
                        <span class="inline-block px-3 py-1 mb-4 text-xs font-semibold tracking-wider text-indigo-600 dark:text-indigo-400 bg-indigo-50 dark:bg-indigo-900/30 rounded-full">
                            "SOFTWARE ENGINEERING STUDENT"
                        </span>
                        <h1 class="text-4xl md:text-6xl font-extrabold text-slate-900 dark:text-white leading-tight mb-4">
                            "Hi, I’m Ola. "
                            <br />
                            <span class="text-slate-500 dark:text-slate-400">
                                "I build real solutions."
                            </span>
                        </h1>
                        <p class="text-lg text-slate-600 dark:text-slate-400 leading-relaxed max-w-xl mx-auto md:mx-0">
                            "Second-year undergraduate at Babcock University. I bridge the gap between academic theory and practical, full-stack applications."
                        </p>
                    </div>
                    <div
                        class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start pt-4 fade-in-up"
                        style="animation-delay: 200ms"
                    >
                        <a
                            href="#projects"
                            class="px-8 py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-medium rounded-lg transition-colors flex items-center justify-center gap-2"
                        >
                            "View My Work ›"
                        </a>
                        <a
                            href="#contact"
                            class="px-8 py-3 border border-slate-300 dark:border-slate-700 text-slate-700 dark:text-slate-300 font-medium rounded-lg hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors flex items-center justify-center"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>
                <CodeCard />
            </div>
        </section>
    }
}

/// Decorative editor window beside the hero text.
#[component]
fn CodeCard() -> impl IntoView {
    let string = |s: &'static str| {
        view! { <span class="text-green-600 dark:text-green-400">{s}</span> }
    };
    view! {
        <div class="hidden md:block w-72 h-72 relative fade-in" style="animation-delay: 300ms">
            <div class="absolute inset-0 bg-gradient-to-tr from-indigo-500 to-purple-500 rounded-2xl opacity-10 blur-2xl transform rotate-6"></div>
            <div class="relative bg-white dark:bg-slate-900 border border-slate-200 dark:border-slate-700 rounded-2xl p-6 shadow-xl transform -rotate-3 hover:rotate-0 transition-transform duration-500">
                <div class="flex gap-2 mb-4">
                    <div class="w-3 h-3 rounded-full bg-red-500"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                    <div class="w-3 h-3 rounded-full bg-green-500"></div>
                </div>
                <div class="space-y-2 font-mono text-xs">
                    <div class="text-indigo-500">"const developer = {"</div>
                    <div class="pl-4 text-slate-600 dark:text-slate-400">
                        "name: " {string("'Ola'")} ","
                    </div>
                    <div class="pl-4 text-slate-600 dark:text-slate-400">
                        "role: " {string("'Student'")} ","
                    </div>
                    <div class="pl-4 text-slate-600 dark:text-slate-400">"level: 200,"</div>
                    <div class="pl-4 text-slate-600 dark:text-slate-400">
                        "passion: [" {string("'Web'")} ", " {string("'Logic'")} "]"
                    </div>
                    <div class="text-indigo-500">"}"</div>
                    <div class="pt-2 text-slate-400 dark:text-slate-600">"// Ready to build"</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-6 bg-slate-100 dark:bg-slate-900/50">
            <div class="max-w-4xl mx-auto">
                <SectionHeading subtitle=true>"About Me"</SectionHeading>
                <div class="prose dark:prose-invert max-w-none text-lg text-slate-600 dark:text-slate-400 leading-relaxed">
                    <p class="mb-6">
                        "I'm "
                        <span class="font-semibold text-slate-900 dark:text-white">{SITE_OWNER}</span>
                        ", a 200-level Software Engineering student at Babcock University. I don't just write code; I build tools that actually work."
                    </p>
                    <p>
                        "My coding journey bridges the gap between the rigorous, low-level logic of "
                        <span class="font-mono text-sm text-indigo-500 bg-indigo-50 dark:bg-indigo-900/20 px-1 rounded">
                            "C/C++"
                        </span>
                        " taught in class and the practical, user-facing utility of modern web development. While my peers are focused on theory, I am applying it: building booking systems, productivity apps, and collaborative platforms that solve real campus problems."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{count, render};
    use crate::content::NAV_LINKS;

    #[test]
    fn test_every_nav_link_has_a_section() {
        let html = render(|| view! { <Sections /> });
        for link in NAV_LINKS {
            let id = &link.href[1..];
            assert_eq!(
                count(&html, &format!("id=\"{id}\"")),
                1,
                "missing or duplicate section for {}",
                link.href
            );
        }
    }

    #[test]
    fn test_one_card_per_entry() {
        let html = render(|| view! { <Sections /> });
        assert_eq!(count(&html, "<article"), PROJECTS.len() + BLOG_POSTS.len());
    }

    #[test]
    fn test_hero_links_target_sections() {
        let html = render(|| view! { <Hero /> });
        assert!(html.contains("href=\"#projects\""));
        assert!(html.contains("href=\"#contact\""));
    }
}
