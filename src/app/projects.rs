use leptos::prelude::*;

use super::components::{stagger, Card, SectionHeading};
use crate::content::Project;

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="py-24 px-6 max-w-6xl mx-auto">
            <SectionHeading subtitle=true>"Selected Projects"</SectionHeading>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <div class="reveal" style=stagger(index)>
                                <ProjectCard project />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let link_class = "text-slate-400 hover:text-slate-600 dark:hover:text-slate-200 transition-colors text-xl";
    view! {
        <Card class="h-full flex flex-col justify-between group">
            <div>
                <div class="flex justify-between items-start mb-4">
                    <h3 class="text-xl font-bold text-slate-900 dark:text-white group-hover:text-indigo-500 transition-colors">
                        {project.title}
                    </h3>
                    <div class="flex gap-3">
                        <a
                            href=project.links.repo
                            target="_blank"
                            rel="noopener noreferrer"
                            class=link_class
                            aria-label="GitHub Repo"
                        >
                            <i class="devicon-github-original" />
                        </a>
                        <a
                            href=project.links.demo
                            target="_blank"
                            rel="noopener noreferrer"
                            class=link_class
                            aria-label="Live Demo"
                        >
                            <i class="extra-external-link" />
                        </a>
                    </div>
                </div>
                <p class="text-slate-600 dark:text-slate-400 mb-6 text-sm leading-relaxed">
                    {project.description}
                </p>
                {project
                    .challenges
                    .map(|c| {
                        view! {
                            <div class="mb-6 p-3 bg-indigo-50 dark:bg-indigo-900/20 rounded-lg border border-indigo-100 dark:border-indigo-900/30">
                                <p class="text-xs text-indigo-800 dark:text-indigo-300 italic">{c}</p>
                            </div>
                        }
                    })}
            </div>
            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="text-xs font-mono px-2 py-1 bg-slate-100 dark:bg-slate-700/50 text-slate-600 dark:text-slate-300 rounded border border-slate-200 dark:border-slate-700">
                                {*tag}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </Card>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{count, render};
    use crate::content::{ProjectLinks, PROJECTS};

    #[test]
    fn test_one_card_per_project() {
        let html = render(|| view! { <ProjectsSection projects=PROJECTS /> });
        assert_eq!(count(&html, "<article"), PROJECTS.len());
        for project in PROJECTS {
            assert!(html.contains(project.links.repo));
            assert!(html.contains(project.links.demo));
        }
        assert_eq!(count(&html, "rel=\"noopener noreferrer\""), PROJECTS.len() * 2);
    }

    #[test]
    fn test_cards_reveal_on_scroll() {
        let html = render(|| view! { <ProjectsSection projects=PROJECTS /> });
        assert_eq!(count(&html, "class=\"reveal\""), PROJECTS.len());
        assert!(!html.contains("fade-in-up"));
    }

    #[test]
    fn test_challenges_optional() {
        static BARE: &[Project] = &[Project {
            title: "Bare",
            description: "No callout",
            challenges: None,
            tags: &["Rust"],
            links: ProjectLinks {
                demo: "https://example.com/demo",
                repo: "https://github.com/example/bare",
            },
        }];
        let html = render(|| view! { <ProjectsSection projects=BARE /> });
        assert_eq!(count(&html, "<article"), 1);
        assert!(!html.contains("italic"));
        assert!(html.contains("Rust"));
    }

    #[test]
    fn test_empty_gallery() {
        static EMPTY: &[Project] = &[];
        let html = render(|| view! { <ProjectsSection projects=EMPTY /> });
        assert_eq!(count(&html, "<article"), 0);
        assert!(html.contains("id=\"projects\""));
    }
}
