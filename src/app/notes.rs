use leptos::prelude::*;

use super::components::{Card, SectionHeading};
use crate::content::{BlogPost, SITE_HANDLE};

/// Teaser cards for upcoming posts. They don't link anywhere yet.
#[component]
pub fn NotesSection(posts: &'static [BlogPost]) -> impl IntoView {
    view! {
        <section id="blog" class="py-20 px-6 bg-slate-100 dark:bg-slate-900/30">
            <div class="max-w-6xl mx-auto">
                <SectionHeading subtitle=true>
                    <span class="flex items-center gap-2">
                        <i class="extra-book-open text-indigo-500 text-2xl" />
                        {format!("{SITE_HANDLE}'s Notes")}
                    </span>
                </SectionHeading>
                <div class="grid md:grid-cols-2 gap-6">
                    {posts
                        .iter()
                        .map(|post| {
                            view! {
                                <div class="block group cursor-default">
                                    <Card class="h-full">
                                        <div class="flex items-center justify-between mb-4">
                                            <span class="text-xs font-semibold text-indigo-500 uppercase tracking-wider">
                                                {post.tag}
                                            </span>
                                            <span class="text-xs text-slate-400">{post.date}</span>
                                        </div>
                                        <h3 class="text-lg font-bold text-slate-900 dark:text-white mb-2">
                                            {post.title}
                                        </h3>
                                        <p class="text-slate-600 dark:text-slate-400 text-sm">
                                            {post.excerpt}
                                        </p>
                                    </Card>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{count, render};
    use crate::content::BLOG_POSTS;

    #[test]
    fn test_one_card_per_post() {
        let html = render(|| view! { <NotesSection posts=BLOG_POSTS /> });
        assert_eq!(count(&html, "<article"), BLOG_POSTS.len());
        for post in BLOG_POSTS {
            assert!(html.contains(post.date));
            assert!(html.contains(post.tag));
        }
    }
}
