use leptos::prelude::*;

use crate::content::{SITE_HANDLE, SITE_OWNER, SOCIAL_LINKS};

const FIELD_CLASS: &str = "w-full px-4 py-2 rounded-lg bg-slate-50 dark:bg-slate-900 border border-slate-200 dark:border-slate-800 focus:outline-none focus:ring-2 focus:ring-indigo-500 dark:text-white transition-shadow";
const LABEL_CLASS: &str = "block text-sm font-medium text-slate-700 dark:text-slate-300 mb-1";

#[component]
pub fn ContactFooter() -> impl IntoView {
    view! {
        <footer
            id="contact"
            class="bg-white dark:bg-slate-950 border-t border-slate-200 dark:border-slate-800 pt-20 pb-10 px-6"
        >
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl font-bold text-slate-900 dark:text-white mb-6">
                    "Let's Build Something."
                </h2>
                <p class="text-slate-600 dark:text-slate-400 mb-8 max-w-xl mx-auto">
                    "Whether it's a student project collaboration or a freelance gig, I'm always open to discussing new ideas."
                </p>
                <SocialLinks />
                <ContactForm />
                <div class="text-sm text-slate-500 dark:text-slate-600 border-t border-slate-200 dark:border-slate-800 pt-8">
                    <p>
                        {format!("© {} {SITE_OWNER}. Built with Leptos & Tailwind.", env!("BUILD_YEAR"))}
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex flex-wrap justify-center gap-4 sm:gap-6 mb-12">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    let class = format!(
                        "p-3 bg-slate-100 dark:bg-slate-900 rounded-full text-slate-600 dark:text-slate-400 text-2xl hover:bg-slate-200 dark:hover:bg-slate-800 transition-all {}",
                        link.hover,
                    );
                    // mailto opens in place
                    let (target, rel) = if link.is_external() {
                        (Some("_blank"), Some("noopener noreferrer"))
                    } else {
                        (None, None)
                    };
                    view! {
                        <a href=link.href target=target rel=rel class=class aria-label=link.label>
                            <i class=link.icon />
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Rendered only. Messages are not sent anywhere.
#[component]
fn ContactForm() -> impl IntoView {
    view! {
        <form
            class="max-w-md mx-auto space-y-4 mb-20 text-left"
            on:submit=move |ev| {
                ev.prevent_default();
                log::info!("contact form has no submission endpoint, ignoring submit");
            }
        >
            <div>
                <label for="name" class=LABEL_CLASS>
                    "Name"
                </label>
                <input type="text" id="name" class=FIELD_CLASS placeholder="Your Name" />
            </div>
            <div>
                <label for="email" class=LABEL_CLASS>
                    "Email"
                </label>
                <input type="email" id="email" class=FIELD_CLASS placeholder="you@example.com" />
            </div>
            <div>
                <label for="message" class=LABEL_CLASS>
                    "Message"
                </label>
                <textarea
                    id="message"
                    rows="4"
                    class=FIELD_CLASS
                    placeholder=format!("Hi {SITE_HANDLE}...")
                ></textarea>
            </div>
            <button
                type="button"
                class="w-full py-3 bg-indigo-600 hover:bg-indigo-700 text-white font-bold rounded-lg transition-colors"
            >
                "Send Message"
            </button>
        </form>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{count, render};

    #[test]
    fn test_social_links_rendered() {
        let html = render(|| view! { <SocialLinks /> });
        assert_eq!(count(&html, "<a "), SOCIAL_LINKS.len());
        let external = SOCIAL_LINKS.iter().filter(|l| l.is_external()).count();
        assert_eq!(count(&html, "target=\"_blank\""), external);
        assert!(html.contains("href=\"mailto:pwreshy@gmail.com\""));
    }

    #[test]
    fn test_form_has_no_endpoint() {
        let html = render(|| view! { <ContactForm /> });
        assert!(!html.contains("action="));
        assert!(!html.contains("method="));
        assert!(html.contains("type=\"button\""));
        for id in ["name", "email", "message"] {
            assert!(html.contains(&format!("id=\"{id}\"")));
        }
    }

    #[test]
    fn test_footer_is_contact_anchor() {
        let html = render(|| view! { <ContactFooter /> });
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains(env!("BUILD_YEAR")));
    }
}
