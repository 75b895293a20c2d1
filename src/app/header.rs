use leptos::prelude::*;

use crate::content::{NavLink, NAV_LINKS, SITE_HANDLE};
use crate::state::UiState;

#[component]
pub fn Header(ui: RwSignal<UiState>) -> impl IntoView {
    let theme_button = move |class: &'static str| {
        view! {
            <button
                on:click=move |_| ui.update(UiState::toggle_theme)
                class=class
                aria-label="Toggle theme"
            >
                {move || ui.get().theme().toggle_glyph()}
            </button>
        }
    };

    view! {
        <nav class="fixed top-0 w-full z-50 bg-white/80 dark:bg-slate-950/80 backdrop-blur-md border-b border-slate-200 dark:border-slate-800">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <a
                    href="#"
                    class="text-xl font-bold text-slate-900 dark:text-white font-mono hover:text-indigo-500 transition-colors"
                >
                    {format!("<{SITE_HANDLE} />")}
                </a>

                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <NavItem
                                    link
                                    ui
                                    class="text-sm font-medium text-slate-600 dark:text-slate-400 hover:text-indigo-600 dark:hover:text-indigo-400 transition-colors"
                                />
                            }
                        })
                        .collect_view()}
                    {theme_button(
                        "p-2 rounded-full bg-slate-100 dark:bg-slate-900 text-slate-600 dark:text-slate-400 hover:bg-slate-200 dark:hover:bg-slate-800 transition-all",
                    )}
                </div>

                <div class="flex items-center gap-4 md:hidden">
                    {theme_button("p-2 text-slate-600 dark:text-slate-400")}
                    <button
                        on:click=move |_| ui.update(UiState::toggle_menu)
                        class="p-2 text-xl text-slate-900 dark:text-white"
                        aria-label="Toggle menu"
                        aria-controls="mobile-menu"
                        aria-expanded=move || ui.get().menu_open.to_string()
                    >
                        {move || ui.get().menu_glyph()}
                    </button>
                </div>
            </div>

            {move || {
                ui.get()
                    .menu_open
                    .then(|| {
                        view! {
                            <div
                                id="mobile-menu"
                                class="md:hidden border-b border-slate-200 dark:border-slate-800 bg-white dark:bg-slate-950 overflow-hidden slide-down"
                            >
                                <div class="px-6 py-4 flex flex-col gap-4">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <NavItem
                                                    link
                                                    ui
                                                    class="text-base font-medium text-slate-600 dark:text-slate-300 hover:text-indigo-500"
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </nav>
    }
}

/// Activating any navigation link, desktop or mobile, closes the mobile menu.
fn activate_link(ui: RwSignal<UiState>) {
    ui.update(UiState::close_menu);
}

#[component]
fn NavItem(link: &'static NavLink, ui: RwSignal<UiState>, class: &'static str) -> impl IntoView {
    view! {
        <a href=link.href on:click=move |_| activate_link(ui) class=class>
            {link.name}
        </a>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::test_support::{count, render, to_html};

    #[test]
    fn test_menu_closed_by_default() {
        let html = render(|| {
            let ui = RwSignal::new(UiState::default());
            view! { <Header ui /> }
        });
        assert!(!html.contains("id=\"mobile-menu\""));
        // desktop nav only
        for link in NAV_LINKS {
            assert_eq!(count(&html, &format!("href=\"{}\"", link.href)), 1);
        }
        assert!(html.contains("☀"));
        assert!(html.contains("☰"));
    }

    #[test]
    fn test_open_menu_renders_mobile_links() {
        let html = render(|| {
            let ui = RwSignal::new(UiState {
                dark_mode: false,
                menu_open: true,
            });
            view! { <Header ui /> }
        });
        assert!(html.contains("id=\"mobile-menu\""));
        for link in NAV_LINKS {
            assert_eq!(count(&html, &format!("href=\"{}\"", link.href)), 2);
        }
        assert!(html.contains("☾"));
        assert!(html.contains("✕"));
    }

    #[test]
    fn test_menu_closes_after_navigation() {
        Owner::new().with(|| {
            let ui = RwSignal::new(UiState::default());
            ui.update(UiState::toggle_menu);

            let html = to_html(view! { <Header ui /> });
            assert!(html.contains("id=\"mobile-menu\""));
            assert_eq!(count(&html, "href=\"#projects\""), 2);

            // what a click on any nav link runs
            activate_link(ui);

            let html = to_html(view! { <Header ui /> });
            assert!(!html.contains("id=\"mobile-menu\""));
            assert_eq!(count(&html, "href=\"#projects\""), 1);
            assert!(ui.get_untracked().dark_mode);
        });
    }

    #[test]
    fn test_activating_link_with_menu_closed_is_noop() {
        Owner::new().with(|| {
            let ui = RwSignal::new(UiState::default());
            activate_link(ui);
            assert_eq!(ui.get_untracked(), UiState::default());
        });
    }
}
