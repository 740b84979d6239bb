use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::{Theme, ThemeConfig};
use crate::Route;

/// Current theme plus the way to flip it, provided by `App`.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub config: ThemeConfig,
    pub on_toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_cta: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scrolled_window = window.clone();
                let callback = Closure::wrap(Box::new(move || {
                    let scroll_y = scrolled_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 40.0);
                }) as Box<dyn FnMut()>);
                (window, callback)
            });

            if let Some((window, callback)) = &listener {
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some((window, callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let on_cta = {
        let on_cta = props.on_cta.clone();
        let close_menu = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close_menu.emit(e);
            on_cta.emit(());
        })
    };

    let menu_class = if *menu_open { "nav-right mobile-menu-open" } else { "nav-right" };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"cvmatch"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="#how-it-works" class="nav-link" onclick={close_menu.clone()}>{"How it works"}</a>
                    <a href="#quick-upload" class="nav-link" onclick={close_menu.clone()}>{"Quick upload"}</a>
                    <a href="#faq" class="nav-link" onclick={close_menu}>{"FAQ"}</a>
                    <ThemeToggle />
                    <button class="nav-cta-button" onclick={on_cta}>
                        {"Analyse my CV"}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_context::<ThemeContext>();
    let Some(theme) = theme else {
        return html! {};
    };

    let (icon, label) = match theme.config.theme {
        Theme::Dark => ("☀", "Switch to light mode"),
        Theme::Light => ("☾", "Switch to dark mode"),
    };

    html! {
        <button
            class="theme-toggle"
            aria-label={label}
            title={label}
            onclick={theme.on_toggle.reform(|_: MouseEvent| ())}
        >
            {icon}
        </button>
    }
}
