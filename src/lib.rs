use std::rc::Rc;

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod form;
pub mod pages;
pub mod styles;
pub mod theme;

use components::nav::ThemeContext;
use components::toast::ToastHost;
use pages::{home::Home, not_found::NotFound};
use theme::{LocalStorageThemeStore, ThemeConfig, ThemeStore};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, Clone)]
pub struct AppProps {
    pub theme_store: Rc<dyn ThemeStore>,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.theme_store), Rc::as_ptr(&other.theme_store))
    }
}

impl Default for AppProps {
    fn default() -> Self {
        Self { theme_store: Rc::new(LocalStorageThemeStore) }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme = {
        let store = props.theme_store.clone();
        use_state(move || ThemeConfig::load(store, theme::system_preference()))
    };

    use_effect_with_deps(
        |current| {
            theme::apply_to_document(*current);
            || ()
        },
        theme.theme,
    );

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = theme.toggle();
            info!("Switching to {} theme", next.theme);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        config: (*theme).clone(),
        on_toggle,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <style>{styles::APP_CSS}</style>
            <ToastHost>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastHost>
        </ContextProvider<ThemeContext>>
    }
}
