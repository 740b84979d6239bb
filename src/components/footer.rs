use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <span class="nav-logo">{"cvmatch"}</span>
                <p>{"Honest, fast feedback on your CV against the jobs you actually want."}</p>
                <div class="footer-links">
                    <a href="#how-it-works">{"How it works"}</a>
                    <a href="#faq">{"FAQ"}</a>
                    <a href="mailto:hello@cvmatch.app">{"Contact"}</a>
                </div>
            </div>
        </footer>
    }
}
