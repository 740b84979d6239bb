use log::{info, warn};
use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::footer::Footer;
use crate::components::lead_form::LeadForm;
use crate::components::modal::JobMatchModal;
use crate::components::nav::Nav;
use crate::components::toast::Toaster;
use crate::form::FormVariant;

const STEPS: &[(&str, &str, &str)] = &[
    ("1", "Upload your CV", "Drop in the PDF you send to recruiters. No account needed."),
    ("2", "Add the job", "Paste the posting you're aiming for so we compare against what they actually ask."),
    ("3", "Get your report", "A match score, missing keywords and concrete rewrites arrive in your inbox."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let modal_open = use_state(|| false);
    let toaster = use_context::<Toaster>();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let Some(toaster) = toaster else {
        warn!("Home rendered outside of ToastHost");
        return html! {};
    };

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| {
            info!("Opening job match form");
            modal_open.set(true);
        })
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <div class="landing-page">
            <Nav on_cta={open_modal.clone()} />

            <section class="hero">
                <div class="hero-content">
                    <span class="hero-tag">{"AI CV review"}</span>
                    <h1>{"Find out if your CV gets past the first read"}</h1>
                    <p class="hero-subtitle">
                        {"Upload your CV, tell us the job you want, and get a clear report on where you match, where you don't, and what to change."}
                    </p>
                    <div class="hero-actions">
                        <button class="cta-button" onclick={open_modal.reform(|_: MouseEvent| ())}>
                            {"Get my CV analysed"}
                        </button>
                        <a href="#how-it-works" class="secondary-button">{"How it works"}</a>
                    </div>
                </div>
            </section>

            <section id="how-it-works" class="steps-section">
                <h2>{"How it works"}</h2>
                <div class="steps-grid">
                    { for STEPS.iter().map(|(number, title, text)| html! {
                        <div class="step-card">
                            <span class="step-number">{*number}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="quick-upload" class="quick-upload-section">
                <div class="quick-upload-copy">
                    <h2>{"Just want a second opinion?"}</h2>
                    <p>
                        {"Send your CV on its own and we'll email general feedback on structure, clarity and impact."}
                    </p>
                </div>
                <div class="quick-upload-card">
                    <LeadForm variant={FormVariant::Quick} toaster={toaster.clone()} />
                </div>
            </section>

            <Faq />
            <Footer />

            if *modal_open {
                <JobMatchModal toaster={toaster} on_close={close_modal} />
            }
        </div>
    }
}
