use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

const ANCHOR_PREFIX: &str = "faq-";

/// Element id of the item with `slug`, so `#faq-<slug>` links straight to it.
fn anchor_id(slug: &str) -> String {
    format!("{}{}", ANCHOR_PREFIX, slug)
}

/// Whether the location hash (with its leading `#`) points at the item with `slug`.
fn targets(slug: &str, hash: &str) -> bool {
    hash.strip_prefix('#')
        .and_then(|id| id.strip_prefix(ANCHOR_PREFIX))
        .map_or(false, |rest| rest == slug)
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    slug: &'static str,
    question: &'static str,
    children: Children,
}

/// One question. It starts open when the page is loaded on its anchor and
/// opens whenever the hash is changed to point at it.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let slug = props.slug;
    let is_open = use_state(|| targets(slug, &current_hash()));

    {
        let is_open = is_open.clone();
        use_event_with_window("hashchange", move |_: Event| {
            if targets(slug, &current_hash()) {
                is_open.set(true);
            }
        });
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    let anchor = anchor_id(slug);
    let answer_id = format!("{}-answer", anchor);

    html! {
        <div id={anchor.clone()} class={classes!("faq-item", (*is_open).then_some("open"))}>
            <h3 class="faq-heading">
                <button
                    class="faq-question"
                    onclick={toggle}
                    aria-expanded={is_open.to_string()}
                    aria-controls={answer_id.clone()}
                >
                    <span class="question-text">{props.question}</span>
                    <span class="toggle-icon" aria-hidden="true">{if *is_open { "−" } else { "+" }}</span>
                </button>
                <a class="faq-permalink" href={format!("#{}", anchor)} aria-label="Link to this question">{"#"}</a>
            </h3>
            <div id={answer_id} class="faq-answer" role="region" hidden={!*is_open}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently asked questions"}</h2>

            <FaqItem slug="privacy" question="What happens to my CV after I upload it?">
                <p>
                    {"Your CV and the details you enter are sent straight to our analysis workflow. We don't keep a copy in the browser, and the page itself stores nothing except your light/dark preference."}
                </p>
            </FaqItem>

            <FaqItem slug="pdf-only" question="Why only PDF?">
                <p>
                    {"PDF keeps your layout intact and is what most applicant tracking systems read best. If your CV is a Word document, export it as PDF first."}
                </p>
            </FaqItem>

            <FaqItem slug="timing" question="How long until I get feedback?">
                <p>
                    {"The analysis runs in the background once your upload is accepted. The report is emailed to the address you gave us, usually within a few minutes."}
                </p>
            </FaqItem>

            <FaqItem slug="job-description" question="Do I need a job description?">
                <p>
                    {"For the quick upload, no: you get general feedback on your CV. To see how well you match a specific role, use "}
                    <strong>{"Analyse my CV"}</strong>
                    {" and paste the posting."}
                </p>
            </FaqItem>

            <FaqItem slug="failed-upload" question="My upload failed. What now?">
                <p>
                    {"Nothing you typed is lost. Check your connection and press the button again; each attempt is sent as a fresh request."}
                </p>
            </FaqItem>
        </section>
    }
}
