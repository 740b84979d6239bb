use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::toast::Toaster;
use crate::form::state::SubmissionPhase;
use crate::form::FormVariant;

#[derive(Properties, PartialEq)]
pub struct JobMatchModalProps {
    pub toaster: Toaster,
    pub on_close: Callback<()>,
}

/// Job-match form in a dialog. The form is unmounted on close, which is
/// what empties it. Closing is ignored while a request is in flight.
#[function_component(JobMatchModal)]
pub fn job_match_modal(props: &JobMatchModalProps) -> Html {
    let phase = use_state(|| SubmissionPhase::Idle);

    let request_close = {
        let phase = phase.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if phase.can_close() {
                on_close.emit(());
            }
        })
    };

    {
        let request_close = request_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                request_close.emit(());
            }
        });
    }

    let on_backdrop = {
        let request_close = request_close.clone();
        Callback::from(move |_: MouseEvent| request_close.emit(()))
    };
    let on_phase_change = {
        let phase = phase.clone();
        Callback::from(move |next: SubmissionPhase| phase.set(next))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="match-title"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <button
                    class="modal-close"
                    aria-label="Close"
                    disabled={!phase.can_close()}
                    onclick={request_close.reform(|_: MouseEvent| ())}
                >
                    {"✕"}
                </button>
                <h2 id="match-title">{"Match your CV to a job"}</h2>
                <p class="modal-subtitle">
                    {"Paste the job description and upload your CV. We'll tell you how well they fit and what to improve."}
                </p>
                <LeadForm
                    variant={FormVariant::JobMatch}
                    toaster={props.toaster.clone()}
                    on_close={props.on_close.clone()}
                    on_phase_change={on_phase_change}
                />
            </div>
        </div>
    }
}
