use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::Toaster;
use crate::config;
use crate::form::file::{read_file, CvFile};
use crate::form::state::{FilePick, FormState, PickOutcome, Settled, SubmissionPhase, TransitionError};
use crate::form::submit::{run_submission, SubmitError, WebhookTransport};
use crate::form::{Field, FormVariant};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub variant: FormVariant,
    pub toaster: Toaster,
    /// Fired when the form is done with: after a quick upload succeeds, or
    /// when the user dismisses the complete screen or cancels.
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub on_phase_change: Callback<SubmissionPhase>,
}

pub enum LeadFormMsg {
    SetName(String),
    SetEmail(String),
    SetJobDescription(String),
    FilePicked(Option<web_sys::File>),
    FileLoaded(FilePick, CvFile),
    FileUnreadable(FilePick, String),
    Submit,
    Submitted(Result<(), SubmitError>),
    Dismiss,
    Cancel,
}

pub struct LeadForm {
    state: FormState,
    file_input: NodeRef,
}

impl Component for LeadForm {
    type Message = LeadFormMsg;
    type Properties = LeadFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            state: FormState::new(ctx.props().variant),
            file_input: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let phase_before = self.state.phase();
        let rerender = self.handle(ctx, msg);
        if self.state.phase() != phase_before {
            ctx.props().on_phase_change.emit(self.state.phase());
        }
        rerender
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.state.phase() == SubmissionPhase::Complete {
            return self.view_complete(ctx);
        }

        let variant = self.state.variant();
        let link = ctx.link();
        let fields = self.state.fields();
        let submitting = self.state.phase().is_submitting();
        let id = |name: &str| format!("{}-{}", variant.dom_prefix(), name);

        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadFormMsg::Submit
        });

        html! {
            <form class={classes!("lead-form", variant.dom_prefix())} onsubmit={onsubmit} novalidate=true>
                <div class="form-row">
                    <label for={id("name")}>{"Full name"}</label>
                    <input
                        id={id("name")}
                        type="text"
                        placeholder="Jane Doe"
                        value={fields.name.clone()}
                        disabled={submitting}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::SetName(input.value())
                        })}
                    />
                    { self.view_error(Field::Name) }
                </div>
                <div class="form-row">
                    <label for={id("email")}>{"Email"}</label>
                    <input
                        id={id("email")}
                        type="email"
                        placeholder="jane@example.com"
                        value={fields.email.clone()}
                        disabled={submitting}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::SetEmail(input.value())
                        })}
                    />
                    { self.view_error(Field::Email) }
                </div>
                if variant.requires_job_description() {
                    <div class="form-row">
                        <label for={id("job")}>{"Job description"}</label>
                        <textarea
                            id={id("job")}
                            rows="6"
                            placeholder="Paste the job posting you are applying for"
                            value={fields.job_description.clone()}
                            disabled={submitting}
                            oninput={link.callback(|e: InputEvent| {
                                let input: HtmlTextAreaElement = e.target_unchecked_into();
                                LeadFormMsg::SetJobDescription(input.value())
                            })}
                        />
                        { self.view_error(Field::JobDescription) }
                    </div>
                }
                <div class="form-row">
                    <label for={id("cv")}>{"Your CV (PDF)"}</label>
                    <input
                        id={id("cv")}
                        ref={self.file_input.clone()}
                        type="file"
                        accept={config::PDF_MIME_TYPE}
                        disabled={submitting}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            LeadFormMsg::FilePicked(input.files().and_then(|files| files.get(0)))
                        })}
                    />
                    if let Some(file) = &fields.file {
                        <span class="file-chip">{&file.name}</span>
                    }
                    { self.view_error(Field::File) }
                </div>
                <div class="form-actions">
                    <button type="submit" class="cta-button" disabled={submitting}>
                        if submitting {
                            <span class="loading-spinner"></span>
                            { self.submitting_label() }
                        } else {
                            { self.submit_label() }
                        }
                    </button>
                    if variant == FormVariant::JobMatch {
                        <button
                            type="button"
                            class="secondary-button"
                            disabled={submitting}
                            onclick={link.callback(|_| LeadFormMsg::Cancel)}
                        >
                            {"Cancel"}
                        </button>
                    }
                </div>
            </form>
        }
    }
}

impl LeadForm {
    fn handle(&mut self, ctx: &Context<Self>, msg: LeadFormMsg) -> bool {
        match msg {
            LeadFormMsg::SetName(value) => {
                self.state.set_name(value);
                true
            }
            LeadFormMsg::SetEmail(value) => {
                self.state.set_email(value);
                true
            }
            LeadFormMsg::SetJobDescription(value) => {
                self.state.set_job_description(value);
                true
            }
            LeadFormMsg::FilePicked(None) => {
                self.state.clear_file();
                true
            }
            LeadFormMsg::FilePicked(Some(file)) => match self.state.pick_file(&file.type_()) {
                Some(pick) => {
                    ctx.link().send_future(async move {
                        match read_file(&file).await {
                            Ok(cv) => LeadFormMsg::FileLoaded(pick, cv),
                            Err(e) => LeadFormMsg::FileUnreadable(pick, format!("{:?}", e)),
                        }
                    });
                    true
                }
                None if self.state.phase() == SubmissionPhase::Idle => {
                    gloo_console::log!("Rejected file", file.name(), file.type_());
                    true
                }
                None => false,
            },
            LeadFormMsg::FileLoaded(pick, cv) => {
                let name = cv.name.clone();
                match self.state.file_loaded(pick, cv) {
                    PickOutcome::Stored => {
                        info!("Loaded CV {}", name);
                        true
                    }
                    PickOutcome::Rejected => {
                        warn!("{} was read as something other than a PDF", name);
                        true
                    }
                    PickOutcome::Stale => {
                        info!("Dropping outdated read of {}", name);
                        false
                    }
                }
            }
            LeadFormMsg::FileUnreadable(pick, e) => {
                warn!("Could not read selected file: {}", e);
                if !self.state.is_current_pick(pick) {
                    return false;
                }
                self.clear_file_input();
                ctx.props().toaster.error(
                    "Couldn't read that file",
                    "Please pick your CV again.",
                );
                false
            }
            LeadFormMsg::Submit => match self.state.begin_submit() {
                Ok(payload) => {
                    let variant = self.state.variant();
                    ctx.link().send_future(async move {
                        let url = config::get_webhook_url();
                        let result =
                            run_submission(&WebhookTransport, url, variant, &payload, TimeoutFuture::new).await;
                        LeadFormMsg::Submitted(result)
                    });
                    true
                }
                Err(TransitionError::Invalid(count)) => {
                    info!("Submission blocked by {} invalid field(s)", count);
                    true
                }
                Err(e) => {
                    warn!("Ignoring submit: {}", e);
                    false
                }
            },
            LeadFormMsg::Submitted(result) => {
                let toaster = &ctx.props().toaster;
                match self.state.settle(&result) {
                    Ok(Settled::Closed) => {
                        toaster.success(
                            "CV received",
                            "Thanks! We'll email you once your CV has been reviewed.",
                        );
                        self.clear_file_input();
                        ctx.props().on_close.emit(());
                    }
                    Ok(Settled::Completed) => {
                        toaster.celebrate(
                            "You're all set!",
                            "Your CV is queued for analysis. Detailed feedback will land in your inbox.",
                        );
                    }
                    Ok(Settled::Failed) => {
                        if let Err(e) = &result {
                            warn!("Submission failed: {}", e);
                        }
                        toaster.error(
                            "Submission failed",
                            "Something went wrong sending your CV. Please try again.",
                        );
                    }
                    Err(e) => {
                        warn!("Dropping submission result: {}", e);
                        return false;
                    }
                }
                true
            }
            LeadFormMsg::Dismiss => match self.state.dismiss() {
                Ok(()) => {
                    self.clear_file_input();
                    ctx.props().on_close.emit(());
                    true
                }
                Err(e) => {
                    warn!("Ignoring dismiss: {}", e);
                    false
                }
            },
            LeadFormMsg::Cancel => match self.state.close() {
                Ok(()) => {
                    self.clear_file_input();
                    ctx.props().on_close.emit(());
                    true
                }
                Err(e) => {
                    warn!("Ignoring cancel: {}", e);
                    false
                }
            },
        }
    }

    fn clear_file_input(&self) {
        if let Some(input) = self.file_input.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }

    fn view_error(&self, field: Field) -> Html {
        match self.state.errors().get(field) {
            Some(message) => html! { <p class="field-error" role="alert">{message}</p> },
            None => html! {},
        }
    }

    fn submit_label(&self) -> &'static str {
        match self.state.variant() {
            FormVariant::Quick => "Send my CV",
            FormVariant::JobMatch => "Analyse my CV",
        }
    }

    fn submitting_label(&self) -> &'static str {
        match self.state.variant() {
            FormVariant::Quick => " Uploading...",
            FormVariant::JobMatch => " Analysing your CV...",
        }
    }

    fn view_complete(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="lead-form-complete">
                <div class="complete-icon">{"🎉"}</div>
                <h3>{"Your CV is in the queue"}</h3>
                <p>
                    {"We've passed your CV and the job description to our analysis pipeline. "}
                    {"You'll receive a detailed match report by email, usually within a few minutes."}
                </p>
                <button class="cta-button" onclick={ctx.link().callback(|_| LeadFormMsg::Dismiss)}>
                    {"Done"}
                </button>
            </div>
        }
    }
}
