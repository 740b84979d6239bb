use std::future::Future;

use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;
use web_sys::FormData;

use super::file::CvFile;
use super::state::FormFields;
use super::{Field, FormVariant};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("webhook answered with status {0}")]
    Status(u16),
    #[error("could not encode the form: {0}")]
    Payload(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Part {
    Text { name: &'static str, value: String },
    File { name: &'static str, file: CvFile },
}

impl Part {
    pub fn name(&self) -> &'static str {
        match self {
            Part::Text { name, .. } | Part::File { name, .. } => *name,
        }
    }
}

/// Multipart body for the webhook, independent of the browser `FormData`
/// it is eventually turned into.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    pub parts: Vec<Part>,
}

impl Payload {
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            Part::Text { name: n, value } if *n == name => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn file(&self, name: &str) -> Option<&CvFile> {
        self.parts.iter().find_map(|part| match part {
            Part::File { name: n, file } if *n == name => Some(file),
            _ => None,
        })
    }

    pub fn to_form_data(&self) -> Result<FormData, SubmitError> {
        let encode = |e: wasm_bindgen::JsValue| SubmitError::Payload(format!("{:?}", e));

        let form_data = FormData::new().map_err(encode)?;
        for part in &self.parts {
            match part {
                Part::Text { name, value } => form_data.append_with_str(name, value).map_err(encode)?,
                Part::File { name, file } => {
                    let blob = file.to_blob().map_err(encode)?;
                    form_data
                        .append_with_blob_and_filename(name, &blob, &file.name)
                        .map_err(encode)?
                }
            }
        }
        Ok(form_data)
    }
}

pub fn build_payload(variant: FormVariant, fields: &FormFields) -> Payload {
    let parts = variant
        .payload_fields()
        .iter()
        .filter_map(|field| {
            let name = variant.field_key(*field);
            match field {
                Field::Name => Some(Part::Text { name, value: fields.name.trim().to_string() }),
                Field::Email => Some(Part::Text { name, value: fields.email.trim().to_string() }),
                Field::JobDescription => Some(Part::Text {
                    name,
                    value: fields.job_description.trim().to_string(),
                }),
                Field::File => fields.file.clone().map(|file| Part::File { name, file }),
            }
        })
        .collect();

    Payload { parts }
}

/// Something that can POST a payload and report the HTTP status it got back.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post(&self, url: &str, payload: &Payload) -> Result<u16, SubmitError>;
}

/// Sends the payload as `multipart/form-data` with `gloo-net`. The browser
/// fills in the boundary, so no content type is set by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebhookTransport;

impl Transport for WebhookTransport {
    async fn post(&self, url: &str, payload: &Payload) -> Result<u16, SubmitError> {
        let body = payload.to_form_data()?;
        let response = Request::post(url)
            .body(body)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(response.status())
    }
}

/// One POST, no retry. Anything outside 2xx counts as a failure and the
/// response body is ignored.
pub async fn submit<T: Transport>(transport: &T, url: &str, payload: &Payload) -> Result<(), SubmitError> {
    info!("Submitting {} field(s) to webhook", payload.parts.len());
    match transport.post(url, payload).await {
        Ok(status) if (200..300).contains(&status) => {
            info!("Webhook accepted submission with status {}", status);
            Ok(())
        }
        Ok(status) => {
            warn!("Webhook rejected submission with status {}", status);
            Err(SubmitError::Status(status))
        }
        Err(e) => {
            warn!("Webhook request failed: {}", e);
            Err(e)
        }
    }
}

/// The whole network leg of a submission: one POST, then, only when it
/// succeeded and the variant asks for it, the presentational pause before
/// the complete screen. `sleep` is `gloo_timers::future::TimeoutFuture::new`
/// in the browser.
pub async fn run_submission<T, S, F>(
    transport: &T,
    url: &str,
    variant: FormVariant,
    payload: &Payload,
    sleep: S,
) -> Result<(), SubmitError>
where
    T: Transport,
    S: FnOnce(u32) -> F,
    F: Future<Output = ()>,
{
    submit(transport, url, payload).await?;
    if let Some(delay) = variant.success_delay_ms() {
        sleep(delay).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::state::{FormState, Settled, SubmissionPhase};
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct MockTransport {
        reply: Result<u16, SubmitError>,
        calls: RefCell<Vec<(String, Payload)>>,
    }

    impl MockTransport {
        fn replying(reply: Result<u16, SubmitError>) -> Self {
            Self { reply, calls: RefCell::new(Vec::new()) }
        }
    }

    impl Transport for MockTransport {
        async fn post(&self, url: &str, payload: &Payload) -> Result<u16, SubmitError> {
            self.calls.borrow_mut().push((url.to_string(), payload.clone()));
            self.reply.clone()
        }
    }

    const URL: &str = "http://webhook.test/cv";

    fn filled(variant: FormVariant) -> FormState {
        let mut state = FormState::new(variant);
        state.set_name("  Alan Turing ".into());
        state.set_email("alan@bletchley.uk".into());
        state.set_job_description("Cryptanalyst for the naval section".into());
        state
            .select_file(CvFile::new("turing.pdf", "application/pdf", b"%PDF-1.4".to_vec()))
            .unwrap();
        state
    }

    #[test]
    fn job_match_payload_has_four_capitalized_parts() {
        let payload = build_payload(FormVariant::JobMatch, filled(FormVariant::JobMatch).fields());
        let names: Vec<_> = payload.parts.iter().map(Part::name).collect();
        assert_eq!(names, vec!["Name", "Email", "Job Description", "CV"]);
        assert_eq!(payload.text("Name"), Some("Alan Turing"));
        assert_eq!(payload.file("CV").map(|f| f.name.as_str()), Some("turing.pdf"));
    }

    #[test]
    fn quick_payload_leaves_out_job_description() {
        let payload = build_payload(FormVariant::Quick, filled(FormVariant::Quick).fields());
        let names: Vec<_> = payload.parts.iter().map(Part::name).collect();
        assert_eq!(names, vec!["name", "email", "cv"]);
    }

    #[test]
    fn any_2xx_is_success() {
        for status in [200, 201, 204, 299] {
            let transport = MockTransport::replying(Ok(status));
            assert_eq!(block_on(submit(&transport, URL, &Payload::default())), Ok(()));
        }
    }

    #[test]
    fn non_2xx_is_failure() {
        for status in [199, 301, 400, 500, 503] {
            let transport = MockTransport::replying(Ok(status));
            assert_eq!(
                block_on(submit(&transport, URL, &Payload::default())),
                Err(SubmitError::Status(status))
            );
        }
    }

    #[test]
    fn valid_form_against_200_posts_once_and_completes() {
        let transport = MockTransport::replying(Ok(200));
        let mut state = filled(FormVariant::JobMatch);

        let payload = state.begin_submit().unwrap();
        assert_eq!(state.phase(), SubmissionPhase::Submitting);
        block_on(submit(&transport, URL, &payload)).unwrap();
        state.resolve_success().unwrap();

        assert_eq!(state.phase(), SubmissionPhase::Complete);
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, URL);
        assert_eq!(calls[0].1, payload);
    }

    #[test]
    fn server_error_or_network_fault_returns_to_idle_with_values() {
        for reply in [Ok(500), Err(SubmitError::Transport("connection reset".into()))] {
            let transport = MockTransport::replying(reply);
            let mut state = filled(FormVariant::JobMatch);
            let before = state.fields().clone();

            let payload = state.begin_submit().unwrap();
            assert!(block_on(submit(&transport, URL, &payload)).is_err());
            state.resolve_failure().unwrap();

            assert_eq!(state.phase(), SubmissionPhase::Idle);
            assert_eq!(state.fields(), &before);
        }
    }

    #[test]
    fn invalid_form_never_reaches_the_transport() {
        let transport = MockTransport::replying(Ok(200));
        let mut state = filled(FormVariant::Quick);
        state.set_name(String::new());

        if let Ok(payload) = state.begin_submit() {
            block_on(submit(&transport, URL, &payload)).unwrap();
        }
        assert!(transport.calls.borrow().is_empty());
    }

    #[test]
    fn double_trigger_while_pending_posts_once() {
        let transport = MockTransport::replying(Ok(200));
        let mut state = filled(FormVariant::Quick);

        let first = state.begin_submit();
        let second = state.begin_submit();
        for payload in [first, second].into_iter().flatten() {
            block_on(submit(&transport, URL, &payload)).unwrap();
        }
        assert_eq!(transport.calls.borrow().len(), 1);

        // Only after the first one settles can a new request go out.
        state.resolve_failure().unwrap();
        let retry = state.begin_submit().unwrap();
        block_on(submit(&transport, URL, &retry)).unwrap();
        assert_eq!(transport.calls.borrow().len(), 2);
    }

    fn drive(
        transport: &MockTransport,
        state: &mut FormState,
        slept: &RefCell<Vec<u32>>,
    ) -> Result<Settled, crate::form::state::TransitionError> {
        let payload = state.begin_submit()?;
        let result = block_on(run_submission(transport, URL, state.variant(), &payload, |ms| {
            slept.borrow_mut().push(ms);
            async {}
        }));
        state.settle(&result)
    }

    #[test]
    fn job_match_success_waits_then_completes() {
        let transport = MockTransport::replying(Ok(200));
        let slept = RefCell::new(Vec::new());
        let mut state = filled(FormVariant::JobMatch);

        assert_eq!(drive(&transport, &mut state, &slept), Ok(Settled::Completed));
        assert_eq!(*slept.borrow(), vec![3_000]);
        assert_eq!(state.phase(), SubmissionPhase::Complete);
        assert_eq!(transport.calls.borrow().len(), 1);
    }

    #[test]
    fn quick_success_closes_without_waiting() {
        let transport = MockTransport::replying(Ok(201));
        let slept = RefCell::new(Vec::new());
        let mut state = filled(FormVariant::Quick);

        assert_eq!(drive(&transport, &mut state, &slept), Ok(Settled::Closed));
        assert!(slept.borrow().is_empty());
        assert_eq!(state.phase(), SubmissionPhase::Idle);
        assert_eq!(state.fields().file, None);
        assert_eq!(state.fields().name, "");
    }

    #[test]
    fn failures_skip_the_delay_and_keep_values() {
        for variant in [FormVariant::Quick, FormVariant::JobMatch] {
            for reply in [Ok(500), Ok(404), Err(SubmitError::Transport("offline".into()))] {
                let transport = MockTransport::replying(reply);
                let slept = RefCell::new(Vec::new());
                let mut state = filled(variant);
                let before = state.fields().clone();

                assert_eq!(drive(&transport, &mut state, &slept), Ok(Settled::Failed));
                assert!(slept.borrow().is_empty());
                assert_eq!(state.phase(), SubmissionPhase::Idle);
                assert_eq!(state.fields(), &before);
            }
        }
    }

    #[test]
    fn retry_after_failure_is_a_new_request() {
        let transport = MockTransport::replying(Ok(503));
        let slept = RefCell::new(Vec::new());
        let mut state = filled(FormVariant::JobMatch);

        assert_eq!(drive(&transport, &mut state, &slept), Ok(Settled::Failed));
        assert_eq!(drive(&transport, &mut state, &slept), Ok(Settled::Failed));
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].1, calls[1].1);
    }
}
