use std::rc::Rc;

use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Celebrate,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Celebrate => "toast-celebrate",
            ToastKind::Error => "toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Celebrate => "🎉",
            ToastKind::Error => "!",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, PartialEq)]
pub enum ToastAction {
    Push { kind: ToastKind, title: String, message: String },
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push { kind, title, message } => {
                queue.toasts.push(Toast { id: queue.next_id, kind, title, message });
                queue.next_id = queue.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => queue.toasts.retain(|toast| toast.id != id),
        }
        Rc::new(queue)
    }
}

/// Handle for raising notifications, shared through a context.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    dispatch: Callback<ToastAction>,
}

impl Toaster {
    pub fn new(dispatch: Callback<ToastAction>) -> Self {
        Self { dispatch }
    }

    pub fn push(&self, kind: ToastKind, title: &str, message: &str) {
        self.dispatch.emit(ToastAction::Push {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn success(&self, title: &str, message: &str) {
        self.push(ToastKind::Success, title, message);
    }

    pub fn celebrate(&self, title: &str, message: &str) {
        self.push(ToastKind::Celebrate, title, message);
    }

    pub fn error(&self, title: &str, message: &str) {
        self.push(ToastKind::Error, title, message);
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub children: Children,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let dispatcher = queue.dispatcher();

    // Built once per dispatcher so context consumers and toast items are not
    // re-rendered by every queue change.
    let toaster = use_memo(
        |dispatcher| {
            let dispatcher = dispatcher.clone();
            Toaster::new(Callback::from(move |action| dispatcher.dispatch(action)))
        },
        dispatcher.clone(),
    );
    let on_dismiss = use_callback(
        |id: u32, dispatcher| dispatcher.dispatch(ToastAction::Dismiss(id)),
        dispatcher,
    );

    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            { for props.children.iter() }
            <div class="toast-stack" aria-live="polite">
                { for queue.toasts.iter().map(|toast| html! {
                    <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u32>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(id), config::TOAST_DURATION_MS);
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("toast", props.toast.kind.class())} role="status">
            <span class="toast-icon">{props.toast.kind.icon()}</span>
            <div class="toast-body">
                <strong>{&props.toast.title}</strong>
                <p>{&props.toast.message}</p>
            </div>
            <button class="toast-close" onclick={close} aria-label="Dismiss">{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn push(queue: Rc<ToastQueue>, kind: ToastKind, title: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            kind,
            title: title.to_string(),
            message: String::new(),
        })
    }

    #[test]
    fn pushed_toasts_get_distinct_ids() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, ToastKind::Success, "one");
        let queue = push(queue, ToastKind::Error, "two");

        let ids: Vec<_> = queue.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, ToastKind::Success, "one");
        let queue = push(queue, ToastKind::Celebrate, "two");
        let queue = queue.reduce(ToastAction::Dismiss(0));

        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].title, "two");

        let queue = queue.reduce(ToastAction::Dismiss(42));
        assert_eq!(queue.toasts.len(), 1);
    }

    #[test]
    fn toaster_is_equal_for_the_same_dispatch() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let dispatch = {
            let seen = seen.clone();
            Callback::from(move |action| seen.borrow_mut().push(action))
        };
        let toaster = Toaster::new(dispatch.clone());
        assert!(toaster == Toaster::new(dispatch));
        assert!(toaster != Toaster::new(Callback::from(|_| ())));

        toaster.error("Submission failed", "Please try again.");
        assert_eq!(
            *seen.borrow(),
            vec![ToastAction::Push {
                kind: ToastKind::Error,
                title: "Submission failed".to_string(),
                message: "Please try again.".to_string(),
            }]
        );
    }
}
