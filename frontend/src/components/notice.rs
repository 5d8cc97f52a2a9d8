use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeKind {
    fn classes(&self) -> &'static str {
        match self {
            NoticeKind::Success => "bg-green-500 border-green-600",
            NoticeKind::Error => "bg-red-500 border-red-600",
            NoticeKind::Warning => "bg-yellow-500 border-yellow-600",
            NoticeKind::Info => "bg-blue-500 border-blue-600",
        }
    }
}

/// Short-lived message in the corner of the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: Uuid,
    pub message: String,
    pub kind: NoticeKind,
    /// Milliseconds before it disappears on its own.
    pub duration: u32,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            duration: 5000,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error).with_duration(8000)
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NoticeContext {
    pub notices: Vec<Notice>,
    pub push: Callback<Notice>,
    pub dismiss: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct NoticeProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct NoticeList(Vec<Notice>);

enum NoticeAction {
    Push(Notice),
    Dismiss(Uuid),
}

impl Reducible for NoticeList {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut notices = self.0.clone();
        match action {
            NoticeAction::Push(notice) => notices.push(notice),
            NoticeAction::Dismiss(id) => notices.retain(|n| n.id != id),
        }
        Rc::new(Self(notices))
    }
}

#[function_component(NoticeProvider)]
pub fn notice_provider(props: &NoticeProviderProps) -> Html {
    let notices = use_reducer(NoticeList::default);

    let dismiss = {
        let notices = notices.clone();
        Callback::from(move |id: Uuid| notices.dispatch(NoticeAction::Dismiss(id)))
    };

    let push = {
        let notices = notices.clone();
        Callback::from(move |notice: Notice| {
            let id = notice.id;
            let duration = notice.duration;
            notices.dispatch(NoticeAction::Push(notice));

            let notices = notices.clone();
            Timeout::new(duration, move || notices.dispatch(NoticeAction::Dismiss(id))).forget();
        })
    };

    let context = NoticeContext {
        notices: notices.0.clone(),
        push,
        dismiss: dismiss.clone(),
    };

    html! {
        <ContextProvider<NoticeContext> context={context}>
            {props.children.clone()}
            <div class="fixed top-4 right-4 z-50 space-y-2">
                {notices.0.iter().map(|notice| {
                    let on_close = {
                        let dismiss = dismiss.clone();
                        let id = notice.id;
                        Callback::from(move |_: MouseEvent| dismiss.emit(id))
                    };
                    html! {
                        <div key={notice.id.to_string()} role="status" class={classes!(
                            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
                            notice.kind.classes()
                        )}>
                            <p class="flex-1 text-sm font-medium">{notice.message.clone()}</p>
                            <button onclick={on_close} class="ml-3 text-white/80 hover:text-white" aria-label="Dismiss">{"✕"}</button>
                        </div>
                    }
                }).collect::<Html>()}
            </div>
        </ContextProvider<NoticeContext>>
    }
}

/// Pushes notices from anywhere below [`NoticeProvider`]; a no-op outside it.
#[hook]
pub fn use_notices() -> Callback<Notice> {
    use_context::<NoticeContext>().map(|ctx| ctx.push).unwrap_or_default()
}
