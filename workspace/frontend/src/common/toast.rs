use yew::prelude::*;

use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastSeverity {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastSeverity::Info => "alert-info",
            ToastSeverity::Success => "alert-success",
            ToastSeverity::Warning => "alert-warning",
            ToastSeverity::Error => "alert-error",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastSeverity::Info => "fas fa-info-circle",
            ToastSeverity::Success => "fas fa-check-circle",
            ToastSeverity::Warning => "fas fa-exclamation-triangle",
            ToastSeverity::Error => "fas fa-exclamation-circle",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub severity: ToastSeverity,
    pub summary: String,
    pub detail: Option<String>,
}

/// Imperative notification channel, provided once per app.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<(ToastSeverity, String, Option<String>)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show(&self, severity: ToastSeverity, summary: impl Into<String>, detail: Option<String>) {
        self.add_toast.emit((severity, summary.into(), detail));
    }

    pub fn show_info(&self, summary: impl Into<String>) {
        self.show(ToastSeverity::Info, summary, None);
    }

    pub fn show_success(&self, summary: impl Into<String>) {
        self.show(ToastSeverity::Success, summary, None);
    }

    pub fn show_warning(&self, summary: impl Into<String>) {
        self.show(ToastSeverity::Warning, summary, None);
    }

    pub fn show_error(&self, summary: impl Into<String>) {
        self.show(ToastSeverity::Error, summary, None);
    }

    pub fn show_error_detail(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.show(ToastSeverity::Error, summary, Some(detail.into()));
    }

    pub fn show_success_detail(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.show(ToastSeverity::Success, summary, Some(detail.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::<Toast>::new);
    let next_id = use_state(|| 0usize);

    let add_toast = {
        let toasts = toasts.clone();
        let next_id = next_id.clone();

        Callback::from(
            move |(severity, summary, detail): (ToastSeverity, String, Option<String>)| {
                let id = *next_id;
                next_id.set(id + 1);

                let mut new_toasts = (*toasts).clone();
                new_toasts.push(Toast {
                    id,
                    severity,
                    summary,
                    detail,
                });
                toasts.set(new_toasts);

                let duration_ms = settings::get_settings().toast_duration_ms;
                let toasts = toasts.clone();
                gloo_timers::callback::Timeout::new(duration_ms, move || {
                    let mut remaining = (*toasts).clone();
                    remaining.retain(|t| t.id != id);
                    toasts.set(remaining);
                })
                .forget();
            },
        )
    };

    let remove_toast = {
        let toasts = toasts.clone();

        Callback::from(move |id: usize| {
            let mut remaining = (*toasts).clone();
            remaining.retain(|t| t.id != id);
            toasts.set(remaining);
        })
    };

    let context = ToastContext {
        toasts: (*toasts).clone(),
        add_toast,
        remove_toast: remove_toast.clone(),
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for (*toasts).iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.severity.alert_class(), "shadow-lg")}>
                            <i class={toast.severity.icon()}></i>
                            <div class="flex flex-col">
                                <span class="font-semibold">{&toast.summary}</span>
                                if let Some(detail) = &toast.detail {
                                    <span class="text-sm">{detail}</span>
                                }
                            </div>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
