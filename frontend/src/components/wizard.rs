//! Generic wizard shell.
//!
//! Renders a step header, the active step's content, and a cancel link.
//! The shell owns no step logic: the page provides the step list and the
//! cursor, each step's content renders its own forward button.

use leptos::*;

/// One page of the wizard: a header title plus the step content.
#[derive(Clone)]
pub struct WizardStep {
    pub title: String,
    pub content: ViewFn,
}

impl WizardStep {
    pub fn new<F, IV>(title: impl Into<String>, content: F) -> Self
    where
        F: Fn() -> IV + 'static,
        IV: IntoView,
    {
        Self {
            title: title.into(),
            content: ViewFn::from(content),
        }
    }
}

#[component]
pub fn Wizard(
    steps: Vec<WizardStep>,
    #[prop(into)] step_index: Signal<usize>,
    return_url: &'static str,
) -> impl IntoView {
    let titles: Vec<String> = steps.iter().map(|s| s.title.clone()).collect();
    let steps = store_value(steps);

    view! {
        <div class="wizard">
            <div class="wizard__header">
                <div class="wizard__steps">
                    <For
                        each=move || titles.clone().into_iter().enumerate()
                        key=|(idx, _)| *idx
                        children=move |(idx, title)| {
                            view! {
                                <div
                                    class="wizard__step-label"
                                    class:active=move || step_index.get() == idx
                                    class:done={move || step_index.get() > idx}
                                >
                                    <span class="wizard__step-number">{idx + 1}</span>
                                    {title}
                                </div>
                            }
                        }
                    />
                </div>
                <a class="wizard__cancel" href=return_url>"Cancel"</a>
            </div>
            <div class="wizard__content">
                {move || {
                    steps.with_value(|list| list.get(step_index.get()).map(|step| step.content.run()))
                }}
            </div>
        </div>
    }
}

/// Forward button rendered inside each step's footer.
#[component]
pub fn WizardButtons(
    #[prop(into)] on_next: Callback<()>,
    #[prop(into, optional)] disable_next: MaybeSignal<bool>,
    #[prop(into, optional)] next_caption: Option<String>,
) -> impl IntoView {
    let caption = next_caption.unwrap_or_else(|| "Next".to_string());

    view! {
        <div class="wizard__buttons">
            <button
                class="btn btn-primary"
                disabled=move || disable_next.get()
                on:click=move |_| on_next.call(())
            >
                {caption}
            </button>
        </div>
    }
}
