//! Preprocessor step screen.
//!
//! Pick a preprocessing model (or skip) and the OCR languages to run it
//! with. The selection feeds `PreprocessorStepState::request`, which the
//! wizard page turns into the actual run.

use leptos::*;
use web_sys::{Event, HtmlSelectElement};

use crate::config::SUPPORTED_LANGUAGES;
use crate::services::fetch_preprocessors;
use crate::types::PreprocessorStepState;

#[component]
pub fn UploadWizardPreprocessor(state: RwSignal<PreprocessorStepState>) -> impl IntoView {
    let preprocessors = create_local_resource(|| (), |_| async { fetch_preprocessors().await });

    let on_model_change = move |ev: Event| {
        let select: HtmlSelectElement = event_target(&ev);
        let value = select.value();
        let chosen = if value.is_empty() {
            None
        } else {
            preprocessors
                .get()
                .and_then(|result| result.ok())
                .and_then(|list| list.into_iter().find(|p| p.id == value))
        };
        state.update(|s| s.preprocessor = chosen);
    };

    let toggle_language = move |code: &'static str| {
        state.update(|s| {
            if let Some(pos) = s.languages.iter().position(|l| l == code) {
                s.languages.remove(pos);
            } else {
                s.languages.push(code.to_string());
            }
        });
    };

    view! {
        <div class="preprocessor-screen">
            <label class="field-label">"Preprocessing model"</label>
            {move || match preprocessors.get() {
                None => view! { <p class="preprocessor-hint">"Loading models..."</p> }.into_view(),
                Some(Err(e)) => view! {
                    <p class="preprocessor-error">{format!("Could not load models: {}", e)}</p>
                }
                .into_view(),
                Some(Ok(list)) => view! {
                    <select class="preprocessor-select" on:change=on_model_change>
                        <option value="" selected=move || state.with(|s| s.preprocessor.is_none())>
                            "Skip preprocessing"
                        </option>
                        {list
                            .into_iter()
                            .map(|model| {
                                let value = model.id.clone();
                                let id = model.id;
                                view! {
                                    <option
                                        value=value
                                        selected=move || {
                                            state.with(|s| {
                                                s.preprocessor.as_ref().map(|p| p.id.as_str())
                                                    == Some(id.as_str())
                                            })
                                        }
                                    >
                                        {model.name}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                }
                .into_view(),
            }}

            <label class="field-label">"OCR languages"</label>
            <div class="language-grid">
                {SUPPORTED_LANGUAGES
                    .iter()
                    .map(|(code, label)| {
                        let code = *code;
                        view! {
                            <label class="language-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        state.with(|s| s.languages.iter().any(|l| l == code))
                                    }
                                    on:change=move |_| toggle_language(code)
                                />
                                {*label}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
