//! Dataset step screen.
//!
//! Three choices: keep the uploaded files loose, attach them to an
//! existing dataset, or create a new dataset for them. The recorded
//! state gates the step's next button via `DatasetStepState::is_complete`.

use leptos::*;
use web_sys::{Event, HtmlSelectElement};

use crate::services::fetch_datasets;
use crate::types::{DatasetOption, DatasetStepState};

#[component]
pub fn DatasetWizardScreen(state: RwSignal<DatasetStepState>) -> impl IntoView {
    let datasets = create_local_resource(|| (), |_| async { fetch_datasets().await });

    let select_option = move |option: DatasetOption| {
        state.update(|s| s.option = option);
    };

    let on_dataset_change = move |ev: Event| {
        let select: HtmlSelectElement = event_target(&ev);
        let chosen = select.value().parse::<i64>().ok().and_then(|id| {
            datasets
                .get()
                .and_then(|result| result.ok())
                .and_then(|list| list.into_iter().find(|d| d.id == id))
        });
        state.update(|s| s.selected = chosen);
    };

    let on_name_input = move |ev: Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.new_name = value);
    };

    view! {
        <div class="dataset-screen">
            <label class="radio-row">
                <input
                    type="radio"
                    name="dataset-option"
                    prop:checked=move || state.with(|s| s.option == DatasetOption::NoDataset)
                    on:change=move |_| select_option(DatasetOption::NoDataset)
                />
                "Do not add to a dataset"
            </label>

            <label class="radio-row">
                <input
                    type="radio"
                    name="dataset-option"
                    prop:checked=move || state.with(|s| s.option == DatasetOption::Existing)
                    on:change=move |_| select_option(DatasetOption::Existing)
                />
                "Add to an existing dataset"
            </label>

            <Show
                when=move || state.with(|s| s.option == DatasetOption::Existing)
                fallback=|| view! {}
            >
                {move || match datasets.get() {
                    None => view! { <p class="dataset-hint">"Loading datasets..."</p> }.into_view(),
                    Some(Err(e)) => view! {
                        <p class="dataset-error">{format!("Could not load datasets: {}", e)}</p>
                    }
                    .into_view(),
                    Some(Ok(list)) => view! {
                        <select class="dataset-select" on:change=on_dataset_change>
                            <option value="" selected=move || state.with(|s| s.selected.is_none())>
                                "Select a dataset"
                            </option>
                            {list
                                .into_iter()
                                .map(|dataset| {
                                    let id = dataset.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || {
                                                state.with(|s| {
                                                    s.selected.as_ref().map(|d| d.id) == Some(id)
                                                })
                                            }
                                        >
                                            {dataset.name}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    }
                    .into_view(),
                }}
            </Show>

            <label class="radio-row">
                <input
                    type="radio"
                    name="dataset-option"
                    prop:checked=move || state.with(|s| s.option == DatasetOption::New)
                    on:change=move |_| select_option(DatasetOption::New)
                />
                "Create a new dataset"
            </label>

            <Show
                when=move || state.with(|s| s.option == DatasetOption::New)
                fallback=|| view! {}
            >
                <input
                    type="text"
                    class="dataset-name-input"
                    placeholder="Dataset name"
                    prop:value=move || state.with(|s| s.new_name.clone())
                    on:input=on_name_input
                />
            </Show>
        </div>
    }
}
