//! Job creation step.
//!
//! Final wizard step: name the job, pick the pipeline flavor, and save.
//! On success the created job's id is reported to the page, which
//! navigates to the job detail route.

use leptos::*;

use crate::components::{use_notifier, WizardButtons};
use crate::services::add_job;
use crate::types::{AddJobRequest, JobType};

#[component]
pub fn AddJobConnector(
    /// Uploaded file ids the job will operate on.
    #[prop(into)]
    files: Signal<Vec<i64>>,
    /// Invoked with the new job's id after a successful save.
    #[prop(into)]
    on_job_added: Callback<i64>,
) -> impl IntoView {
    let (job_name, set_job_name) = create_signal(String::new());
    let (job_type, set_job_type) = create_signal(JobType::ExtractionWithAnnotationJob);
    let (is_saving, set_is_saving) = create_signal(false);
    let notifier = use_notifier();

    let on_save = move |_: ()| {
        let request = AddJobRequest {
            name: job_name.get_untracked().trim().to_string(),
            files: files.get_untracked(),
            job_type: job_type.get_untracked(),
        };
        spawn_local(async move {
            set_is_saving.set(true);
            match add_job(&request).await {
                Ok(job) => {
                    log::info!("job {} created over {} files", job.id, request.files.len());
                    notifier.success(format!("Job \"{}\" created", job.name));
                    on_job_added.call(job.id);
                }
                Err(e) => notifier.error(e.to_string()),
            }
            set_is_saving.set(false);
        });
    };

    let type_radio = move |value: JobType, label: &'static str| {
        view! {
            <label class="radio-row">
                <input
                    type="radio"
                    name="job-type"
                    prop:checked=move || job_type.get() == value
                    on:change=move |_| set_job_type.set(value)
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="wizard__body">
            <div class="add-job-form">
                <label class="field-label">"Job name"</label>
                <input
                    type="text"
                    class="job-name-input"
                    placeholder="Job name"
                    prop:value=job_name
                    on:input=move |ev| set_job_name.set(event_target_value(&ev))
                />

                <label class="field-label">"Pipeline"</label>
                {type_radio(JobType::ExtractionWithAnnotationJob, "Extraction and annotation")}
                {type_radio(JobType::ExtractionJob, "Extraction only")}
                {type_radio(JobType::AnnotationJob, "Annotation only (no extraction)")}
            </div>
        </div>
        <div class="wizard__footer">
            <WizardButtons
                on_next=on_save
                next_caption="Finish".to_string()
                disable_next=Signal::derive(move || {
                    job_name.with(|n| n.trim().is_empty()) || is_saving.get()
                })
            />
        </div>
    }
}
