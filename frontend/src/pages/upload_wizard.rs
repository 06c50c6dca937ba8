//! The four-step upload wizard page.
//!
//! Upload → Dataset → Preprocessor → Extraction & Annotation.
//! All page-level state lives here; each step's "next" action runs the
//! step's side effects before (or, for Upload, instead of) moving the
//! cursor forward. There is no back navigation.

use leptos::*;
use leptos_router::use_navigate;
use web_sys::File;

use crate::components::{
    use_notifier, AddJobConnector, DatasetWizardScreen, UploadFilesControl,
    UploadWizardPreprocessor, Wizard, WizardButtons, WizardStep,
};
use crate::config::{DOCUMENTS_PAGE, JOBS_PAGE};
use crate::services::{apply_dataset_action, run_preprocessing, upload_files};
use crate::types::{ApiResult, DatasetStepState, PreprocessorStepState, UploadedFile};

/// Apply an upload result to the page state.
///
/// One success toast per record, the returned ids stored and the cursor
/// advanced only on success; an error toast and no advance on failure.
/// The loading flag is cleared on both paths.
fn finish_upload(
    result: ApiResult<Vec<UploadedFile>>,
    set_uploaded_ids: WriteSignal<Vec<i64>>,
    set_is_loading: WriteSignal<bool>,
    mut notify_success: impl FnMut(String),
    mut notify_error: impl FnMut(String),
    advance: impl Fn(),
) {
    match result {
        Ok(records) => {
            for record in &records {
                notify_success(record.message.clone());
            }
            set_uploaded_ids.set(records.iter().map(|r| r.id).collect());
            advance();
        }
        Err(e) => notify_error(e.to_string()),
    }
    set_is_loading.set(false);
}

#[component]
pub fn UploadWizardPage() -> impl IntoView {
    let (files, set_files) = create_signal(Vec::<File>::new());
    let (is_loading, set_is_loading) = create_signal(false);
    let (uploaded_ids, set_uploaded_ids) = create_signal(Vec::<i64>::new());
    let dataset_step = create_rw_signal(DatasetStepState::default());
    let preprocessor_step = create_rw_signal(PreprocessorStepState::default());
    let (step_index, set_step_index) = create_signal(0usize);

    let notifier = use_notifier();
    let navigate = use_navigate();

    let advance = move || set_step_index.update(|index| *index += 1);

    // Upload step. The cursor moves only once the upload is confirmed:
    // on failure the user stays here with an error toast.
    let on_upload_next = move |_: ()| {
        let selection = files.get_untracked();
        if selection.is_empty() {
            return;
        }
        spawn_local(async move {
            set_is_loading.set(true);
            finish_upload(
                upload_files(&selection).await,
                set_uploaded_ids,
                set_is_loading,
                |message| notifier.success(message),
                |message| notifier.error(message),
                advance,
            );
        });
    };

    // Dataset step. The planned mutation runs in the background; a failure
    // is surfaced as a toast but does not hold the wizard back.
    let on_dataset_next = move |_: ()| {
        let plan = dataset_step
            .get_untracked()
            .action(&uploaded_ids.get_untracked());
        if let Some(action) = plan {
            spawn_local(async move {
                if let Err(e) = apply_dataset_action(action).await {
                    notifier.error(e.to_string());
                }
            });
        }
        advance();
    };

    // Preprocessor step. Fires the run if one is configured and advances
    // immediately; a failed kickoff is reported rather than swallowed.
    let on_preprocessor_next = move |_: ()| {
        let request = preprocessor_step
            .get_untracked()
            .request(&uploaded_ids.get_untracked());
        if let Some(request) = request {
            spawn_local(async move {
                if let Err(e) = run_preprocessing(&request).await {
                    log::warn!("preprocessing request failed: {}", e);
                    notifier.error(format!("Preprocessing failed to start: {}", e));
                }
            });
        }
        advance();
    };

    let on_job_added = Callback::new(move |id: i64| {
        if id > 0 {
            navigate(&format!("{}/{}", JOBS_PAGE, id), Default::default());
        }
    });

    let steps = vec![
        WizardStep::new("Upload", move || {
            view! {
                <div class="wizard__body">
                    <UploadFilesControl files=files set_files=set_files is_loading=is_loading/>
                </div>
                <div class="wizard__footer">
                    <WizardButtons
                        on_next=on_upload_next
                        disable_next=Signal::derive(move || {
                            files.with(|f| f.is_empty()) || is_loading.get()
                        })
                    />
                </div>
            }
        }),
        WizardStep::new("Dataset", move || {
            view! {
                <div class="wizard__body">
                    <DatasetWizardScreen state=dataset_step/>
                </div>
                <div class="wizard__footer">
                    <WizardButtons
                        on_next=on_dataset_next
                        disable_next=Signal::derive(move || {
                            !dataset_step.with(|s| s.is_complete())
                        })
                    />
                </div>
            }
        }),
        WizardStep::new("Preprocessor", move || {
            view! {
                <div class="wizard__body">
                    <UploadWizardPreprocessor state=preprocessor_step/>
                </div>
                <div class="wizard__footer">
                    <WizardButtons on_next=on_preprocessor_next/>
                </div>
            }
        }),
        WizardStep::new("Extraction and Annotation", move || {
            view! { <AddJobConnector files=uploaded_ids on_job_added=on_job_added/> }
        }),
    ];

    view! { <Wizard steps=steps step_index=step_index return_url=DOCUMENTS_PAGE/> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiError;

    #[test]
    fn successful_upload_records_ids_toasts_each_file_and_advances() {
        let runtime = create_runtime();
        let (uploaded_ids, set_uploaded_ids) = create_signal(Vec::<i64>::new());
        let (is_loading, set_is_loading) = create_signal(true);
        let (step_index, set_step_index) = create_signal(0usize);
        let mut successes = Vec::new();
        let mut errors = Vec::new();

        finish_upload(
            Ok(vec![
                UploadedFile {
                    id: 10,
                    message: "invoice-01.pdf uploaded".to_string(),
                },
                UploadedFile {
                    id: 11,
                    message: "invoice-02.pdf uploaded".to_string(),
                },
            ]),
            set_uploaded_ids,
            set_is_loading,
            |message| successes.push(message),
            |message| errors.push(message),
            || set_step_index.update(|index| *index += 1),
        );

        assert_eq!(uploaded_ids.get_untracked(), vec![10, 11]);
        assert_eq!(successes.len(), 2);
        assert!(errors.is_empty());
        assert_eq!(step_index.get_untracked(), 1);
        assert!(!is_loading.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn failed_upload_stays_on_the_step_and_clears_the_loading_flag() {
        let runtime = create_runtime();
        let (uploaded_ids, set_uploaded_ids) = create_signal(Vec::<i64>::new());
        let (is_loading, set_is_loading) = create_signal(true);
        let (step_index, set_step_index) = create_signal(0usize);
        let mut successes = Vec::new();
        let mut errors = Vec::new();

        finish_upload(
            Err(ApiError::Server {
                status: 500,
                message: "storage unavailable".to_string(),
            }),
            set_uploaded_ids,
            set_is_loading,
            |message| successes.push(message),
            |message| errors.push(message),
            || set_step_index.update(|index| *index += 1),
        );

        assert!(uploaded_ids.get_untracked().is_empty());
        assert!(successes.is_empty());
        assert_eq!(errors, vec!["Server error (500): storage unavailable".to_string()]);
        assert_eq!(step_index.get_untracked(), 0);
        assert!(!is_loading.get_untracked());

        runtime.dispose();
    }
}
