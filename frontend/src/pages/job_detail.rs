//! Job detail page.
//!
//! Where the wizard lands after a successful job creation.

use leptos::*;
use leptos_router::{use_params_map, A};

use crate::config::DOCUMENTS_PAGE;
use crate::services::fetch_job;

#[component]
pub fn JobPage() -> impl IntoView {
    let params = use_params_map();
    let job_id = move || {
        params.with(|p| {
            p.get("id")
                .and_then(|id| id.parse::<i64>().ok())
                .unwrap_or_default()
        })
    };

    let job = create_local_resource(job_id, |id| async move { fetch_job(id).await });

    view! {
        <div class="job-page">
            <A class="job-back-link" href=DOCUMENTS_PAGE>
                "← Documents"
            </A>
            {move || match job.get() {
                None => view! { <p class="job-hint">"Loading job..."</p> }.into_view(),
                Some(Err(e)) => view! {
                    <p class="job-error">{format!("Could not load job: {}", e)}</p>
                }
                .into_view(),
                Some(Ok(job)) => view! {
                    <div class="job-card">
                        <h1>{job.name}</h1>
                        <p class="job-status">"Status: " {job.status}</p>
                        <p class="job-id">"Job #" {job.id}</p>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
