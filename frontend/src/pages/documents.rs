//! Documents listing page.
//!
//! The wizard's cancel/return target.

use leptos::*;
use leptos_router::A;

use crate::config::UPLOAD_WIZARD_PAGE;
use crate::services::fetch_documents;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let documents = create_local_resource(|| (), |_| async { fetch_documents().await });

    view! {
        <div class="documents-page">
            <div class="documents-header">
                <h1>"Documents"</h1>
                <A class="btn btn-primary" href=UPLOAD_WIZARD_PAGE>
                    "Upload documents"
                </A>
            </div>
            {move || match documents.get() {
                None => view! { <p class="documents-hint">"Loading documents..."</p> }.into_view(),
                Some(Err(e)) => view! {
                    <p class="documents-error">{format!("Could not load documents: {}", e)}</p>
                }
                .into_view(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="documents-hint">"No documents yet. Upload some to get started."</p>
                }
                .into_view(),
                Some(Ok(list)) => view! {
                    <ul class="documents-list">
                        {list
                            .into_iter()
                            .map(|doc| {
                                view! {
                                    <li class="documents-item">
                                        <span class="documents-name">{doc.name}</span>
                                        <span class="documents-date">
                                            {doc.uploaded_at.unwrap_or_default()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view(),
            }}
        </div>
    }
}
