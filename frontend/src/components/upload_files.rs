//! Multi-file picker for the wizard's Upload step.
//!
//! Hidden file input behind a click-to-pick zone, with a removable list
//! of the current selection. The whole control locks while an upload is
//! in flight.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::use_notifier;
use crate::config::MAX_FILE_SIZE;

/// Human-readable file size.
fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = 1024.0 * 1024.0;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} B", bytes as u64)
    }
}

/// Stable identity for a selected file.
///
/// List rows are keyed by this, not by position: keyed rows keep their
/// originally-built children, so positional keys would make removal of a
/// non-last file appear to remove the wrong row. Also the basis for
/// deduplicating picks.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct FileKey {
    name: String,
    size: u64,
    modified: i64,
}

impl FileKey {
    fn of(file: &File) -> Self {
        Self {
            name: file.name(),
            size: file.size() as u64,
            modified: file.last_modified() as i64,
        }
    }
}

#[component]
pub fn UploadFilesControl(
    files: ReadSignal<Vec<File>>,
    set_files: WriteSignal<Vec<File>>,
    is_loading: ReadSignal<bool>,
) -> impl IntoView {
    let notifier = use_notifier();

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    if file.size() > MAX_FILE_SIZE {
                        notifier.error(format!("{} is too large to upload", file.name()));
                        continue;
                    }
                    // re-picking an already selected file is a no-op
                    let key = FileKey::of(&file);
                    set_files.update(|current| {
                        if !current.iter().any(|f| FileKey::of(f) == key) {
                            current.push(file);
                        }
                    });
                }
            }
        }
        // allow re-picking a removed file later
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(input) = document.get_element_by_id("wizardFileInput") {
                    if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                        html_input.click();
                    }
                }
            }
        }
    };

    view! {
        <div class="upload-control">
            <div class="upload-zone" on:click=trigger_file_input>
                <div class="upload-icon">"📄"</div>
                <div class="upload-text">
                    {move || if is_loading.get() {
                        "Uploading..."
                    } else {
                        "Click to select documents"
                    }}
                </div>

                <Show when=move || !is_loading.get() fallback=|| view! {}>
                    <div class="upload-hint">"PDF and image files, up to 100 MB each"</div>
                </Show>

                <input
                    type="file"
                    id="wizardFileInput"
                    multiple=true
                    style="display:none"
                    disabled=move || is_loading.get()
                    on:change=on_file_change
                />
            </div>

            <ul class="upload-file-list">
                <For
                    each=move || {
                        files
                            .get()
                            .iter()
                            .map(|file| (FileKey::of(file), file.clone()))
                            .collect::<Vec<_>>()
                    }
                    key=|(key, _)| key.clone()
                    children=move |(key, file)| {
                        view! {
                            <li class="upload-file">
                                <span class="upload-file-name">{file.name()}</span>
                                <span class="upload-file-size">{format_size(file.size())}</span>
                                <button
                                    class="upload-file-remove"
                                    disabled=move || is_loading.get()
                                    on:click=move |_| {
                                        set_files.update(|current| {
                                            current.retain(|f| FileKey::of(f) != key)
                                        })
                                    }
                                >
                                    "Remove"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{format_size, FileKey};

    fn key(name: &str, size: u64, modified: i64) -> FileKey {
        FileKey {
            name: name.to_string(),
            size,
            modified,
        }
    }

    #[test]
    fn sizes_format_with_sensible_units() {
        assert_eq!(format_size(512.0), "512 B");
        assert_eq!(format_size(2048.0), "2.0 KB");
        assert_eq!(format_size(3.5 * 1024.0 * 1024.0), "3.5 MB");
    }

    #[test]
    fn file_keys_are_stable_identities_not_positions() {
        let a = key("a.pdf", 100, 1);
        let a_again = key("a.pdf", 100, 1);
        let newer_a = key("a.pdf", 100, 2);

        assert_eq!(a, a_again);
        assert_ne!(a, newer_a);
    }

    #[test]
    fn removing_the_first_file_drops_its_row_key() {
        let mut rows = vec![key("a.pdf", 1, 1), key("b.pdf", 2, 2), key("c.pdf", 3, 3)];
        let removed = rows[0].clone();

        rows.retain(|k| *k != removed);

        // the surviving row keys are exactly B and C; with positional keys
        // the set after removal would still contain the first two rows
        assert_eq!(rows, vec![key("b.pdf", 2, 2), key("c.pdf", 3, 3)]);
        assert!(!rows.contains(&key("a.pdf", 1, 1)));
    }
}
