//! Documents view: toolbar, unified folder+file listing, and the
//! recent-files strip.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::icons as ic;
use crate::app::AppContext;
use crate::core::classify;
use crate::models::{ListingRow, SortKey, TypeFilter};
use crate::state::{CreateFolderOutcome, MoveOutcome};
use crate::utils::dom;
use crate::utils::format::{format_date, format_size};

/// Filter chip values, in display order.
const FILTER_CHIPS: [&str; 8] = ["all", "Folder", "PDF", "DOCX", "PPTX", "XLSX", "TXT", "IMAGE"];

#[component]
pub fn DocumentsView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let docs = ctx.documents.clone();
    let folders = ctx.folders.clone();

    // Initial load: folder list plus the unscoped document list.
    {
        let docs = docs.clone();
        let folders = folders.clone();
        spawn_local(async move {
            folders.fetch_folders().await;
            docs.fetch_by_folder(None).await;
        });
    }

    let upload_input: NodeRef<leptos::html::Input> = NodeRef::new();
    let folder_upload_input: NodeRef<leptos::html::Input> = NodeRef::new();
    // Folder receiving the next upload from the hidden per-folder input.
    let upload_target: RwSignal<Option<i64>> = RwSignal::new(None);

    let busy = docs.busy;
    let scope = docs.scope;
    let in_folder = move || scope.get().is_some();

    let rows = {
        let docs = docs.clone();
        let folders = folders.clone();
        move || folders.combined_listing(&docs)
    };
    let recents = {
        let docs = docs.clone();
        move || docs.recent_files()
    };

    let error_banner = {
        let doc_error = docs.error;
        let folder_error = folders.error;
        move || doc_error.get().or_else(|| folder_error.get())
    };

    let on_upload_change = {
        let docs = docs.clone();
        move |_| {
            let Some(input) = upload_input.get_untracked() else {
                return;
            };
            let Some(file) = dom::take_selected_file(&input) else {
                return;
            };
            dom::console_debug(&format!(
                "uploading {} ({})",
                file.name(),
                classify::classify_mime(&file.type_())
            ));
            let docs = docs.clone();
            spawn_local(async move {
                docs.upload(file).await;
            });
        }
    };

    let on_folder_upload_change = {
        let docs = docs.clone();
        let folders = folders.clone();
        move |_| {
            let Some(input) = folder_upload_input.get_untracked() else {
                return;
            };
            let Some(file) = dom::take_selected_file(&input) else {
                return;
            };
            let Some(folder_id) = upload_target.get_untracked() else {
                return;
            };
            upload_target.set(None);
            let docs = docs.clone();
            let folders = folders.clone();
            spawn_local(async move {
                match folders.move_file_to_folder(&docs, file, folder_id).await {
                    MoveOutcome::Moved { document_id } => {
                        dom::console_debug(&format!("document {document_id} filed into folder {folder_id}"));
                    }
                    MoveOutcome::UploadedUnfiled { document_id, error } => {
                        dom::console_warn(&format!(
                            "document {document_id} uploaded but left unfoldered: {error}"
                        ));
                    }
                    MoveOutcome::Failed(error) => {
                        dom::console_warn(&format!("upload into folder {folder_id} failed: {error}"));
                    }
                }
            });
        }
    };

    let on_sort_change = {
        let sort_by = docs.sort_by;
        move |ev| sort_by.set(SortKey::parse(&event_target_value(&ev)))
    };

    let on_leave_folder = {
        let docs = docs.clone();
        let folders = folders.clone();
        move |_| {
            let docs = docs.clone();
            let folders = folders.clone();
            spawn_local(async move {
                folders.leave_folder(&docs).await;
            });
        }
    };

    let row_item = {
        let docs = docs.clone();
        let folders = folders.clone();
        move |row: ListingRow| match row {
            ListingRow::Folder(folder) => {
                let docs = docs.clone();
                let folders = folders.clone();
                let enter = {
                    let docs = docs.clone();
                    let folders = folders.clone();
                    let folder_id = folder.id;
                    move |_| {
                        let docs = docs.clone();
                        let folders = folders.clone();
                        spawn_local(async move {
                            folders.enter_folder(&docs, folder_id).await;
                        });
                    }
                };
                let upload_into = {
                    let folder_id = folder.id;
                    move |_| {
                        upload_target.set(Some(folder_id));
                        if let Some(input) = folder_upload_input.get_untracked() {
                            input.click();
                        }
                    }
                };
                let delete = {
                    let folders = folders.clone();
                    let target = folder.clone();
                    move |_| {
                        let folders = folders.clone();
                        let target = target.clone();
                        spawn_local(async move {
                            folders.delete_folder(&target).await;
                        });
                    }
                };
                let created = folder.created_at.map(format_date).unwrap_or_default();
                let description = folder.description.clone().unwrap_or_default();
                view! {
                    <div class="row row-folder">
                        <span class="row-icon"><Icon icon=ic::FOLDER /></span>
                        <button class="row-name" title=description on:click=enter>{folder.name.clone()}</button>
                        <span class="row-size">"-"</span>
                        <span class="row-date">{created}</span>
                        <span class="row-actions">
                            <button title="Upload into folder" on:click=upload_into>
                                <Icon icon=ic::UPLOAD />
                            </button>
                            <button title="Move to trash" on:click=delete>
                                <Icon icon=ic::TRASH />
                            </button>
                        </span>
                    </div>
                }
                .into_any()
            }
            ListingRow::File(doc) => {
                let download = {
                    let docs = docs.clone();
                    let target = doc.clone();
                    move |_| {
                        let docs = docs.clone();
                        let target = target.clone();
                        spawn_local(async move {
                            docs.download(&target).await;
                        });
                    }
                };
                let delete = {
                    let docs = docs.clone();
                    let target = doc.clone();
                    move |_| {
                        let docs = docs.clone();
                        let target = target.clone();
                        spawn_local(async move {
                            docs.soft_delete(&target).await;
                        });
                    }
                };
                view! {
                    <div class="row row-file">
                        <span class="row-icon"><Icon icon=ic::FILE /></span>
                        <span class="row-name">{doc.original_name.clone()}</span>
                        <span class="row-size">{format_size(doc.file_size)}</span>
                        <span class="row-date">{format_date(doc.created_at)}</span>
                        <span class="row-actions">
                            <button title="Download" on:click=download>
                                <Icon icon=ic::DOWNLOAD />
                            </button>
                            <button title="Move to trash" on:click=delete>
                                <Icon icon=ic::TRASH />
                            </button>
                        </span>
                    </div>
                }
                .into_any()
            }
        }
    };

    view! {
        <div class="documents">
            <div class="toolbar">
                <Show when=in_folder>
                    <button class="back" on:click=on_leave_folder.clone()>
                        <Icon icon=ic::BACK />
                        "All items"
                    </button>
                </Show>

                <button
                    class="upload"
                    disabled=move || busy.get()
                    on:click=move |_| {
                        if let Some(input) = upload_input.get_untracked() {
                            input.click();
                        }
                    }
                >
                    <Icon icon=ic::UPLOAD />
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
                <input type="file" class="hidden" node_ref=upload_input on:change=on_upload_change />
                <input
                    type="file"
                    class="hidden"
                    node_ref=folder_upload_input
                    on:change=on_folder_upload_change
                />

                <NewFolderDialog />

                <select class="sort" on:change=on_sort_change prop:value=move || docs.sort_by.get().as_str()>
                    <option value="latest">"Latest"</option>
                    <option value="oldest">"Oldest"</option>
                    {move || {
                        (!in_folder())
                            .then(|| {
                                view! {
                                    <option value="size_asc">"Size (smallest)"</option>
                                    <option value="size_desc">"Size (largest)"</option>
                                    <option value="name_az">"Name (A-Z)"</option>
                                }
                            })
                    }}
                </select>
            </div>

            <div class="chips">
                {FILTER_CHIPS
                    .iter()
                    .map(|value| {
                        let chip = *value;
                        let selected_type = ctx.documents.selected_type;
                        let is_active = move || selected_type.get() == TypeFilter::parse(chip);
                        view! {
                            <button
                                class="chip"
                                class:active=is_active
                                on:click=move |_| selected_type.set(TypeFilter::parse(chip))
                            >
                                {chip}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || error_banner().map(|message| view! { <div class="error">{message}</div> })}

            <section class="recent">
                <h3>"Recent files"</h3>
                <div class="recent-cards">
                    <For
                        each=recents
                        key=|file| file.id
                        children=move |file| {
                            view! {
                                <div class="recent-card">
                                    <span class="recent-name" title=file.name.clone()>{file.name.clone()}</span>
                                    <span class="recent-date">{file.date.clone()}</span>
                                    <span class="recent-size">{file.size.clone()}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </section>

            <section class="listing">
                <div class="listing-header">
                    <span class="row-icon"></span>
                    <span class="row-name">"Name"</span>
                    <span class="row-size">"Size"</span>
                    <span class="row-date">"Created"</span>
                    <span class="row-actions"></span>
                </div>
                <For each=rows key=|row| (row.is_folder(), row.id()) children=row_item />
            </section>
        </div>
    }
}

/// New-folder button plus its dialog (name, description, optional file).
#[component]
fn NewFolderDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let docs = ctx.documents.clone();
    let folders = ctx.folders.clone();

    let open = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_create = {
        let docs = docs.clone();
        let folders = folders.clone();
        move |_| {
            let folder_name = name.get_untracked();
            if folder_name.trim().is_empty() {
                folders.error.set(Some("Please enter a folder name".to_string()));
                return;
            }
            let folder_description = description.get_untracked();
            let attachment = file_input
                .get_untracked()
                .and_then(|input| dom::take_selected_file(&input));

            open.set(false);
            name.set(String::new());
            description.set(String::new());

            let docs = docs.clone();
            let folders = folders.clone();
            spawn_local(async move {
                match folders
                    .create_folder(&docs, &folder_name, &folder_description, attachment)
                    .await
                {
                    CreateFolderOutcome::Created { folder_id } => {
                        dom::console_debug(&format!("folder {folder_id} created"));
                    }
                    CreateFolderOutcome::CreatedAttachFailed { folder_id, error } => {
                        dom::console_warn(&format!(
                            "folder {folder_id} created, but the staged file was not attached: {error}"
                        ));
                    }
                    CreateFolderOutcome::Failed(error) => {
                        dom::console_warn(&format!("folder creation failed: {error}"));
                    }
                }
            });
        }
    };

    view! {
        <button class="new-folder" on:click=move |_| open.set(true)>
            <Icon icon=ic::FOLDER_PLUS />
            "New folder"
        </button>

        <Show when=move || open.get()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h3>"Create folder"</h3>
                    <input
                        placeholder="Folder name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description (optional)"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <input type="file" node_ref=file_input />
                    <div class="dialog-actions">
                        <button on:click=on_create.clone()>"Create"</button>
                        <button on:click=move |_| open.set(false)>"Cancel"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
