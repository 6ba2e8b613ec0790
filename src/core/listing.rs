//! Derived listing projections.
//!
//! Pure functions producing new ordered sequences from the view-model
//! lists without mutating them. Both the documents view and the unified
//! folder+file view project through here, so filtering and ordering
//! behave identically everywhere.

use chrono::{DateTime, Utc};

use crate::config;
use crate::core::classify;
use crate::models::{Document, Folder, ListingRow, SortKey, TypeFilter};
use crate::utils::format::{format_date, format_size, truncate_name};

/// A recent document annotated for display.
#[derive(Clone, Debug, PartialEq)]
pub struct RecentFile {
    pub id: i64,
    /// Truncated display name (extension preserved where possible).
    pub name: String,
    pub date: String,
    pub size: String,
}

/// Whether a document passes the active type filter.
///
/// No document classifies as the synthetic `Folders` filter, so selecting
/// it yields an empty document projection.
fn matches_filter(doc: &Document, filter: &TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Folders => false,
        TypeFilter::Tag(tag) => classify::document_tag(doc) == *tag,
    }
}

fn created_or_epoch(row: &ListingRow) -> DateTime<Utc> {
    row.created_at().unwrap_or(DateTime::UNIX_EPOCH)
}

fn sort_documents(list: &mut [Document], sort: SortKey) {
    match sort {
        SortKey::Latest => list.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => list.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::SizeAsc => list.sort_by(|a, b| a.file_size.cmp(&b.file_size)),
        SortKey::SizeDesc => list.sort_by(|a, b| b.file_size.cmp(&a.file_size)),
        SortKey::NameAz => list.sort_by(|a, b| a.original_name.cmp(&b.original_name)),
    }
}

fn sort_rows(rows: &mut [ListingRow], sort: SortKey) {
    match sort {
        SortKey::Latest => rows.sort_by(|a, b| created_or_epoch(b).cmp(&created_or_epoch(a))),
        SortKey::Oldest => rows.sort_by(|a, b| created_or_epoch(a).cmp(&created_or_epoch(b))),
        SortKey::SizeAsc => {
            rows.sort_by(|a, b| a.size().unwrap_or(0).cmp(&b.size().unwrap_or(0)))
        }
        SortKey::SizeDesc => {
            rows.sort_by(|a, b| b.size().unwrap_or(0).cmp(&a.size().unwrap_or(0)))
        }
        SortKey::NameAz => rows.sort_by(|a, b| a.name().cmp(b.name())),
    }
}

/// Filtered and sorted documents for the flat documents view.
pub fn sorted_and_filtered(
    documents: &[Document],
    filter: &TypeFilter,
    sort: SortKey,
) -> Vec<Document> {
    let mut list: Vec<Document> = documents
        .iter()
        .filter(|d| d.is_active() && matches_filter(d, filter))
        .cloned()
        .collect();
    sort_documents(&mut list, sort);
    list
}

/// The most recently created documents, annotated for display.
///
/// The type filter applies, except that the synthetic `Folders` value is
/// ignored here: the recent strip always shows files.
pub fn recent_files(documents: &[Document], filter: &TypeFilter) -> Vec<RecentFile> {
    let effective = match filter {
        TypeFilter::Folders => &TypeFilter::All,
        other => other,
    };
    let mut list: Vec<&Document> = documents
        .iter()
        .filter(|d| d.is_active() && matches_filter(d, effective))
        .collect();
    list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    list.into_iter()
        .take(config::RECENT_FILES_LIMIT)
        .map(|d| RecentFile {
            id: d.id,
            name: truncate_name(&d.original_name, config::display::MAX_NAME_DISPLAY_LEN),
            date: format_date(d.created_at),
            size: format_size(d.file_size),
        })
        .collect()
}

/// The unified folder+file listing.
///
/// With a scope cursor set, only documents inside that folder appear
/// (folders are flat, so no sub-folders), and only the date sort keys are
/// on offer. Without a cursor, folder rows are listed alongside
/// unfoldered file rows; the `Folders` filter suppresses files entirely.
/// After the primary sort, a stable pass forces every folder row before
/// every file row regardless of sort key.
pub fn combined_rows(
    documents: &[Document],
    folders: &[Folder],
    scope: Option<i64>,
    filter: &TypeFilter,
    sort: SortKey,
) -> Vec<ListingRow> {
    if let Some(folder_id) = scope {
        if *filter == TypeFilter::Folders {
            return Vec::new();
        }
        let mut rows: Vec<ListingRow> = documents
            .iter()
            .filter(|d| d.is_active() && d.folder_id == Some(folder_id))
            .filter(|d| matches_filter(d, filter))
            .cloned()
            .map(ListingRow::File)
            .collect();
        sort_rows(&mut rows, sort.date_only());
        return rows;
    }

    let mut rows: Vec<ListingRow> = Vec::new();

    if matches!(filter, TypeFilter::All | TypeFilter::Folders) {
        rows.extend(folders.iter().cloned().map(ListingRow::Folder));
    }
    if *filter != TypeFilter::Folders {
        rows.extend(
            documents
                .iter()
                .filter(|d| d.is_active() && d.folder_id.is_none())
                .filter(|d| matches_filter(d, filter))
                .cloned()
                .map(ListingRow::File),
        );
    }

    sort_rows(&mut rows, sort);
    // Folders always display before files; sort_by is stable so the
    // primary ordering survives within each group.
    rows.sort_by_key(|row| !row.is_folder());
    rows
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::models::{DocumentStatus, TypeTag};

    fn stamp(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap()
    }

    fn doc(id: i64, name: &str, file_type: &str, size: u64, day: u32) -> Document {
        Document {
            id,
            filename: format!("stored-{id}"),
            original_name: name.to_string(),
            file_type: file_type.to_string(),
            file_size: size,
            status: DocumentStatus::Uploaded,
            folder_id: None,
            created_at: stamp(day),
            deleted_at: None,
        }
    }

    fn folder(id: i64, name: &str, day: Option<u32>) -> Folder {
        Folder {
            id,
            name: name.to_string(),
            description: None,
            created_at: day.map(stamp),
            deleted_at: None,
        }
    }

    fn sample_docs() -> Vec<Document> {
        vec![
            doc(1, "alpha.pdf", "application/pdf", 300, 3),
            doc(2, "beta.docx", "application/msword", 100, 1),
            doc(3, "gamma.pdf", ".pdf", 200, 2),
        ]
    }

    #[test]
    fn test_sort_latest_and_oldest() {
        let docs = sample_docs();
        let latest = sorted_and_filtered(&docs, &TypeFilter::All, SortKey::Latest);
        assert_eq!(latest.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3, 2]);
        let oldest = sorted_and_filtered(&docs, &TypeFilter::All, SortKey::Oldest);
        assert_eq!(oldest.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_by_size_and_name() {
        let docs = sample_docs();
        let asc = sorted_and_filtered(&docs, &TypeFilter::All, SortKey::SizeAsc);
        assert_eq!(asc.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        let by_name = sorted_and_filtered(&docs, &TypeFilter::All, SortKey::NameAz);
        assert_eq!(by_name[0].original_name, "alpha.pdf");
        assert_eq!(by_name[2].original_name, "gamma.pdf");
    }

    #[test]
    fn test_type_filter_uses_classifier() {
        let docs = sample_docs();
        let pdfs =
            sorted_and_filtered(&docs, &TypeFilter::Tag(TypeTag::Pdf), SortKey::Latest);
        assert_eq!(pdfs.iter().map(|d| d.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_deleted_documents_excluded_everywhere() {
        let mut docs = sample_docs();
        docs[0].status = DocumentStatus::Deleted;
        let visible = sorted_and_filtered(&docs, &TypeFilter::All, SortKey::Latest);
        assert!(visible.iter().all(|d| d.id != 1));
        let recents = recent_files(&docs, &TypeFilter::All);
        assert!(recents.iter().all(|r| r.id != 1));
        let rows = combined_rows(&docs, &[], None, &TypeFilter::All, SortKey::Latest);
        assert!(rows.iter().all(|r| r.id() != 1));
    }

    #[test]
    fn test_recent_files_limit_and_annotation() {
        let docs = vec![
            doc(1, "one.pdf", ".pdf", 512, 1),
            doc(2, "two.pdf", ".pdf", 2_097_152, 2),
            doc(3, "three.pdf", ".pdf", 10, 3),
            doc(4, "four.pdf", ".pdf", 10, 4),
            doc(5, "five.pdf", ".pdf", 10, 5),
        ];
        let recents = recent_files(&docs, &TypeFilter::All);
        assert_eq!(recents.len(), 4);
        assert_eq!(recents[0].id, 5);
        let oldest_shown = recents.iter().find(|r| r.id == 2).unwrap();
        assert_eq!(oldest_shown.size, "2.00 MB");
        assert_eq!(oldest_shown.date, "Jan 2, 2026");
    }

    #[test]
    fn test_recent_files_ignores_folder_filter() {
        let docs = sample_docs();
        let recents = recent_files(&docs, &TypeFilter::Folders);
        assert_eq!(recents.len(), 3);
    }

    #[test]
    fn test_folders_always_precede_files() {
        let docs = sample_docs();
        let folders = vec![folder(10, "zeta", Some(4)), folder(11, "eta", None)];
        for sort in [
            SortKey::Latest,
            SortKey::Oldest,
            SortKey::SizeAsc,
            SortKey::SizeDesc,
            SortKey::NameAz,
        ] {
            let rows = combined_rows(&docs, &folders, None, &TypeFilter::All, sort);
            let first_file = rows.iter().position(|r| !r.is_folder()).unwrap();
            assert!(
                rows[..first_file].iter().all(ListingRow::is_folder),
                "folder after file under {sort:?}"
            );
            assert!(
                rows[first_file..].iter().all(|r| !r.is_folder()),
                "folder after file under {sort:?}"
            );
        }
    }

    #[test]
    fn test_folders_filter_shows_only_folders() {
        let docs = sample_docs();
        let folders = vec![folder(10, "zeta", Some(4))];
        let rows = combined_rows(&docs, &folders, None, &TypeFilter::Folders, SortKey::Latest);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_folder());
    }

    #[test]
    fn test_in_folder_scope() {
        let mut docs = sample_docs();
        docs[0].folder_id = Some(10);
        docs[1].folder_id = Some(10);
        let folders = vec![folder(10, "zeta", Some(4))];

        let rows = combined_rows(&docs, &folders, Some(10), &TypeFilter::All, SortKey::Latest);
        assert_eq!(rows.iter().map(ListingRow::id).collect::<Vec<_>>(), vec![1, 2]);
        // No folder rows inside a folder (flat namespace)
        assert!(rows.iter().all(|r| !r.is_folder()));

        // The Folders filter suppresses files entirely in scope
        let none = combined_rows(&docs, &folders, Some(10), &TypeFilter::Folders, SortKey::Latest);
        assert!(none.is_empty());
    }

    #[test]
    fn test_in_folder_falls_back_to_date_sort() {
        let mut docs = sample_docs();
        for d in &mut docs {
            d.folder_id = Some(10);
        }
        // Stale size selection from the all-items view: in-folder sorting
        // reduces to latest-first.
        let rows = combined_rows(&docs, &[], Some(10), &TypeFilter::All, SortKey::SizeAsc);
        assert_eq!(rows.iter().map(ListingRow::id).collect::<Vec<_>>(), vec![1, 3, 2]);
    }

    #[test]
    fn test_unfoldered_files_only_in_all_items_view() {
        let mut docs = sample_docs();
        docs[0].folder_id = Some(10);
        let rows = combined_rows(&docs, &[], None, &TypeFilter::All, SortKey::Latest);
        assert!(rows.iter().all(|r| r.id() != 1));
    }
}
