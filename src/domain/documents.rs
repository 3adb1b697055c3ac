// SPDX-License-Identifier: MPL-2.0
//! Shipment documents and the category tabs layered over the type filter.

use super::day;
use super::search::{Categorized, Searchable};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Cmr,
    DamageReport,
    LoadingDocument,
    Customs,
    Photos,
}

impl DocumentType {
    pub const ALL: [DocumentType; 5] = [
        DocumentType::Cmr,
        DocumentType::DamageReport,
        DocumentType::LoadingDocument,
        DocumentType::Customs,
        DocumentType::Photos,
    ];

    /// Canonical English label, also used by the Reports category rule.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DocumentType::Cmr => "CMR",
            DocumentType::DamageReport => "Damage Report",
            DocumentType::LoadingDocument => "Loading Document",
            DocumentType::Customs => "Customs",
            DocumentType::Photos => "Photos",
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            DocumentType::Cmr => "document-type-cmr",
            DocumentType::DamageReport => "document-type-damage-report",
            DocumentType::LoadingDocument => "document-type-loading",
            DocumentType::Customs => "document-type-customs",
            DocumentType::Photos => "document-type-photos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationStatus {
    Verified,
    Pending,
    UnderReview,
}

impl VerificationStatus {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            VerificationStatus::Verified => "document-status-verified",
            VerificationStatus::Pending => "document-status-pending",
            VerificationStatus::UnderReview => "document-status-under-review",
        }
    }
}

/// Category tab shown above the documents table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DocumentCategory {
    #[default]
    All,
    Cmr,
    Customs,
    Reports,
}

impl DocumentCategory {
    pub const ALL: [DocumentCategory; 4] = [
        DocumentCategory::All,
        DocumentCategory::Cmr,
        DocumentCategory::Customs,
        DocumentCategory::Reports,
    ];

    /// Returns `true` if a document of `kind` belongs to this tab.
    #[must_use]
    pub fn includes(self, kind: DocumentType) -> bool {
        match self {
            DocumentCategory::All => true,
            DocumentCategory::Cmr => kind == DocumentType::Cmr,
            DocumentCategory::Customs => kind == DocumentType::Customs,
            DocumentCategory::Reports => {
                let label = kind.label();
                label.contains("Report") || label.contains("Loading")
            }
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            DocumentCategory::All => "documents-tab-all",
            DocumentCategory::Cmr => "documents-tab-cmr",
            DocumentCategory::Customs => "documents-tab-customs",
            DocumentCategory::Reports => "documents-tab-reports",
        }
    }

    /// Blurb shown above the table for the narrower tabs.
    #[must_use]
    pub fn description_key(self) -> Option<&'static str> {
        match self {
            DocumentCategory::All => None,
            DocumentCategory::Cmr => Some("documents-tab-cmr-description"),
            DocumentCategory::Customs => Some("documents-tab-customs-description"),
            DocumentCategory::Reports => Some("documents-tab-reports-description"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: DocumentType,
    pub order_number: String,
    pub upload_date: NaiveDate,
    pub size: String,
    pub status: VerificationStatus,
    pub description: String,
}

impl Searchable for Document {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.order_number]
    }
}

impl Categorized for Document {
    type Category = DocumentType;

    fn category(&self) -> DocumentType {
        self.kind
    }
}

#[allow(clippy::too_many_arguments)]
fn document(
    id: &str,
    name: &str,
    kind: DocumentType,
    order_number: &str,
    upload_date: NaiveDate,
    size: &str,
    status: VerificationStatus,
    description: &str,
) -> Document {
    Document {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        order_number: order_number.to_string(),
        upload_date,
        size: size.to_string(),
        status,
        description: description.to_string(),
    }
}

/// Sample document store.
#[must_use]
pub fn sample_documents() -> Vec<Document> {
    vec![
        document(
            "DOC-001",
            "CMR-ORD-2024-001.pdf",
            DocumentType::Cmr,
            "ORD-2024-001",
            day(2024, 1, 15),
            "2.4 MB",
            VerificationStatus::Verified,
            "Transport document for industrial bearings shipment",
        ),
        document(
            "DOC-002",
            "Damage-Report-001.pdf",
            DocumentType::DamageReport,
            "ORD-2024-003",
            day(2024, 1, 14),
            "1.8 MB",
            VerificationStatus::UnderReview,
            "Minor packaging damage reported during transit",
        ),
        document(
            "DOC-003",
            "Loading-Manifest-ORD-001.pdf",
            DocumentType::LoadingDocument,
            "ORD-2024-001",
            day(2024, 1, 13),
            "890 KB",
            VerificationStatus::Verified,
            "Complete loading manifest and checklist",
        ),
        document(
            "DOC-004",
            "Customs-Declaration-002.pdf",
            DocumentType::Customs,
            "ORD-2024-002",
            day(2024, 1, 12),
            "1.2 MB",
            VerificationStatus::Pending,
            "Customs clearance documentation for electronics",
        ),
        document(
            "DOC-005",
            "Product-Photos-SKU-001.zip",
            DocumentType::Photos,
            "ORD-2024-001",
            day(2024, 1, 11),
            "15.7 MB",
            VerificationStatus::Verified,
            "Product condition photos before shipping",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{RowFilter, Selection};

    fn ids(rows: &[&Document]) -> Vec<String> {
        rows.iter().map(|row| row.id.clone()).collect()
    }

    #[test]
    fn reports_tab_covers_damage_and_loading() {
        let included: Vec<_> = DocumentType::ALL
            .into_iter()
            .filter(|kind| DocumentCategory::Reports.includes(*kind))
            .collect();
        assert_eq!(
            included,
            vec![DocumentType::DamageReport, DocumentType::LoadingDocument]
        );
    }

    #[test]
    fn all_tab_includes_every_type() {
        assert!(DocumentType::ALL
            .into_iter()
            .all(|kind| DocumentCategory::All.includes(kind)));
    }

    #[test]
    fn search_matches_order_number() {
        let documents = sample_documents();
        let filter = RowFilter {
            query: "ord-2024-001".into(),
            selection: Selection::All,
        };
        assert_eq!(
            ids(&filter.apply(&documents)),
            vec!["DOC-001", "DOC-003", "DOC-005"]
        );
    }

    #[test]
    fn search_ignores_description() {
        let documents = sample_documents();
        let filter = RowFilter {
            query: "bearings".into(),
            selection: Selection::All,
        };
        assert!(filter.apply(&documents).is_empty());
    }

    #[test]
    fn type_filter_combines_with_search() {
        let documents = sample_documents();
        let filter = RowFilter {
            query: "ORD-2024-001".into(),
            selection: Selection::Only(DocumentType::Photos),
        };
        assert_eq!(ids(&filter.apply(&documents)), vec!["DOC-005"]);
    }
}
