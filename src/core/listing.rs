// src/core/listing.rs

//! Per-screen filter and sort definitions for the four catalog listings.

use crate::core::filter::{Record, Selection, descending, distinct, newest_first};
use crate::core::models::{
    Article, Breach, BreachStatus, BreachType, Category, Confidence, IntelReport, PatchStatus,
    Severity, Vulnerability,
};
use std::cmp::Ordering;
use strum::{EnumIter, EnumString, IntoEnumIterator};

/// One filter control as shown in a screen's filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    pub name: &'static str,
    pub value: String,
}

/// What a list screen needs beyond the engine itself: titles, the filter
/// bar, and the sort menu.
pub trait Listing: Record + Sized + 'static {
    const TITLE: &'static str;
    const SEARCH_HINT: &'static str;

    fn controls(filters: &Self::Filters) -> Vec<FilterControl>;

    /// Advances control `index` to its next value. Data-driven option lists
    /// (sector, actor) are computed from `records`.
    fn cycle_control(filters: &mut Self::Filters, index: usize, records: &[Self]);

    /// Sort options in menu order with their display labels.
    fn sort_options() -> Vec<(Self::SortKey, &'static str)>;

    fn sort_label(key: Option<Self::SortKey>) -> &'static str {
        key.and_then(|k| {
            Self::sort_options()
                .into_iter()
                .find(|(option, _)| *option == k)
                .map(|(_, label)| label)
        })
        .unwrap_or("Unsorted")
    }

    /// The sort after `current` in menu order, wrapping around.
    fn next_sort(current: Option<Self::SortKey>) -> Option<Self::SortKey> {
        let options = Self::sort_options();
        let next = current
            .and_then(|k| options.iter().position(|(option, _)| *option == k))
            .map(|i| (i + 1) % options.len())
            .unwrap_or(0);
        options.get(next).map(|(key, _)| *key)
    }
}

fn selection_label<T>(selection: &Selection<T>, all: &str, label: impl Fn(&T) -> String) -> String {
    match selection {
        Selection::All => all.to_string(),
        Selection::Only(value) => label(value),
    }
}

const LISTED_SEVERITIES: [Severity; 4] =
    [Severity::Critical, Severity::High, Severity::Medium, Severity::Low];

// --- News ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsFilters {
    pub category: Selection<Category>,
    pub severity: Selection<Severity>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString)]
pub enum ArticleSort {
    #[default]
    #[strum(serialize = "date")]
    Date,
    #[strum(serialize = "views")]
    Views,
    #[strum(serialize = "severity")]
    Severity,
}

impl Record for Article {
    type Filters = NewsFilters;
    type SortKey = ArticleSort;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.summary];
        fields.extend(self.tags.iter().copied());
        fields
    }

    fn passes(&self, filters: &NewsFilters) -> bool {
        filters.category.admits(&self.category) && filters.severity.admits(&self.severity)
    }

    fn compare(&self, other: &Self, key: ArticleSort) -> Ordering {
        match key {
            ArticleSort::Date => newest_first(self.published_at, other.published_at),
            ArticleSort::Views => descending(self.views, other.views),
            ArticleSort::Severity => descending(self.severity.rank(), other.severity.rank()),
        }
    }
}

impl Listing for Article {
    const TITLE: &'static str = "Threat News";
    const SEARCH_HINT: &'static str = "Search articles, tags, IOCs...";

    fn controls(filters: &NewsFilters) -> Vec<FilterControl> {
        vec![
            FilterControl {
                name: "Category",
                value: selection_label(&filters.category, "All Categories", |c| c.label().into()),
            },
            FilterControl {
                name: "Severity",
                value: selection_label(&filters.severity, "All Severities", |s| s.label().into()),
            },
        ]
    }

    fn cycle_control(filters: &mut NewsFilters, index: usize, _records: &[Self]) {
        match index {
            0 => {
                let options: Vec<Category> = Category::iter().collect();
                filters.category = filters.category.cycle(&options);
            }
            1 => {
                let options: Vec<Severity> = Severity::iter().collect();
                filters.severity = filters.severity.cycle(&options);
            }
            _ => {}
        }
    }

    fn sort_options() -> Vec<(ArticleSort, &'static str)> {
        ArticleSort::iter()
            .map(|k| {
                let label = match k {
                    ArticleSort::Date => "Latest",
                    ArticleSort::Views => "Most Viewed",
                    ArticleSort::Severity => "Severity",
                };
                (k, label)
            })
            .collect()
    }
}

// --- Vulnerabilities ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VulnerabilityFilters {
    pub severity: Selection<Severity>,
    pub patch_status: Selection<PatchStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString)]
pub enum VulnerabilitySort {
    #[default]
    #[strum(serialize = "publishedDate")]
    PublishedDate,
    #[strum(serialize = "cvssScore")]
    CvssScore,
    #[strum(serialize = "severity")]
    Severity,
}

impl Record for Vulnerability {
    type Filters = VulnerabilityFilters;
    type SortKey = VulnerabilitySort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.cve, self.title, self.vendor, self.product]
    }

    fn passes(&self, filters: &VulnerabilityFilters) -> bool {
        filters.severity.admits(&self.severity) && filters.patch_status.admits(&self.patch_status)
    }

    fn compare(&self, other: &Self, key: VulnerabilitySort) -> Ordering {
        match key {
            VulnerabilitySort::PublishedDate => newest_first(self.published_date, other.published_date),
            VulnerabilitySort::CvssScore => other.cvss_score.total_cmp(&self.cvss_score),
            VulnerabilitySort::Severity => descending(self.severity.rank(), other.severity.rank()),
        }
    }
}

impl Listing for Vulnerability {
    const TITLE: &'static str = "Vulnerability Database";
    const SEARCH_HINT: &'static str = "Search CVE ID, vendor, product...";

    fn controls(filters: &VulnerabilityFilters) -> Vec<FilterControl> {
        vec![
            FilterControl {
                name: "Severity",
                value: selection_label(&filters.severity, "All Severities", |s| s.label().into()),
            },
            FilterControl {
                name: "Patch",
                value: selection_label(&filters.patch_status, "All Status", |p| p.label().into()),
            },
        ]
    }

    fn cycle_control(filters: &mut VulnerabilityFilters, index: usize, _records: &[Self]) {
        match index {
            0 => filters.severity = filters.severity.cycle(&LISTED_SEVERITIES),
            1 => {
                let options: Vec<PatchStatus> = PatchStatus::iter().collect();
                filters.patch_status = filters.patch_status.cycle(&options);
            }
            _ => {}
        }
    }

    fn sort_options() -> Vec<(VulnerabilitySort, &'static str)> {
        vec![
            (VulnerabilitySort::PublishedDate, "Latest"),
            (VulnerabilitySort::CvssScore, "CVSS Score"),
            (VulnerabilitySort::Severity, "Severity"),
        ]
    }
}

// --- Breaches ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BreachFilters {
    pub sector: Selection<&'static str>,
    pub kind: Selection<BreachType>,
    pub status: Selection<BreachStatus>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString)]
pub enum BreachSort {
    #[default]
    #[strum(serialize = "dateReported")]
    DateReported,
    #[strum(serialize = "recordsAffected")]
    RecordsAffected,
    #[strum(serialize = "impact")]
    Impact,
}

impl Record for Breach {
    type Filters = BreachFilters;
    type SortKey = BreachSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.organization, self.description, self.sector]
    }

    fn passes(&self, filters: &BreachFilters) -> bool {
        filters.sector.admits(&self.sector)
            && filters.kind.admits(&self.kind)
            && filters.status.admits(&self.status)
    }

    fn compare(&self, other: &Self, key: BreachSort) -> Ordering {
        match key {
            BreachSort::DateReported => newest_first(self.date_reported, other.date_reported),
            BreachSort::RecordsAffected => descending(self.records_affected, other.records_affected),
            BreachSort::Impact => descending(self.impact.rank(), other.impact.rank()),
        }
    }
}

impl Listing for Breach {
    const TITLE: &'static str = "Data Breaches";
    const SEARCH_HINT: &'static str = "Search organizations, sectors...";

    fn controls(filters: &BreachFilters) -> Vec<FilterControl> {
        vec![
            FilterControl {
                name: "Sector",
                value: selection_label(&filters.sector, "All Sectors", |s| s.to_string()),
            },
            FilterControl {
                name: "Type",
                value: selection_label(&filters.kind, "All Types", |t| t.label().into()),
            },
            FilterControl {
                name: "Status",
                value: selection_label(&filters.status, "All Status", |s| s.label().into()),
            },
        ]
    }

    fn cycle_control(filters: &mut BreachFilters, index: usize, records: &[Self]) {
        match index {
            0 => {
                let sectors = distinct(records.iter().map(|b| b.sector));
                filters.sector = filters.sector.cycle(&sectors);
            }
            1 => {
                let options: Vec<BreachType> = BreachType::iter().collect();
                filters.kind = filters.kind.cycle(&options);
            }
            2 => {
                let options: Vec<BreachStatus> = BreachStatus::iter().collect();
                filters.status = filters.status.cycle(&options);
            }
            _ => {}
        }
    }

    fn sort_options() -> Vec<(BreachSort, &'static str)> {
        vec![
            (BreachSort::DateReported, "Latest"),
            (BreachSort::RecordsAffected, "Records"),
            (BreachSort::Impact, "Impact"),
        ]
    }
}

// --- Threat Intelligence ---

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntelFilters {
    pub actor: Selection<&'static str>,
    pub severity: Selection<Severity>,
    pub confidence: Selection<Confidence>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString)]
pub enum IntelSort {
    #[default]
    #[strum(serialize = "publishedDate")]
    PublishedDate,
    #[strum(serialize = "severity")]
    Severity,
    #[strum(serialize = "confidence")]
    Confidence,
}

impl Record for IntelReport {
    type Filters = IntelFilters;
    type SortKey = IntelSort;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.threat_actor, self.campaign];
        fields.extend(self.targets.iter().copied());
        fields
    }

    fn passes(&self, filters: &IntelFilters) -> bool {
        filters.actor.admits(&self.threat_actor)
            && filters.severity.admits(&self.severity)
            && filters.confidence.admits(&self.confidence)
    }

    fn compare(&self, other: &Self, key: IntelSort) -> Ordering {
        match key {
            IntelSort::PublishedDate => newest_first(self.published_date, other.published_date),
            IntelSort::Severity => descending(self.severity.rank(), other.severity.rank()),
            IntelSort::Confidence => descending(self.confidence.rank(), other.confidence.rank()),
        }
    }
}

impl Listing for IntelReport {
    const TITLE: &'static str = "Threat Intelligence";
    const SEARCH_HINT: &'static str = "Search threat actors, campaigns...";

    fn controls(filters: &IntelFilters) -> Vec<FilterControl> {
        vec![
            FilterControl {
                name: "Actor",
                value: selection_label(&filters.actor, "All Threat Actors", |a| a.to_string()),
            },
            FilterControl {
                name: "Severity",
                value: selection_label(&filters.severity, "All Severities", |s| s.label().into()),
            },
            FilterControl {
                name: "Confidence",
                value: selection_label(&filters.confidence, "All Confidence", |c| c.label().into()),
            },
        ]
    }

    fn cycle_control(filters: &mut IntelFilters, index: usize, records: &[Self]) {
        match index {
            0 => {
                let actors = distinct(records.iter().map(|i| i.threat_actor));
                filters.actor = filters.actor.cycle(&actors);
            }
            1 => filters.severity = filters.severity.cycle(&LISTED_SEVERITIES),
            2 => {
                let options: Vec<Confidence> = Confidence::iter().collect();
                filters.confidence = filters.confidence.cycle(&options);
            }
            _ => {}
        }
    }

    fn sort_options() -> Vec<(IntelSort, &'static str)> {
        vec![
            (IntelSort::PublishedDate, "Latest"),
            (IntelSort::Severity, "Severity"),
            (IntelSort::Confidence, "Confidence"),
        ]
    }
}
