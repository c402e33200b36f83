// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

// --- Classification Enums ---

/// Threat level shared by articles, vulnerabilities, breach impact and intel reports.
///
/// The wire/option names are lowercase (`"critical"`, `"high"`, ...), matching
/// the values used by the filter controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Info,
}

impl Severity {
    /// Fixed rank used by every severity/impact sort: `critical=4` down to `info=0`.
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
            Severity::Info => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Vulnerability,
    Breach,
    Malware,
    Phishing,
    Intelligence,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Vulnerability => "Vulnerability",
            Category::Breach => "Breach",
            Category::Malware => "Malware",
            Category::Phishing => "Phishing",
            Category::Intelligence => "Intelligence",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PatchStatus {
    Available,
    Pending,
    None,
}

impl PatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            PatchStatus::Available => "Patch Available",
            PatchStatus::Pending => "Patch Pending",
            PatchStatus::None => "No Patch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BreachType {
    Ransomware,
    Insider,
    Phishing,
    Malware,
    Physical,
}

impl BreachType {
    pub fn label(self) -> &'static str {
        match self {
            BreachType::Ransomware => "Ransomware",
            BreachType::Insider => "Insider",
            BreachType::Phishing => "Phishing",
            BreachType::Malware => "Malware",
            BreachType::Physical => "Physical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BreachStatus {
    Ongoing,
    Contained,
    Resolved,
}

impl BreachStatus {
    pub fn label(self) -> &'static str {
        match self {
            BreachStatus::Ongoing => "Ongoing",
            BreachStatus::Contained => "Contained",
            BreachStatus::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Rank table analogous to `Severity::rank`: `high=2, medium=1, low=0`.
    pub fn rank(self) -> u8 {
        match self {
            Confidence::High => 2,
            Confidence::Medium => 1,
            Confidence::Low => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }
}

// --- Catalog Records ---
// All records are `'static` fixture data: they are built once into the binary
// and never mutated.

/// A news article shown on the home and news screens.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub source: &'static str,
    /// RFC 3339 timestamp.
    pub published_at: &'static str,
    pub tags: &'static [&'static str],
    pub views: u64,
    pub author: &'static str,
    pub content: &'static str,
}

/// A CVE entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Vulnerability {
    pub id: &'static str,
    pub cve: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
    pub cvss_score: f32,
    pub vendor: &'static str,
    pub product: &'static str,
    pub published_date: &'static str,
    pub last_modified: &'static str,
    pub patch_status: PatchStatus,
    pub references: &'static [&'static str],
}

/// A reported data breach.
#[derive(Debug, Clone, PartialEq)]
pub struct Breach {
    pub id: &'static str,
    pub organization: &'static str,
    pub sector: &'static str,
    pub kind: BreachType,
    pub records_affected: u64,
    pub description: &'static str,
    pub date_discovered: &'static str,
    pub date_reported: &'static str,
    pub data_types: &'static [&'static str],
    pub status: BreachStatus,
    pub impact: Severity,
}

/// A threat-intelligence report about an actor and campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct IntelReport {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub threat_actor: &'static str,
    pub campaign: &'static str,
    pub targets: &'static [&'static str],
    pub geography: &'static [&'static str],
    pub tactics: &'static [&'static str],
    pub severity: Severity,
    pub confidence: Confidence,
    pub published_date: &'static str,
    pub last_updated: &'static str,
    pub iocs: &'static [&'static str],
    pub mitre_attack: &'static [&'static str],
}

/// Headline figures for the home dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreatStats {
    pub threats_monitored: &'static str,
    pub sources: &'static str,
    pub daily_updates: &'static str,
    pub active_campaigns: &'static str,
}

// --- Session ---

/// The authenticated user. Persisted as `{"phoneNumber": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "phoneNumber")]
    pub identifier: String,
}

impl Session {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self { identifier: identifier.into() }
    }
}
