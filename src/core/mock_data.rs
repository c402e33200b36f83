// src/core/mock_data.rs

//! The static, read-only catalog behind every screen.
//! Articles, CVEs, breaches and intel reports are compiled into the binary
//! and handed out as `'static` slices; nothing here is ever mutated.

use crate::core::models::{
    Article, Breach, BreachStatus, BreachType, Category, Confidence, IntelReport, PatchStatus,
    Severity, ThreatStats, Vulnerability,
};

const PLACEHOLDER_CONTENT: &str = "This critical vulnerability represents a significant threat to organizations worldwide. Security researchers have identified the flaw in widely-used software components that could allow remote attackers to execute arbitrary code on affected systems.\n\nThe vulnerability stems from improper input validation in the affected software's network protocol handling routines. Attackers can exploit this by sending specially crafted network packets that trigger a buffer overflow condition.\n\nOrganizations using the affected software are at risk of complete system compromise, potentially leading to data theft, system disruption, or deployment of additional malware.";

static ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "Critical Zero-Day Vulnerability Discovered in WebRTC Implementation",
        summary: "A critical remote code execution vulnerability has been discovered in WebRTC implementations affecting millions of users worldwide. The flaw allows attackers to execute arbitrary code through specially crafted media streams.",
        category: Category::Vulnerability,
        severity: Severity::Critical,
        source: "CyberSec Research",
        published_at: "2024-01-15T10:30:00Z",
        tags: &["zero-day", "webrtc", "rce", "browsers"],
        views: 15420,
        author: "Dr. Sarah Chen",
        content: PLACEHOLDER_CONTENT,
    },
    Article {
        id: 2,
        title: "Major Healthcare Provider Suffers Data Breach Affecting 2.3M Patients",
        summary: "MedCorp Healthcare has disclosed a significant data breach that exposed personal health information of 2.3 million patients including medical records, SSNs, and financial data.",
        category: Category::Breach,
        severity: Severity::High,
        source: "HealthSec Daily",
        published_at: "2024-01-15T08:15:00Z",
        tags: &["healthcare", "phi", "data-breach", "ransomware"],
        views: 12890,
        author: "Michael Rodriguez",
        content: PLACEHOLDER_CONTENT,
    },
    Article {
        id: 3,
        title: "New Botnet Targets IoT Devices with Advanced Persistence Mechanisms",
        summary: "Security researchers have identified a sophisticated botnet campaign targeting IoT devices with novel persistence techniques that survive firmware updates and factory resets.",
        category: Category::Malware,
        severity: Severity::High,
        source: "IoT Security Watch",
        published_at: "2024-01-15T06:45:00Z",
        tags: &["botnet", "iot", "malware", "persistence"],
        views: 8750,
        author: "Alex Kim",
        content: PLACEHOLDER_CONTENT,
    },
    Article {
        id: 4,
        title: "Sophisticated Phishing Campaign Targets Fortune 500 Executives",
        summary: "A highly targeted spear-phishing campaign has been detected targeting C-level executives at Fortune 500 companies using deepfake audio and AI-generated content.",
        category: Category::Phishing,
        severity: Severity::Medium,
        source: "Executive Threat Intel",
        published_at: "2024-01-15T05:20:00Z",
        tags: &["spear-phishing", "executives", "deepfake", "ai"],
        views: 6420,
        author: "Jennifer Walsh",
        content: PLACEHOLDER_CONTENT,
    },
    Article {
        id: 5,
        title: "APT29 Evolves Tactics with Living-off-the-Land Techniques",
        summary: "The Russian APT29 group has been observed using advanced living-off-the-land techniques and legitimate administrative tools to evade detection in recent campaigns.",
        category: Category::Intelligence,
        severity: Severity::High,
        source: "Nation State Tracker",
        published_at: "2024-01-14T22:30:00Z",
        tags: &["apt29", "russia", "lotl", "nation-state"],
        views: 11200,
        author: "David Thompson",
        content: PLACEHOLDER_CONTENT,
    },
    Article {
        id: 6,
        title: "Critical Kubernetes Vulnerability Allows Container Escape",
        summary: "A critical vulnerability in Kubernetes allows attackers to escape container boundaries and gain full control over host systems in misconfigured clusters.",
        category: Category::Vulnerability,
        severity: Severity::Critical,
        source: "Cloud Security Today",
        published_at: "2024-01-14T20:15:00Z",
        tags: &["kubernetes", "container-escape", "cloud", "cve"],
        views: 9850,
        author: "Lisa Park",
        content: PLACEHOLDER_CONTENT,
    },
    Article {
        id: 7,
        title: "Financial Services Firm Pays $4.2M Ransomware Demand",
        summary: "A major financial services company has reportedly paid $4.2 million to ransomware operators after failing to contain a network-wide encryption attack.",
        category: Category::Breach,
        severity: Severity::High,
        source: "Financial Cyber News",
        published_at: "2024-01-14T18:45:00Z",
        tags: &["ransomware", "financial", "payment", "incident"],
        views: 13670,
        author: "Robert Chen",
        content: PLACEHOLDER_CONTENT,
    },
    Article {
        id: 8,
        title: "Supply Chain Attack Targets Software Build Pipelines",
        summary: "Researchers have uncovered a sophisticated supply chain attack that compromises software build pipelines to inject malicious code into popular open-source packages.",
        category: Category::Intelligence,
        severity: Severity::Medium,
        source: "Supply Chain Security",
        published_at: "2024-01-14T16:20:00Z",
        tags: &["supply-chain", "build-pipeline", "open-source", "injection"],
        views: 7890,
        author: "Maria Garcia",
        content: PLACEHOLDER_CONTENT,
    },
];

static VULNERABILITIES: &[Vulnerability] = &[
    Vulnerability {
        id: "1",
        cve: "CVE-2024-0001",
        title: "Remote Code Execution in WebRTC Implementation",
        description: "A critical vulnerability in WebRTC allows remote attackers to execute arbitrary code through specially crafted media streams.",
        severity: Severity::Critical,
        cvss_score: 9.8,
        vendor: "Google",
        product: "Chrome, WebRTC",
        published_date: "2024-01-15",
        last_modified: "2024-01-15",
        patch_status: PatchStatus::Available,
        references: &["https://cve.mitre.org/cgi-bin/cvename.cgi?name=CVE-2024-0001"],
    },
    Vulnerability {
        id: "2",
        cve: "CVE-2024-0002",
        title: "SQL Injection in Healthcare Management System",
        description: "Multiple SQL injection vulnerabilities in popular healthcare management software could allow unauthorized access to patient data.",
        severity: Severity::High,
        cvss_score: 8.1,
        vendor: "MedSoft Inc.",
        product: "HealthManager Pro",
        published_date: "2024-01-14",
        last_modified: "2024-01-15",
        patch_status: PatchStatus::Pending,
        references: &["https://cve.mitre.org/cgi-bin/cvename.cgi?name=CVE-2024-0002"],
    },
    Vulnerability {
        id: "3",
        cve: "CVE-2024-0003",
        title: "Buffer Overflow in Network Appliance Firmware",
        description: "A buffer overflow vulnerability in network appliance firmware could allow attackers to gain administrative access.",
        severity: Severity::High,
        cvss_score: 7.5,
        vendor: "NetworkTech",
        product: "SecureGateway 3000",
        published_date: "2024-01-13",
        last_modified: "2024-01-14",
        patch_status: PatchStatus::Available,
        references: &["https://cve.mitre.org/cgi-bin/cvename.cgi?name=CVE-2024-0003"],
    },
    Vulnerability {
        id: "4",
        cve: "CVE-2024-0004",
        title: "Cross-Site Scripting in Web Framework",
        description: "Persistent XSS vulnerability in popular web framework could allow attackers to steal user credentials.",
        severity: Severity::Medium,
        cvss_score: 6.1,
        vendor: "WebFramework Corp",
        product: "QuickWeb 2.0",
        published_date: "2024-01-12",
        last_modified: "2024-01-13",
        patch_status: PatchStatus::Available,
        references: &["https://cve.mitre.org/cgi-bin/cvename.cgi?name=CVE-2024-0004"],
    },
    Vulnerability {
        id: "5",
        cve: "CVE-2024-0005",
        title: "Privilege Escalation in Mobile OS",
        description: "Local privilege escalation vulnerability in mobile operating system allows apps to gain system-level access.",
        severity: Severity::High,
        cvss_score: 7.8,
        vendor: "MobileTech",
        product: "MobileOS 15.2",
        published_date: "2024-01-11",
        last_modified: "2024-01-12",
        patch_status: PatchStatus::None,
        references: &["https://cve.mitre.org/cgi-bin/cvename.cgi?name=CVE-2024-0005"],
    },
];

static BREACHES: &[Breach] = &[
    Breach {
        id: "1",
        organization: "MedCorp Healthcare",
        sector: "Healthcare",
        kind: BreachType::Ransomware,
        records_affected: 2_300_000,
        description: "Major healthcare provider suffered ransomware attack exposing patient medical records, social security numbers, and financial information.",
        date_discovered: "2024-01-10",
        date_reported: "2024-01-15",
        data_types: &["PHI", "SSN", "Financial", "Medical Records"],
        status: BreachStatus::Contained,
        impact: Severity::Critical,
    },
    Breach {
        id: "2",
        organization: "TechCorp International",
        sector: "Technology",
        kind: BreachType::Phishing,
        records_affected: 850_000,
        description: "Sophisticated phishing campaign targeted employees, leading to unauthorized access to customer database and internal systems.",
        date_discovered: "2024-01-08",
        date_reported: "2024-01-12",
        data_types: &["Email", "Names", "Phone Numbers", "Addresses"],
        status: BreachStatus::Resolved,
        impact: Severity::High,
    },
    Breach {
        id: "3",
        organization: "Metro Bank",
        sector: "Financial",
        kind: BreachType::Malware,
        records_affected: 1_200_000,
        description: "Banking malware infiltrated internal networks, compromising customer account information and transaction data.",
        date_discovered: "2024-01-05",
        date_reported: "2024-01-09",
        data_types: &["Account Numbers", "Transaction History", "PII", "Financial Data"],
        status: BreachStatus::Ongoing,
        impact: Severity::Critical,
    },
    Breach {
        id: "4",
        organization: "EduTech Solutions",
        sector: "Education",
        kind: BreachType::Insider,
        records_affected: 500_000,
        description: "Insider threat resulted in unauthorized access to student records and faculty information across multiple institutions.",
        date_discovered: "2024-01-03",
        date_reported: "2024-01-07",
        data_types: &["Student Records", "Faculty Info", "Academic Data", "Contact Info"],
        status: BreachStatus::Resolved,
        impact: Severity::Medium,
    },
    Breach {
        id: "5",
        organization: "RetailGiant Corp",
        sector: "Retail",
        kind: BreachType::Physical,
        records_affected: 300_000,
        description: "Physical breach of data center led to theft of backup drives containing customer payment information.",
        date_discovered: "2024-01-01",
        date_reported: "2024-01-05",
        data_types: &["Payment Cards", "Customer Info", "Purchase History"],
        status: BreachStatus::Contained,
        impact: Severity::High,
    },
];

static INTEL_REPORTS: &[IntelReport] = &[
    IntelReport {
        id: "1",
        title: "APT29 Targeting Cloud Infrastructure with Living-off-the-Land Techniques",
        description: "Russian APT29 group observed using legitimate administrative tools and cloud services to maintain persistence and evade detection in government and enterprise networks.",
        threat_actor: "APT29 (Cozy Bear)",
        campaign: "CloudStrike 2024",
        targets: &["Government", "Defense Contractors", "Think Tanks"],
        geography: &["United States", "Europe", "Canada"],
        tactics: &["Living off the Land", "Cloud Exploitation", "Supply Chain"],
        severity: Severity::High,
        confidence: Confidence::High,
        published_date: "2024-01-15",
        last_updated: "2024-01-15",
        iocs: &["185.220.100.240", "cloudservice-update.com", "SHA256:a1b2c3d4..."],
        mitre_attack: &["T1078", "T1566", "T1059"],
    },
    IntelReport {
        id: "2",
        title: "Lazarus Group Cryptocurrency Exchange Targeting Campaign",
        description: "North Korean Lazarus Group continues sophisticated attacks against cryptocurrency exchanges using zero-day exploits and social engineering tactics.",
        threat_actor: "Lazarus Group",
        campaign: "CryptoHeist 2024",
        targets: &["Cryptocurrency Exchanges", "DeFi Platforms", "Wallet Providers"],
        geography: &["South Korea", "Japan", "United States"],
        tactics: &["Zero-day Exploits", "Social Engineering", "Supply Chain"],
        severity: Severity::Critical,
        confidence: Confidence::High,
        published_date: "2024-01-14",
        last_updated: "2024-01-15",
        iocs: &["203.248.252.2", "crypto-update.net", "SHA256:e5f6g7h8..."],
        mitre_attack: &["T1566.001", "T1204", "T1055"],
    },
    IntelReport {
        id: "3",
        title: "Chinese APT40 Maritime Industry Espionage Campaign",
        description: "APT40 group targeting maritime industries and port authorities to gather intelligence on shipping routes and cargo manifests.",
        threat_actor: "APT40 (Leviathan)",
        campaign: "DeepWater",
        targets: &["Maritime Companies", "Port Authorities", "Shipping Lines"],
        geography: &["Southeast Asia", "Australia", "Europe"],
        tactics: &["Spear Phishing", "Watering Hole", "Credential Harvesting"],
        severity: Severity::Medium,
        confidence: Confidence::Medium,
        published_date: "2024-01-13",
        last_updated: "2024-01-14",
        iocs: &["192.168.1.100", "maritime-portal.org", "SHA256:i9j0k1l2..."],
        mitre_attack: &["T1566.002", "T1189", "T1003"],
    },
    IntelReport {
        id: "4",
        title: "Scattered Spider Targeting Cloud Service Providers",
        description: "Scattered Spider cybercriminal group using SIM swapping and social engineering to compromise cloud service provider accounts.",
        threat_actor: "Scattered Spider",
        campaign: "CloudBreach 2024",
        targets: &["Cloud Providers", "Telecommunications", "IT Services"],
        geography: &["United States", "United Kingdom", "Canada"],
        tactics: &["SIM Swapping", "Social Engineering", "MFA Bypass"],
        severity: Severity::High,
        confidence: Confidence::High,
        published_date: "2024-01-12",
        last_updated: "2024-01-13",
        iocs: &["172.16.0.1", "cloud-support.net", "SHA256:m3n4o5p6..."],
        mitre_attack: &["T1111", "T1621", "T1556"],
    },
];

static STATS: ThreatStats = ThreatStats {
    threats_monitored: "24/7",
    sources: "500+",
    daily_updates: "10,247",
    active_campaigns: "156",
};

static TRENDING_TAGS: &[&str] = &[
    "zero-day", "ransomware", "apt", "supply-chain", "iot",
    "cloud-security", "ai-threats", "nation-state", "phishing", "malware",
];

/// Read-only handle over the compiled-in catalog.
///
/// Constructed once at startup and shared by reference with every screen.
#[derive(Debug, Clone, Copy)]
pub struct MockDataStore {
    pub articles: &'static [Article],
    pub vulnerabilities: &'static [Vulnerability],
    pub breaches: &'static [Breach],
    pub intel_reports: &'static [IntelReport],
    pub stats: &'static ThreatStats,
    pub trending_tags: &'static [&'static str],
}

impl MockDataStore {
    pub fn load() -> Self {
        Self {
            articles: ARTICLES,
            vulnerabilities: VULNERABILITIES,
            breaches: BREACHES,
            intel_reports: INTEL_REPORTS,
            stats: &STATS,
            trending_tags: TRENDING_TAGS,
        }
    }

    /// Looks up an article by its route parameter.
    ///
    /// Anything that is not a decimal id, or an id that is not in the
    /// catalog, yields `None`.
    pub fn article(&self, id: &str) -> Option<&'static Article> {
        let id: u32 = id.trim().parse().ok()?;
        self.articles.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identifiers_are_unique_per_collection() {
        let store = MockDataStore::load();
        let ids: HashSet<u32> = store.articles.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), store.articles.len());
        let ids: HashSet<&str> = store.vulnerabilities.iter().map(|v| v.id).collect();
        assert_eq!(ids.len(), store.vulnerabilities.len());
        let ids: HashSet<&str> = store.breaches.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), store.breaches.len());
        let ids: HashSet<&str> = store.intel_reports.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), store.intel_reports.len());
    }

    #[test]
    fn article_lookup_by_route_parameter() {
        let store = MockDataStore::load();
        assert_eq!(store.article("5").map(|a| a.id), Some(5));
        assert!(store.article("42").is_none());
        assert!(store.article("abc").is_none());
        assert!(store.article("").is_none());
    }
}
