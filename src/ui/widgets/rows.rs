// src/ui/widgets/rows.rs

use crate::core::models::{Article, Breach, BreachStatus, Confidence, IntelReport, PatchStatus, Severity, Vulnerability};
use crate::core::presentation::{format_count, format_date, format_thousands, time_ago};
use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    text::{Line, Span},
    widgets::ListItem,
};

pub fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Severity::High => Style::default().fg(Color::LightRed),
        Severity::Medium => Style::default().fg(Color::Yellow),
        Severity::Low => Style::default().fg(Color::Green),
        Severity::Info => Style::default().fg(Color::Blue),
    }
}

pub fn severity_badge(severity: Severity) -> Span<'static> {
    Span::styled(format!("[{}]", severity.label().to_uppercase()), severity_style(severity))
}

fn patch_style(status: PatchStatus) -> Style {
    match status {
        PatchStatus::Available => Style::default().fg(Color::Green),
        PatchStatus::Pending => Style::default().fg(Color::Yellow),
        PatchStatus::None => Style::default().fg(Color::Red),
    }
}

fn breach_status_style(status: BreachStatus) -> Style {
    match status {
        BreachStatus::Ongoing => Style::default().fg(Color::Red),
        BreachStatus::Contained => Style::default().fg(Color::Yellow),
        BreachStatus::Resolved => Style::default().fg(Color::Green),
    }
}

fn confidence_style(confidence: Confidence) -> Style {
    match confidence {
        Confidence::High => Style::default().fg(Color::Green),
        Confidence::Medium => Style::default().fg(Color::Yellow),
        Confidence::Low => Style::default().fg(Color::Red),
    }
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(text.yellow().bold())
}

fn joined(values: &[&str]) -> String {
    values.join(", ")
}

/// How a record shows up in a list and in the preview pane next to it.
pub trait RowView {
    fn row(&self, now: DateTime<Utc>) -> ListItem<'static>;
    fn preview(&self, now: DateTime<Utc>) -> Vec<Line<'static>>;
}

impl RowView for Article {
    fn row(&self, now: DateTime<Utc>) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            severity_badge(self.severity),
            Span::raw(" "),
            muted(format!("[{}] ", self.category.label())),
            Span::raw(self.title),
            muted(format!("  {}", time_ago(self.published_at, now))),
        ]))
    }

    fn preview(&self, now: DateTime<Utc>) -> Vec<Line<'static>> {
        let tags: Vec<String> = self.tags.iter().take(3).map(|t| format!("#{}", t)).collect();
        vec![
            Line::from(self.title.bold()),
            Line::from(vec![
                severity_badge(self.severity),
                Span::raw(" "),
                muted(time_ago(self.published_at, now)),
            ]),
            Line::from(""),
            Line::from(self.summary),
            Line::from(""),
            Line::from(Span::styled(tags.join(" "), Style::default().fg(Color::Cyan))),
            Line::from(muted(format!(
                "{} · {} views",
                self.source,
                format_thousands(self.views)
            ))),
        ]
    }
}

impl RowView for Vulnerability {
    fn row(&self, _now: DateTime<Utc>) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            severity_badge(self.severity),
            Span::raw(" "),
            Span::styled(self.cve, Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {} ", self.title)),
            Span::styled(format!("CVSS {:.1}", self.cvss_score), severity_style(self.severity)),
        ]))
    }

    fn preview(&self, _now: DateTime<Utc>) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(self.cve.cyan().bold()),
            Line::from(self.title.bold()),
            Line::from(""),
            Line::from(self.description),
            Line::from(""),
            Line::from(vec![muted("Vendor: "), Span::raw(self.vendor)]),
            Line::from(vec![muted("Product: "), Span::raw(self.product)]),
            Line::from(vec![muted("Published: "), Span::raw(format_date(self.published_date))]),
            Line::from(vec![muted("Modified: "), Span::raw(format_date(self.last_modified))]),
            Line::from(Span::styled(self.patch_status.label(), patch_style(self.patch_status))),
            Line::from(""),
            heading("REFERENCES"),
        ];
        lines.extend(self.references.iter().map(|r| Line::from(muted(*r))));
        lines
    }
}

impl RowView for Breach {
    fn row(&self, _now: DateTime<Utc>) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            severity_badge(self.impact),
            Span::raw(format!(" {} ", self.organization)),
            muted(format!("{} · {} records ", self.sector, format_count(self.records_affected))),
            Span::styled(self.status.label(), breach_status_style(self.status)),
        ]))
    }

    fn preview(&self, _now: DateTime<Utc>) -> Vec<Line<'static>> {
        vec![
            Line::from(self.organization.bold()),
            Line::from(vec![
                muted(format!("{} · {} · ", self.sector, self.kind.label())),
                Span::styled(self.status.label(), breach_status_style(self.status)),
            ]),
            Line::from(""),
            Line::from(self.description),
            Line::from(""),
            Line::from(vec![
                muted("Records affected: "),
                Span::styled(format_count(self.records_affected), severity_style(self.impact)),
            ]),
            Line::from(vec![muted("Discovered: "), Span::raw(format_date(self.date_discovered))]),
            Line::from(vec![muted("Reported: "), Span::raw(format_date(self.date_reported))]),
            Line::from(""),
            heading("DATA TYPES"),
            Line::from(joined(self.data_types)),
        ]
    }
}

impl RowView for IntelReport {
    fn row(&self, _now: DateTime<Utc>) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            severity_badge(self.severity),
            Span::raw(" "),
            Span::styled(self.threat_actor, Style::default().fg(Color::Magenta)),
            Span::raw(format!(" {} ", self.title)),
            Span::styled(
                format!("({} confidence)", self.confidence.label()),
                confidence_style(self.confidence),
            ),
        ]))
    }

    fn preview(&self, _now: DateTime<Utc>) -> Vec<Line<'static>> {
        vec![
            Line::from(self.title.bold()),
            Line::from(vec![
                Span::styled(self.threat_actor, Style::default().fg(Color::Magenta)),
                muted(format!(" · {}", self.campaign)),
            ]),
            Line::from(""),
            Line::from(self.description),
            Line::from(""),
            Line::from(vec![muted("Targets: "), Span::raw(joined(self.targets))]),
            Line::from(vec![muted("Geography: "), Span::raw(joined(self.geography))]),
            Line::from(vec![muted("Tactics: "), Span::raw(joined(self.tactics))]),
            Line::from(vec![muted("Published: "), Span::raw(format_date(self.published_date))]),
            Line::from(vec![muted("Updated: "), Span::raw(format_date(self.last_updated))]),
            Line::from(""),
            heading("INDICATORS"),
            Line::from(Span::styled(joined(self.iocs), Style::default().fg(Color::Cyan))),
            heading("MITRE ATT&CK"),
            Line::from(joined(self.mitre_attack)),
        ]
    }
}
