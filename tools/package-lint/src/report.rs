use crate::checks::{Check, CheckOutcome, Diagnosis};
use crate::config::LinterConfig;
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Check already registered: {0}")]
    Duplicate(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub category: Option<String>,
    pub package: String,
    pub display_name: String,
    pub rule: &'static str,
    pub diagnosis: Diagnosis,
    /// `None` until the report has been run.
    pub outcome: Option<CheckOutcome>,
    pub elapsed_ms: u64,
    #[serde(skip)]
    check: Check,
}

impl ReportEntry {
    pub fn passed(&self) -> bool {
        self.outcome.as_ref().is_some_and(CheckOutcome::passed)
    }
}

/// Registered checks and, once run, their outcomes. Entries keep
/// registration order and are never replaced.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        category: Option<&str>,
        display_name: &str,
        check: Check,
        diagnosis: Diagnosis,
    ) -> Result<(), ReportError> {
        if self.entries.iter().any(|e| e.display_name == display_name) {
            return Err(ReportError::Duplicate(display_name.to_string()));
        }
        self.entries.push(ReportEntry {
            category: category.map(str::to_string),
            package: check.package.name.clone(),
            display_name: display_name.to_string(),
            rule: check.rule.name(),
            diagnosis,
            outcome: None,
            elapsed_ms: 0,
            check,
        });
        Ok(())
    }

    /// Run every check that has no outcome yet, in registration order.
    /// A failing check never stops the ones after it.
    pub fn run_with<F>(&mut self, config: &LinterConfig, mut on_result: F)
    where
        F: FnMut(&ReportEntry),
    {
        for entry in self.entries.iter_mut().filter(|e| e.outcome.is_none()) {
            let start = Instant::now();
            let outcome = CheckOutcome::from(entry.check.check(config));
            entry.elapsed_ms = start.elapsed().as_millis() as u64;
            entry.outcome = Some(outcome);
            on_result(entry);
        }
    }

    pub fn run(&mut self, config: &LinterConfig) {
        self.run_with(config, |_| {});
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn get(&self, package: &str, rule: &str) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|e| e.package == package && e.rule == rule)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Some(CheckOutcome::Failed(_))))
    }

    pub fn all_passed(&self) -> bool {
        self.entries.iter().all(ReportEntry::passed)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{FailureKind, Rule};
    use crate::package::Package;
    use std::path::Path;

    #[test]
    fn duplicate_names_are_rejected() {
        let package = Package::new("pkg", "/nowhere");
        let mut report = Report::new();
        report
            .add(None, "same", Check::new(Rule::Naming, &package), Diagnosis::new("d"))
            .unwrap();

        let err = report
            .add(None, "same", Check::new(Rule::NoTabs, &package), Diagnosis::new("d"))
            .unwrap_err();
        assert!(matches!(err, ReportError::Duplicate(name) if name == "same"));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn run_continues_after_failures() {
        let temp = tempfile::tempdir().unwrap();
        let package = Package::new("pkg", temp.path());
        let config = LinterConfig::from_root(temp.path());

        let mut report = Report::new();
        report
            .add(None, "readme", Check::new(Rule::Readme, &package), Diagnosis::new("d"))
            .unwrap();
        report
            .add(None, "tabs", Check::new(Rule::NoTabs, &package), Diagnosis::new("d"))
            .unwrap();

        let mut seen = Vec::new();
        report.run_with(&config, |entry| seen.push(entry.display_name.clone()));

        assert_eq!(seen, vec!["readme", "tabs"]);
        assert!(!report.all_passed());
        let failed: Vec<&str> = report.failures().map(|e| e.rule).collect();
        assert_eq!(failed, vec!["README"]);
        assert!(report.get("pkg", "NoTabs").unwrap().passed());
        match &report.get("pkg", "README").unwrap().outcome {
            Some(CheckOutcome::Failed(f)) => assert_eq!(f.kind, FailureKind::MissingFile),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn unrun_entries_do_not_pass() {
        let package = Package::new("pkg", Path::new("/nowhere"));
        let mut report = Report::new();
        report
            .add(None, "n", Check::new(Rule::Naming, &package), Diagnosis::new("d"))
            .unwrap();
        assert!(!report.all_passed());
    }
}
