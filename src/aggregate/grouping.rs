//! Partitions records by project identity.

use crate::types::InputRecord;
use std::collections::HashMap;
use std::path::Path;

/// All records sharing one identity, in input order.
///
/// Always holds at least one record. The last record added is the
/// representative.
#[derive(Debug, Clone)]
pub struct LogicalProject {
    identity: Option<String>,
    earlier: Vec<InputRecord>,
    last: InputRecord,
}

impl LogicalProject {
    fn new(record: InputRecord) -> Self {
        Self {
            identity: record.identity.clone(),
            earlier: Vec::new(),
            last: record,
        }
    }

    fn push(&mut self, record: InputRecord) {
        let previous = std::mem::replace(&mut self.last, record);
        self.earlier.push(previous);
    }

    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// Records in input order.
    pub fn records(&self) -> impl Iterator<Item = &InputRecord> {
        self.earlier.iter().chain(std::iter::once(&self.last))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.earlier.len() + 1
    }

    /// Never true; a logical project is created from its first record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The record supplying scalar metadata: the last one in input order.
    #[must_use]
    pub fn representative(&self) -> &InputRecord {
        &self.last
    }

    #[must_use]
    pub fn into_representative(self) -> InputRecord {
        self.last
    }

    /// Distinct source paths, in order of first appearance.
    #[must_use]
    pub fn distinct_source_paths(&self) -> Vec<&Path> {
        let mut seen: Vec<&Path> = Vec::new();
        for record in self.records() {
            let path = record.source_path.as_path();
            if !seen.contains(&path) {
                seen.push(path);
            }
        }
        seen
    }

    /// Same identity declared by more than one physical project.
    ///
    /// Several records with one source path are the multi-targeting case and
    /// do not count.
    #[must_use]
    pub fn has_conflicting_sources(&self) -> bool {
        self.earlier
            .iter()
            .any(|r| r.source_path != self.last.source_path)
    }
}

/// Groups records by identity, keeping the first-seen order of identities.
///
/// Records without an identity form a single group.
#[must_use]
pub fn group_by_identity<I>(records: I) -> Vec<LogicalProject>
where
    I: IntoIterator<Item = InputRecord>,
{
    let mut index: HashMap<Option<String>, usize> = HashMap::new();
    let mut groups: Vec<LogicalProject> = Vec::new();

    for record in records {
        match index.get(&record.identity) {
            Some(&slot) => {
                if let Some(group) = groups.get_mut(slot) {
                    group.push(record);
                }
            }
            None => {
                index.insert(record.identity.clone(), groups.len());
                groups.push(LogicalProject::new(record));
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: Option<&str>, path: &str) -> InputRecord {
        InputRecord::new(id, path)
    }

    #[test]
    fn keeps_first_seen_order() {
        let groups = group_by_identity(vec![
            rec(Some("b"), "/b.csproj"),
            rec(Some("a"), "/a.csproj"),
            rec(Some("b"), "/b.csproj"),
        ]);
        let ids: Vec<_> = groups.iter().map(LogicalProject::identity).collect();
        assert_eq!(ids, vec![Some("b"), Some("a")]);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn same_source_path_is_not_a_conflict() {
        let groups = group_by_identity(vec![
            rec(Some("a"), "/a.csproj"),
            rec(Some("a"), "/a.csproj"),
        ]);
        assert!(!groups[0].has_conflicting_sources());
    }

    #[test]
    fn differing_source_paths_conflict() {
        let groups = group_by_identity(vec![
            rec(Some("a"), "/a.csproj"),
            rec(Some("a"), "/other/a.csproj"),
            rec(Some("a"), "/a.csproj"),
        ]);
        assert!(groups[0].has_conflicting_sources());
        assert_eq!(groups[0].distinct_source_paths().len(), 2);
    }

    #[test]
    fn absent_identities_collapse() {
        let groups = group_by_identity(vec![rec(None, "/x.csproj"), rec(None, "/y.csproj")]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].identity(), None);
    }

    #[test]
    fn representative_is_last_record() {
        let mut second = rec(Some("a"), "/a.csproj");
        second.configuration = "Debug".into();
        let groups = group_by_identity(vec![rec(Some("a"), "/a.csproj"), second]);
        assert_eq!(groups[0].representative().configuration, "Debug");
    }
}
