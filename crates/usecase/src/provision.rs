use std::collections::BTreeSet;

use mx_numplan_ports::sink::{PatternSink, ProvisionTarget};
use mx_numplan_shared_kernel::{ApplicationError, ErrorContext, Result};

use crate::dto::SyncReport;

/// Align one sink partition with a freshly generated list of rendered patterns.
///
/// Patterns present in the sink but not desired are removed, desired ones that are
/// missing get added. With `read_only` the differences are only reported.
pub struct SyncPatterns<'a> {
    sink: &'a dyn PatternSink,
}

impl<'a> SyncPatterns<'a> {
    pub fn new(sink: &'a dyn PatternSink) -> Self {
        Self { sink }
    }

    pub fn run(
        &self,
        partition: &str,
        target: &ProvisionTarget,
        desired: &[String],
        read_only: bool,
    ) -> Result<SyncReport> {
        // Route patterns need their route list up front; the sink never creates one.
        if let Some(name) = target.route_list() {
            let exists = self
                .sink
                .route_list_exists(name)
                .with_context(|| format!("looking up route list '{name}'"))?;
            if !exists {
                if !read_only {
                    let name = name.to_string();
                    return Err(ApplicationError::RouteListMissing { name }.into());
                }
                log::warn!("route list '{name}' does not exist");
            }
        }

        let ready = self
            .sink
            .ensure_partition(partition, read_only)
            .with_context(|| format!("preparing partition '{partition}'"))?;

        let existing: BTreeSet<String> = if ready {
            self.sink.existing(partition, target)?.into_iter().collect()
        } else if read_only {
            log::warn!("partition '{partition}' does not exist; every pattern would be added");
            BTreeSet::new()
        } else {
            return Err(ApplicationError::PartitionUnavailable {
                partition: partition.to_string(),
                reason: "sink could not create it".to_string(),
            }
            .into());
        };
        let wanted: BTreeSet<String> = desired.iter().cloned().collect();

        let to_remove: Vec<String> = existing.difference(&wanted).cloned().collect();
        let to_add: Vec<String> = wanted.difference(&existing).cloned().collect();
        log::info!(
            "partition '{partition}' ({target}): {} existing, {} to add, {} to remove",
            existing.len(),
            to_add.len(),
            to_remove.len()
        );

        if !read_only {
            for pattern in &to_remove {
                log::debug!("removing {pattern} from '{partition}'");
                self.sink.remove(partition, pattern)?;
            }
            for pattern in &to_add {
                log::debug!("adding {pattern} to '{partition}'");
                self.sink.add(partition, pattern, target)?;
            }
        }

        Ok(SyncReport {
            partition: partition.to_string(),
            target: target.clone(),
            partition_ready: ready,
            existing: existing.len(),
            to_add,
            to_remove,
            applied: !read_only,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, BTreeSet},
        sync::Mutex,
    };

    use mx_numplan_shared_kernel::NumplanError;

    use super::*;

    type Entries = BTreeMap<String, ProvisionTarget>;

    #[derive(Default)]
    struct StubSink {
        partitions: Mutex<BTreeMap<String, Entries>>,
        route_lists: BTreeSet<String>,
        refuse_create: bool,
    }

    impl StubSink {
        fn with(partition: &str, patterns: &[&str]) -> Self {
            let sink = Self::default();
            let entries = patterns
                .iter()
                .map(|p| ((*p).to_string(), ProvisionTarget::Blocking))
                .collect();
            sink.partitions.lock().unwrap().insert(partition.to_string(), entries);
            sink
        }

        fn with_route_list(mut self, name: &str) -> Self {
            self.route_lists.insert(name.to_string());
            self
        }

        fn entries(&self, partition: &str) -> Entries {
            self.partitions.lock().unwrap().get(partition).cloned().unwrap_or_default()
        }

        fn patterns(&self, partition: &str) -> Vec<String> {
            self.entries(partition).into_keys().collect()
        }
    }

    impl PatternSink for StubSink {
        fn ensure_partition(&self, partition: &str, read_only: bool) -> Result<bool> {
            let mut partitions = self.partitions.lock().unwrap();
            if partitions.contains_key(partition) {
                return Ok(true);
            }
            if read_only || self.refuse_create {
                return Ok(false);
            }
            partitions.insert(partition.to_string(), Entries::new());
            Ok(true)
        }

        fn route_list_exists(&self, name: &str) -> Result<bool> {
            Ok(self.route_lists.contains(name))
        }

        fn existing(&self, partition: &str, target: &ProvisionTarget) -> Result<Vec<String>> {
            Ok(self
                .entries(partition)
                .into_iter()
                .filter(|(_, t)| t == target)
                .map(|(pattern, _)| pattern)
                .collect())
        }

        fn add(&self, partition: &str, pattern: &str, target: &ProvisionTarget) -> Result<()> {
            self.partitions
                .lock()
                .unwrap()
                .entry(partition.to_string())
                .or_default()
                .insert(pattern.to_string(), target.clone());
            Ok(())
        }

        fn remove(&self, partition: &str, pattern: &str) -> Result<()> {
            if let Some(entries) = self.partitions.lock().unwrap().get_mut(partition) {
                entries.remove(pattern);
            }
            Ok(())
        }
    }

    fn desired(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| (*p).to_string()).collect()
    }

    fn blocking() -> ProvisionTarget {
        ProvisionTarget::Blocking
    }

    #[test]
    fn applies_additions_and_removals() {
        let sink = StubSink::with("mobile", &["\\+521XXX", "\\+529XXX"]);
        let report = SyncPatterns::new(&sink)
            .run("mobile", &blocking(), &desired(&["\\+521XXX", "\\+522XXX"]), false)
            .unwrap();
        assert!(report.applied);
        assert_eq!(report.existing, 2);
        assert_eq!(report.to_add, vec!["\\+522XXX"]);
        assert_eq!(report.to_remove, vec!["\\+529XXX"]);
        assert_eq!(sink.patterns("mobile"), vec!["\\+521XXX", "\\+522XXX"]);
    }

    #[test]
    fn read_only_reports_without_touching_the_sink() {
        let sink = StubSink::with("mobile", &["\\+529XXX"]);
        let report = SyncPatterns::new(&sink)
            .run("mobile", &blocking(), &desired(&["\\+521XXX"]), true)
            .unwrap();
        assert!(!report.applied);
        assert_eq!(report.to_add.len(), 1);
        assert_eq!(report.to_remove.len(), 1);
        assert_eq!(sink.patterns("mobile"), vec!["\\+529XXX"]);
    }

    #[test]
    fn read_only_against_missing_partition_adds_everything() {
        let sink = StubSink::default();
        let report = SyncPatterns::new(&sink)
            .run("mobile", &blocking(), &desired(&["1X", "2X"]), true)
            .unwrap();
        assert!(!report.partition_ready);
        assert_eq!(report.to_add, vec!["1X", "2X"]);
        assert!(sink.patterns("mobile").is_empty());
    }

    #[test]
    fn missing_partition_is_created() {
        let sink = StubSink::default();
        let report =
            SyncPatterns::new(&sink).run("mobile", &blocking(), &desired(&["1X"]), false).unwrap();
        assert!(report.partition_ready);
        assert_eq!(sink.patterns("mobile"), vec!["1X"]);
    }

    #[test]
    fn refused_partition_is_an_error() {
        let sink = StubSink { refuse_create: true, ..StubSink::default() };
        let err = SyncPatterns::new(&sink)
            .run("mobile", &blocking(), &desired(&["1X"]), false)
            .unwrap_err();
        assert!(err.to_string().contains("not available"));
    }

    #[test]
    fn route_patterns_point_at_the_route_list() {
        let sink = StubSink::default().with_route_list("MX-Mobile");
        let target = ProvisionTarget::RouteList("MX-Mobile".to_string());
        let report = SyncPatterns::new(&sink)
            .run("mobile", &target, &desired(&["1X", "2X"]), false)
            .unwrap();
        assert_eq!(report.target, target);
        let entries = sink.entries("mobile");
        assert_eq!(entries.len(), 2);
        assert!(entries.values().all(|t| *t == target));
    }

    #[test]
    fn route_patterns_ignore_blocking_entries_when_diffing() {
        let sink = StubSink::with("mobile", &["9X"]).with_route_list("MX-Mobile");
        let target = ProvisionTarget::RouteList("MX-Mobile".to_string());
        let report =
            SyncPatterns::new(&sink).run("mobile", &target, &desired(&["1X"]), true).unwrap();
        assert_eq!(report.existing, 0);
        assert!(report.to_remove.is_empty());
    }

    #[test]
    fn missing_route_list_fails_before_touching_the_sink() {
        let sink = StubSink::default();
        let target = ProvisionTarget::RouteList("MX-Mobile".to_string());
        let err = SyncPatterns::new(&sink)
            .run("mobile", &target, &desired(&["1X"]), false)
            .unwrap_err();
        assert!(matches!(
            err,
            NumplanError::Application(ApplicationError::RouteListMissing { ref name })
                if name == "MX-Mobile"
        ));
        assert!(sink.partitions.lock().unwrap().is_empty());
    }

    #[test]
    fn missing_route_list_is_only_a_warning_when_read_only() {
        let sink = StubSink::default();
        let target = ProvisionTarget::RouteList("MX-Mobile".to_string());
        let report =
            SyncPatterns::new(&sink).run("mobile", &target, &desired(&["1X"]), true).unwrap();
        assert_eq!(report.to_add, vec!["1X"]);
        assert!(!report.applied);
    }
}
