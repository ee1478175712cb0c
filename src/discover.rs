//! Per-node trace discovery.
//!
//! The scatter chart plots every raw node trace, found by filename pattern:
//! `<proto>_value_<node>.csv`, where the `_averaged` variant is the
//! cross-node aggregate and must be excluded. The predicate operates on
//! plain names so it can be tested without a filesystem; [`list_file_names`]
//! does the actual directory read and sorts the result so chart output is
//! deterministic across runs.

use std::path::Path;

use crate::config::Protocol;
use crate::error::PlotError;

/// Whether `file_name` is a raw per-node value trace for `protocol`.
pub fn is_node_value_file(protocol: Protocol, file_name: &str) -> bool {
    let Some(rest) = file_name.strip_prefix(protocol.code()) else {
        return false;
    };
    let Some(node) = rest.strip_prefix("_value_") else {
        return false;
    };
    node.ends_with(".csv") && !node.ends_with("_averaged.csv")
}

/// Filter `file_names` down to the per-node value traces for `protocol`,
/// preserving input order.
pub fn node_value_files<'a>(
    protocol: Protocol,
    file_names: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    file_names
        .into_iter()
        .filter(|name| is_node_value_file(protocol, name))
        .collect()
}

/// List the plain file names in `dir`, sorted.
///
/// Entries without a UTF-8 name are skipped; they cannot match the node-file
/// pattern anyway.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>, PlotError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_node_traces_only() {
        assert!(is_node_value_file(Protocol::Hi, "hi_value_node1.csv"));
        assert!(is_node_value_file(Protocol::Hi, "hi_value_10.0.0.3.csv"));

        // the aggregate is not a node trace
        assert!(!is_node_value_file(Protocol::Hi, "hi_value_averaged.csv"));
        // other protocols and other data kinds don't match
        assert!(!is_node_value_file(Protocol::Hi, "fu_value_node1.csv"));
        assert!(!is_node_value_file(Protocol::Hi, "hi_msgcount_node1.csv"));
        // non-CSV files don't match
        assert!(!is_node_value_file(Protocol::Hi, "hi_value_node1.txt"));
        // a bare prefix with no node identifier doesn't match
        assert!(!is_node_value_file(Protocol::Hi, "hi_value_"));
    }

    #[test]
    fn filter_preserves_order() {
        let names = [
            "fu_value_n2.csv",
            "hi_value_n2.csv",
            "hi_value_averaged.csv",
            "hi_value_n1.csv",
            "value_expected.csv",
        ];
        assert_eq!(
            node_value_files(Protocol::Hi, names),
            ["hi_value_n2.csv", "hi_value_n1.csv"]
        );
    }

    #[test]
    fn listing_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.csv", "a.csv", "c.csv"] {
            std::fs::write(dir.path().join(name), "").unwrap();
        }
        assert_eq!(list_file_names(dir.path()).unwrap(), ["a.csv", "b.csv", "c.csv"]);
    }
}
