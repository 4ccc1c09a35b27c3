//! Dependency containment

use std::collections::HashSet;

/// Whether every entry of `required` appears in `available`.
///
/// Plain set containment: order and duplicates are irrelevant.
pub fn contains_all(available: &[String], required: &[String]) -> bool {
    if required.is_empty() {
        return true;
    }

    let available: HashSet<&str> = available.iter().map(String::as_str).collect();
    required.iter().all(|dep| available.contains(dep.as_str()))
}
