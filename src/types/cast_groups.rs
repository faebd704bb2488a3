//! Cast groups: named routing classes over a neuron's out-links.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::id::LinkId;

/// Name of the cast group every out-link starts in.
pub const DEFAULT_CAST_GROUP: &str = "default";

/// Cast group name -> member out-links (membership only, unordered).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CastGroups {
  groups: HashMap<String, HashSet<LinkId>>,
}

impl CastGroups {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  pub fn get(&self, name: &str) -> Option<&HashSet<LinkId>> {
    self.groups.get(name)
  }

  pub fn contains_group(&self, name: &str) -> bool {
    self.groups.contains_key(name)
  }

  pub fn group_names(&self) -> impl Iterator<Item = &str> {
    self.groups.keys().map(String::as_str)
  }

  /// Puts a newly attached out-link into the default group.
  pub(crate) fn insert_default(&mut self, link: LinkId) {
    trace!(link_id = %link, "out-link added to default cast group");
    self
      .groups
      .entry(DEFAULT_CAST_GROUP.to_string())
      .or_default()
      .insert(link);
  }

  /// Moves `links` out of the default group and into `name`.
  ///
  /// Membership in other named groups is left alone. Both the default group and
  /// `name` exist afterwards, even when `links` is empty.
  pub(crate) fn assign(&mut self, name: &str, links: &[LinkId]) {
    let default = self
      .groups
      .entry(DEFAULT_CAST_GROUP.to_string())
      .or_default();
    for link in links {
      default.remove(link);
    }
    self
      .groups
      .entry(name.to_string())
      .or_default()
      .extend(links.iter().cloned());
    trace!(group = name, count = links.len(), "out-links assigned to cast group");
  }

  pub fn contains_link(&self, link: &LinkId) -> bool {
    self.groups.values().any(|g| g.contains(link))
  }

  /// Deduplicated union of all links across groups, order unspecified.
  pub fn link_ids(&self) -> Vec<LinkId> {
    let all: HashSet<&LinkId> = self.groups.values().flatten().collect();
    all.into_iter().cloned().collect()
  }

  /// Flattened view: name -> sorted links.
  pub fn format(&self) -> HashMap<String, Vec<LinkId>> {
    self
      .groups
      .iter()
      .map(|(name, links)| {
        let mut links: Vec<LinkId> = links.iter().cloned().collect();
        links.sort();
        (name.clone(), links)
      })
      .collect()
  }
}
