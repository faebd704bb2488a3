//! Trigger groups: the disjunctive firing conditions of a neuron.
//!
//! Each group is a set of in-links that must all have delivered a signal in the
//! current run. Any single satisfied group readies the neuron. The stored groups
//! form an antichain under set inclusion: no group is a subset of another.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::id::{LinkId, TriggerGroupKey};

/// Trigger groups keyed by an opaque generated key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TriggerGroups {
  groups: HashMap<TriggerGroupKey, Vec<LinkId>>,
}

/// Outcome of [TriggerGroups::insert_dominant].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerInsert {
  /// The candidate was stored; `evicted` groups were subsets of it.
  Stored {
    key: TriggerGroupKey,
    evicted: Vec<TriggerGroupKey>,
  },
  /// An existing group already covers the candidate. Nothing changed.
  Subsumed { by: TriggerGroupKey },
}

impl TriggerGroups {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.groups.len()
  }

  pub fn is_empty(&self) -> bool {
    self.groups.is_empty()
  }

  pub fn get(&self, key: &TriggerGroupKey) -> Option<&[LinkId]> {
    self.groups.get(key).map(Vec::as_slice)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&TriggerGroupKey, &[LinkId])> {
    self.groups.iter().map(|(k, v)| (k, v.as_slice()))
  }

  /// Adds a group holding only `link`, so that link alone can trigger the neuron.
  pub(crate) fn insert_singleton(&mut self, link: LinkId) -> TriggerGroupKey {
    let key = self.fresh_key();
    trace!(group_key = %key, link_id = %link, "singleton trigger group added");
    self.groups.insert(key.clone(), vec![link]);
    key
  }

  /// Inserts `links` as one group while keeping the antichain invariant.
  ///
  /// Duplicate ids collapse; first-occurrence order is kept. If a stored group is a
  /// superset of (or equal to) the candidate, nothing changes. Otherwise every stored
  /// group that is a subset of the candidate is removed and the candidate is stored
  /// under a fresh key.
  #[instrument(level = "trace", skip(self, links))]
  pub(crate) fn insert_dominant(&mut self, links: &[LinkId]) -> TriggerInsert {
    let mut seen = HashSet::with_capacity(links.len());
    let candidate: Vec<LinkId> = links
      .iter()
      .filter(|l| seen.insert(*l))
      .cloned()
      .collect();
    let candidate_set: HashSet<&LinkId> = candidate.iter().collect();

    if let Some(key) = self
      .groups
      .iter()
      .find(|(_, group)| group_covers(group, &candidate_set))
      .map(|(key, _)| key.clone())
    {
      debug!(group_key = %key, group = ?candidate, "trigger group already covered");
      return TriggerInsert::Subsumed { by: key };
    }

    let evicted: Vec<TriggerGroupKey> = self
      .groups
      .iter()
      .filter(|(_, group)| group.iter().all(|l| candidate_set.contains(l)))
      .map(|(key, _)| key.clone())
      .collect();
    for key in &evicted {
      if let Some(group) = self.groups.remove(key) {
        debug!(group_key = %key, group = ?group, "trigger group evicted");
      }
    }

    let key = self.fresh_key();
    debug!(group_key = %key, group = ?candidate, "trigger group stored");
    self.groups.insert(key.clone(), candidate);
    TriggerInsert::Stored { key, evicted }
  }

  /// A generated key not already in use.
  fn fresh_key(&self) -> TriggerGroupKey {
    loop {
      let key = TriggerGroupKey::generate();
      if !self.groups.contains_key(&key) {
        return key;
      }
    }
  }

  pub fn contains_link(&self, link: &LinkId) -> bool {
    self.groups.values().any(|g| g.contains(link))
  }

  /// Deduplicated union of all links across groups, order unspecified.
  pub fn link_ids(&self) -> Vec<LinkId> {
    let mut seen = HashSet::new();
    self
      .groups
      .values()
      .flatten()
      .filter(|l| seen.insert(*l))
      .cloned()
      .collect()
  }

  /// True when every link of at least one group is in `fired`.
  pub fn is_satisfied_by(&self, fired: &HashSet<LinkId>) -> bool {
    self
      .groups
      .values()
      .any(|g| g.iter().all(|l| fired.contains(l)))
  }

  /// Detached copy of the key -> links mapping.
  pub fn to_map(&self) -> HashMap<TriggerGroupKey, Vec<LinkId>> {
    self.groups.clone()
  }
}

fn group_covers(group: &[LinkId], candidate: &HashSet<&LinkId>) -> bool {
  candidate.iter().all(|l| group.contains(l))
}
