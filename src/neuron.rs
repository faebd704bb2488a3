//! The neuron: a triggerable, routable node of an execution graph.
//!
//! A neuron is ready once every in-link of any one of its trigger groups has
//! delivered a signal. After its processor succeeds, its selector names the cast
//! group whose out-links carry the signal on. The neuron only stores this
//! configuration; firing bookkeeping and processor invocation belong to the
//! orchestrator, which runs each execution on its own [Neuron::deep_copy].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::error::NeuronError;
use crate::id::{END_NEURON_ID, LinkId, NeuronId, TriggerGroupKey};
use crate::processor::{EmptyProcessor, Processor};
use crate::selector::{DefaultSelector, FnSelector, Selector};
use crate::types::{
  CastGroups, ContextReader, DEFAULT_CAST_GROUP, Labels, NeuronSnapshot, TriggerGroups,
  TriggerInsert,
};
use crate::wiring::Link;

/// A node of the execution graph.
///
/// `Clone` is the deep copy: labels and groups are copied, processor and
/// selector are shared.
#[derive(Clone)]
pub struct Neuron {
  id: NeuronId,
  labels: Labels,
  processor: Arc<dyn Processor>,
  trigger_groups: TriggerGroups,
  cast_groups: CastGroups,
  selector: Arc<dyn Selector>,
}

impl Neuron {
  pub fn new<P: Processor + 'static>(processor: P) -> Self {
    Self::with_shared_processor(Arc::new(processor))
  }

  pub fn with_shared_processor(processor: Arc<dyn Processor>) -> Self {
    Self::with_id(NeuronId::generate(), processor)
  }

  /// The reserved end marker: id [END_NEURON_ID], no-op processor.
  pub fn end() -> Self {
    Self::with_id(NeuronId::new(END_NEURON_ID), Arc::new(EmptyProcessor))
  }

  fn with_id(id: NeuronId, processor: Arc<dyn Processor>) -> Self {
    trace!(neuron_id = %id, "neuron created");
    Self {
      id,
      labels: Labels::new(),
      processor,
      trigger_groups: TriggerGroups::new(),
      cast_groups: CastGroups::new(),
      selector: Arc::new(DefaultSelector),
    }
  }

  pub fn id(&self) -> &NeuronId {
    &self.id
  }

  pub fn is_end(&self) -> bool {
    self.id.as_str() == END_NEURON_ID
  }

  pub fn labels(&self) -> &Labels {
    &self.labels
  }

  /// Replaces the whole label set.
  pub fn set_labels(&mut self, labels: Labels) {
    self.labels = labels;
  }

  pub fn processor(&self) -> Arc<dyn Processor> {
    Arc::clone(&self.processor)
  }

  pub fn selector(&self) -> Arc<dyn Selector> {
    Arc::clone(&self.selector)
  }

  pub fn trigger_groups(&self) -> &TriggerGroups {
    &self.trigger_groups
  }

  pub fn cast_groups(&self) -> &CastGroups {
    &self.cast_groups
  }

  /// Every in-link referenced by a trigger group, once each.
  pub fn list_in_link_ids(&self) -> Vec<LinkId> {
    self.trigger_groups.link_ids()
  }

  /// Every out-link referenced by a cast group, once each.
  pub fn list_out_link_ids(&self) -> Vec<LinkId> {
    self.cast_groups.link_ids()
  }

  pub fn list_trigger_groups(&self) -> HashMap<TriggerGroupKey, Vec<LinkId>> {
    self.trigger_groups.to_map()
  }

  pub fn list_cast_groups(&self) -> HashMap<String, Vec<LinkId>> {
    self.cast_groups.format()
  }

  /// Requires `links` to fire together to trigger this neuron.
  ///
  /// Every in-link starts in a group of its own. A new group that is covered by an
  /// existing one is dropped; existing groups covered by the new one are removed.
  /// Fails without changing anything if a link is not an in-link of this neuron.
  #[instrument(level = "trace", skip(self, links), fields(neuron_id = %self.id))]
  pub fn add_trigger_group<L: Link>(&mut self, links: &[L]) -> Result<(), NeuronError> {
    if links.is_empty() {
      return Ok(());
    }
    let ids = self.known_in_links(links)?;
    match self.trigger_groups.insert_dominant(&ids) {
      TriggerInsert::Stored { key, evicted } => {
        debug!(neuron_id = %self.id, group_key = %key, evicted = evicted.len(), "trigger group added");
      }
      TriggerInsert::Subsumed { by } => {
        debug!(neuron_id = %self.id, covered_by = %by, "trigger group not added");
      }
    }
    Ok(())
  }

  /// Routes `links` to the cast group `name`, taking them out of the default group.
  #[instrument(level = "trace", skip(self, links), fields(neuron_id = %self.id))]
  pub fn add_cast_group<L: Link>(&mut self, name: &str, links: &[L]) -> Result<(), NeuronError> {
    if name.is_empty() {
      return Err(NeuronError::InvalidGroupName);
    }
    let ids = self.known_out_links(links)?;
    self.cast_groups.assign(name, &ids);
    debug!(neuron_id = %self.id, group = name, count = ids.len(), "cast group updated");
    Ok(())
  }

  pub fn bind_cast_group_selector(&mut self, selector: Arc<dyn Selector>) {
    self.selector = selector;
  }

  pub fn bind_cast_group_select_fn<F>(&mut self, f: F)
  where
    F: Fn(&dyn ContextReader) -> String + Send + Sync + 'static,
  {
    self.bind_cast_group_selector(Arc::new(FnSelector::new(f)));
  }

  /// True once all links of some trigger group are in `fired`.
  pub fn is_ready(&self, fired: &HashSet<LinkId>) -> bool {
    self.trigger_groups.is_satisfied_by(fired)
  }

  /// Asks the selector for a cast group and returns its name and out-links.
  ///
  /// A neuron without out-links still answers the default group, with no links.
  pub fn select_out_links(
    &self,
    ctx: &dyn ContextReader,
  ) -> Result<(String, Vec<LinkId>), NeuronError> {
    let group = self.selector.select(ctx);
    let links = match self.cast_groups.get(&group) {
      Some(links) => {
        let mut links: Vec<LinkId> = links.iter().cloned().collect();
        links.sort();
        links
      }
      None if group == DEFAULT_CAST_GROUP => Vec::new(),
      None => {
        return Err(NeuronError::UnknownCastGroup {
          group,
          neuron_id: self.id.clone(),
        });
      }
    };
    trace!(neuron_id = %self.id, group = %group, count = links.len(), "cast group selected");
    Ok((group, links))
  }

  /// Independent copy for one run. Mutating either side never affects the other.
  pub fn deep_copy(&self) -> Self {
    self.clone()
  }

  /// Projection used for structured logging and diagnostics.
  pub fn snapshot(&self) -> NeuronSnapshot {
    NeuronSnapshot {
      id: self.id.clone(),
      labels: self.labels.clone(),
      trigger_groups: self.list_trigger_groups(),
      cast_groups: self.list_cast_groups(),
    }
  }

  /// Gives a new in-link a trigger group of its own. Already known links are left alone.
  pub(crate) fn add_in_link(&mut self, link: LinkId) {
    if self.has_in_link(&link) {
      trace!(neuron_id = %self.id, link_id = %link, "in-link already registered");
      return;
    }
    self.trigger_groups.insert_singleton(link);
  }

  /// Puts a new out-link in the default cast group. Already known links keep their group.
  pub(crate) fn add_out_link(&mut self, link: LinkId) {
    if self.has_out_link(&link) {
      trace!(neuron_id = %self.id, link_id = %link, "out-link already registered");
      return;
    }
    self.cast_groups.insert_default(link);
  }

  pub(crate) fn has_in_link(&self, link: &LinkId) -> bool {
    self.trigger_groups.contains_link(link)
  }

  pub(crate) fn has_out_link(&self, link: &LinkId) -> bool {
    self.cast_groups.contains_link(link)
  }

  fn known_in_links<L: Link>(&self, links: &[L]) -> Result<Vec<LinkId>, NeuronError> {
    links
      .iter()
      .map(|l| {
        if self.has_in_link(l.id()) {
          Ok(l.id().clone())
        } else {
          Err(NeuronError::UnknownInLink {
            link_id: l.id().clone(),
            neuron_id: self.id.clone(),
          })
        }
      })
      .collect()
  }

  fn known_out_links<L: Link>(&self, links: &[L]) -> Result<Vec<LinkId>, NeuronError> {
    links
      .iter()
      .map(|l| {
        if self.has_out_link(l.id()) {
          Ok(l.id().clone())
        } else {
          Err(NeuronError::UnknownOutLink {
            link_id: l.id().clone(),
            neuron_id: self.id.clone(),
          })
        }
      })
      .collect()
  }
}

impl fmt::Debug for Neuron {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = self.snapshot();
    f.debug_struct("Neuron")
      .field("id", &s.id)
      .field("labels", &s.labels)
      .field("trigger_groups", &s.trigger_groups)
      .field("cast_groups", &s.cast_groups)
      .finish_non_exhaustive()
  }
}
