//! Declarative build-time configuration for a single neuron.
//!
//! [NeuronConfig] refines a neuron that is already wired (labels, trigger groups,
//! cast groups). [NeuronFixture] adds the links to wire first and is the file
//! format read by the `neuron_inspect` binary.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{ConfigError, NeuronError};
use crate::id::LinkId;
use crate::neuron::Neuron;
use crate::processor::EmptyProcessor;
use crate::types::Labels;

/// Build-time refinement of one wired neuron.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeuronConfig {
  /// Replaces the neuron's labels when present; an empty map clears them.
  pub labels: Option<Labels>,
  /// Each entry is passed to [Neuron::add_trigger_group], in order.
  pub trigger_groups: Vec<Vec<LinkId>>,
  /// Cast group name -> out-links, applied in name order.
  pub cast_groups: BTreeMap<String, Vec<LinkId>>,
}

impl NeuronConfig {
  /// Applies the whole config, or nothing.
  ///
  /// Every link and group name is checked against `neuron` before it is touched.
  #[instrument(level = "trace", skip(self, neuron), fields(neuron_id = %neuron.id()))]
  pub fn apply(&self, neuron: &mut Neuron) -> Result<(), NeuronError> {
    self.validate(neuron)?;
    if let Some(labels) = &self.labels {
      neuron.set_labels(labels.clone());
    }
    for group in &self.trigger_groups {
      neuron.add_trigger_group(group.as_slice())?;
    }
    for (name, links) in &self.cast_groups {
      neuron.add_cast_group(name, links.as_slice())?;
    }
    Ok(())
  }

  fn validate(&self, neuron: &Neuron) -> Result<(), NeuronError> {
    for link in self.trigger_groups.iter().flatten() {
      if !neuron.has_in_link(link) {
        return Err(NeuronError::UnknownInLink {
          link_id: link.clone(),
          neuron_id: neuron.id().clone(),
        });
      }
    }
    for (name, links) in &self.cast_groups {
      if name.is_empty() {
        return Err(NeuronError::InvalidGroupName);
      }
      if let Some(link) = links.iter().find(|l| !neuron.has_out_link(l)) {
        return Err(NeuronError::UnknownOutLink {
          link_id: link.clone(),
          neuron_id: neuron.id().clone(),
        });
      }
    }
    Ok(())
  }
}

/// One neuron described with its links, for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeuronFixture {
  pub in_links: Vec<LinkId>,
  pub out_links: Vec<LinkId>,
  pub config: NeuronConfig,
}

impl NeuronFixture {
  pub fn from_json(s: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(s)?)
  }

  #[instrument(level = "trace")]
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let s = std::fs::read_to_string(path)?;
    Self::from_json(&s)
  }

  /// Builds a neuron with a no-op processor, wires the links, then applies the config.
  pub fn build(&self) -> Result<Neuron, ConfigError> {
    let mut neuron = Neuron::new(EmptyProcessor);
    for link in &self.in_links {
      neuron.add_in_link(link.clone());
    }
    for link in &self.out_links {
      neuron.add_out_link(link.clone());
    }
    self.config.apply(&mut neuron)?;
    info!(
      neuron_id = %neuron.id(),
      in_links = self.in_links.len(),
      out_links = self.out_links.len(),
      "fixture built"
    );
    Ok(neuron)
  }
}
