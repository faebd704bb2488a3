//! Diagnostic projection of a neuron for structured logs and the inspect CLI.

use std::collections::HashMap;

use serde::Serialize;

use super::Labels;
use crate::id::{LinkId, NeuronId, TriggerGroupKey};

/// Read-only projection of a neuron: id, labels, trigger groups and flattened cast groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeuronSnapshot {
  pub id: NeuronId,
  pub labels: Labels,
  pub trigger_groups: HashMap<TriggerGroupKey, Vec<LinkId>>,
  pub cast_groups: HashMap<String, Vec<LinkId>>,
}
