//! Per-run execution context handed to processors and selectors.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::id::NeuronId;

/// Read-only view of the execution context.
///
/// Selectors only ever see this trait, so they cannot change run state.
pub trait ContextReader: Send + Sync {
  /// Neuron currently being executed.
  fn current_neuron_id(&self) -> &NeuronId;

  fn get_memory(&self, key: &str) -> Option<&Value>;

  fn memory_keys(&self) -> Vec<&str>;
}

/// Memory owned by one run, scoped to the neuron being executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunContext {
  neuron_id: NeuronId,
  memory: HashMap<String, Value>,
}

impl RunContext {
  pub fn new(neuron_id: NeuronId) -> Self {
    Self {
      neuron_id,
      memory: HashMap::new(),
    }
  }

  /// Same memory, pointed at another neuron.
  pub fn for_neuron(mut self, neuron_id: NeuronId) -> Self {
    self.neuron_id = neuron_id;
    self
  }

  pub fn set_memory(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
    self.memory.insert(key.into(), value.into())
  }

  pub fn delete_memory(&mut self, key: &str) -> Option<Value> {
    self.memory.remove(key)
  }
}

impl ContextReader for RunContext {
  fn current_neuron_id(&self) -> &NeuronId {
    &self.neuron_id
  }

  fn get_memory(&self, key: &str) -> Option<&Value> {
    self.memory.get(key)
  }

  fn memory_keys(&self) -> Vec<&str> {
    self.memory.keys().map(String::as_str).collect()
  }
}
