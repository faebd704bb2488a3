//! Error types for neuron configuration, processors and config loading.

use thiserror::Error;

use crate::id::{LinkId, NeuronId};

/// Build-time configuration errors raised by [crate::Neuron].
///
/// A call that returns one of these has not touched the neuron's state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NeuronError {
  /// A trigger group referenced a link that is not an in-link of the neuron.
  #[error("in-link {link_id} not found on neuron {neuron_id}")]
  UnknownInLink { link_id: LinkId, neuron_id: NeuronId },

  /// A cast group referenced a link that is not an out-link of the neuron.
  #[error("out-link {link_id} not found on neuron {neuron_id}")]
  UnknownOutLink { link_id: LinkId, neuron_id: NeuronId },

  #[error("cast group name is empty")]
  InvalidGroupName,

  /// The selector named a cast group the neuron does not have.
  #[error("cast group {group:?} not found on neuron {neuron_id}")]
  UnknownCastGroup { group: String, neuron_id: NeuronId },
}

/// Failure reported by a [crate::Processor].
#[derive(Debug, Error)]
pub enum ProcessError {
  #[error("process failed: {0}")]
  Failed(String),

  #[error("{0}")]
  Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors loading or applying a [crate::NeuronConfig] / [crate::NeuronFixture].
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("reading config: {0}")]
  Io(#[from] std::io::Error),

  #[error("parsing config: {0}")]
  Json(#[from] serde_json::Error),

  #[error(transparent)]
  Neuron(#[from] NeuronError),
}
