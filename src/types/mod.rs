//! Data types owned by a neuron: trigger groups, cast groups, labels and run context.

use std::collections::HashMap;

mod cast_groups;
mod neuron_snapshot;
mod run_context;
mod trigger_groups;
#[cfg(test)]
mod trigger_groups_test;

pub use cast_groups::{CastGroups, DEFAULT_CAST_GROUP};
pub use neuron_snapshot::NeuronSnapshot;
pub use run_context::{ContextReader, RunContext};
pub use trigger_groups::{TriggerGroups, TriggerInsert};

/// String metadata attached to a neuron.
pub type Labels = HashMap<String, String>;
