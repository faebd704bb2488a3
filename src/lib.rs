//! # neuron-weave
//!
//! Nodes ("neurons") for dataflow and rule-execution graphs.
//!
//! A neuron fires when all in-links of one of its trigger groups have delivered a
//! signal, runs its processor, then propagates along the out-links of the cast group
//! its selector picks.
//!
//! ## Layout
//!
//! - [Neuron]: build-time configuration API and execution-time queries.
//! - [types]: trigger groups, cast groups, labels and the per-run context.
//! - [selector] / [processor]: the capabilities a neuron carries.
//! - [wiring]: links and [connect].
//! - [config]: declarative configuration and the fixture format of `neuron_inspect`.

pub mod config;
pub mod error;
pub mod id;
pub mod neuron;
pub mod processor;
pub mod selector;
pub mod types;
pub mod wiring;

pub use config::{NeuronConfig, NeuronFixture};
pub use error::{ConfigError, NeuronError, ProcessError};
pub use id::{END_NEURON_ID, LinkId, NeuronId, TriggerGroupKey};
pub use neuron::Neuron;
pub use processor::{EmptyProcessor, FnProcessor, Processor};
pub use selector::{DefaultSelector, FnSelector, Selector};
pub use types::{ContextReader, DEFAULT_CAST_GROUP, Labels, NeuronSnapshot, RunContext};
pub use wiring::{Edge, Link, connect, connect_with_id};
