//! Cast group selectors: decide where a neuron propagates after it runs.

use std::fmt;
use std::sync::Arc;

use crate::types::{ContextReader, DEFAULT_CAST_GROUP};

/// Chooses the cast group whose out-links receive the signal after a successful run.
///
/// Implementations see the context read-only. The returned name is expected to be one
/// of the neuron's cast groups; [crate::Neuron::select_out_links] checks it.
pub trait Selector: Send + Sync {
  fn select(&self, ctx: &dyn ContextReader) -> String;
}

/// Always selects [DEFAULT_CAST_GROUP].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSelector;

impl Selector for DefaultSelector {
  fn select(&self, _ctx: &dyn ContextReader) -> String {
    DEFAULT_CAST_GROUP.to_string()
  }
}

type SelectFn = dyn Fn(&dyn ContextReader) -> String + Send + Sync;

/// Selector backed by a caller-supplied function.
#[derive(Clone)]
pub struct FnSelector {
  f: Arc<SelectFn>,
}

impl FnSelector {
  pub fn new<F>(f: F) -> Self
  where
    F: Fn(&dyn ContextReader) -> String + Send + Sync + 'static,
  {
    Self { f: Arc::new(f) }
  }
}

impl fmt::Debug for FnSelector {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnSelector").finish_non_exhaustive()
  }
}

impl Selector for FnSelector {
  fn select(&self, ctx: &dyn ContextReader) -> String {
    (self.f)(ctx)
  }
}
