//! Units of work executed by the orchestrator when a neuron is ready.
//!
//! A neuron holds its processor but never calls it.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ProcessError;
use crate::types::RunContext;

#[async_trait]
pub trait Processor: Send + Sync {
  async fn process(&self, ctx: &mut RunContext) -> Result<(), ProcessError>;
}

/// Does nothing. Used by marker neurons such as the end node.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProcessor;

#[async_trait]
impl Processor for EmptyProcessor {
  async fn process(&self, _ctx: &mut RunContext) -> Result<(), ProcessError> {
    Ok(())
  }
}

type ProcessFn = dyn Fn(&mut RunContext) -> Result<(), ProcessError> + Send + Sync;

/// Processor backed by a synchronous closure.
#[derive(Clone)]
pub struct FnProcessor {
  f: Arc<ProcessFn>,
}

impl FnProcessor {
  pub fn new<F>(f: F) -> Self
  where
    F: Fn(&mut RunContext) -> Result<(), ProcessError> + Send + Sync + 'static,
  {
    Self { f: Arc::new(f) }
  }
}

impl fmt::Debug for FnProcessor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("FnProcessor").finish_non_exhaustive()
  }
}

#[async_trait]
impl Processor for FnProcessor {
  async fn process(&self, ctx: &mut RunContext) -> Result<(), ProcessError> {
    (self.f)(ctx)
  }
}
