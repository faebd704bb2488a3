//! Links between neurons and the wiring that registers them.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::id::{LinkId, NeuronId};
use crate::neuron::Neuron;

/// Anything that identifies a link. Neurons only ever look at the id.
pub trait Link {
  fn id(&self) -> &LinkId;
}

impl Link for LinkId {
  fn id(&self) -> &LinkId {
    self
  }
}

impl<T: Link + ?Sized> Link for &T {
  fn id(&self) -> &LinkId {
    (**self).id()
  }
}

/// A directed link from one neuron to another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
  pub id: LinkId,
  pub from: NeuronId,
  pub to: NeuronId,
}

impl Link for Edge {
  fn id(&self) -> &LinkId {
    &self.id
  }
}

/// Connects `src` to `dest` with a freshly generated link id.
pub fn connect(src: &mut Neuron, dest: &mut Neuron) -> Edge {
  connect_with_id(src, dest, LinkId::generate())
}

/// Connects `src` to `dest` with `id`.
///
/// The link becomes an out-link of `src` (in its default cast group) and an in-link
/// of `dest` (in a trigger group of its own).
#[instrument(level = "trace", skip(src, dest), fields(from = %src.id(), to = %dest.id()))]
pub fn connect_with_id(src: &mut Neuron, dest: &mut Neuron, id: LinkId) -> Edge {
  src.add_out_link(id.clone());
  dest.add_in_link(id.clone());
  debug!(link_id = %id, from = %src.id(), to = %dest.id(), "link connected");
  Edge {
    id,
    from: src.id().clone(),
    to: dest.id().clone(),
  }
}
