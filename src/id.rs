//! Typed identifiers for neurons, links and trigger groups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved id of the end marker neuron.
pub const END_NEURON_ID: &str = "end";

/// Length of ids produced by [gen_id_short].
pub const SHORT_ID_LEN: usize = 12;

macro_rules! typed_id {
  ($name:ident, $doc:expr) => {
    #[doc = $doc]
    #[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(String);

    impl $name {
      pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
      }

      /// Generates a fresh short id.
      pub fn generate() -> Self {
        Self(gen_id_short())
      }

      pub fn as_str(&self) -> &str {
        &self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<&str> for $name {
      fn from(s: &str) -> Self {
        Self(s.to_owned())
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        Self(s)
      }
    }

    impl AsRef<str> for $name {
      fn as_ref(&self) -> &str {
        &self.0
      }
    }
  };
}

typed_id!(NeuronId, "Process-unique identifier of a neuron.");
typed_id!(LinkId, "Identifier of a link (edge) between two neurons.");
typed_id!(
  TriggerGroupKey,
  "Opaque key of a stored trigger group. Carries no meaning beyond identity."
);

/// Returns a short random id: the first [SHORT_ID_LEN] hex digits of a v4 uuid.
pub fn gen_id_short() -> String {
  let mut id = uuid::Uuid::new_v4().simple().to_string();
  id.truncate(SHORT_ID_LEN);
  id
}
