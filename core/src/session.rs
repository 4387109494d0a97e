// storefront/src/session.rs

//! The identity collaborator boundary.
//!
//! Authentication itself is external; the engine only needs a nullable
//! current user and a way to end the session. Change notification is a
//! wiring concern: whoever flips the session must call
//! [`crate::cart::CartEngine::reload`] afterwards.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated user as reported by the identity provider: an opaque
/// stable identifier plus the email shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub id: Uuid,
  pub email: String,
}

pub trait IdentityProvider: Send + Sync {
  fn current_user(&self) -> Option<Identity>;

  fn sign_out(&self);
}

/// An in-process session slot, enough for tests and demos.
#[derive(Default)]
pub struct MemorySession {
  user: RwLock<Option<Identity>>,
}

impl MemorySession {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn sign_in(&self, email: impl Into<String>) -> Identity {
    let identity = Identity {
      id: Uuid::new_v4(),
      email: email.into(),
    };
    *self.user.write() = Some(identity.clone());
    identity
  }

  pub fn sign_in_as(&self, identity: Identity) {
    *self.user.write() = Some(identity);
  }
}

impl IdentityProvider for MemorySession {
  fn current_user(&self) -> Option<Identity> {
    self.user.read().clone()
  }

  fn sign_out(&self) {
    *self.user.write() = None;
  }
}
