//! Session Entity
//!
//! The single in-memory view of "who is logged in" that the route guard
//! reads on every render.
//!
//! ## Loading
//! `loading()` is true until hydration from storage has finished, and
//! while at least one login/register/reset operation is in flight.
//! Each operation holds one claim; the flag clears only when the last
//! claim is released.

use crate::domain::entity::identity::Identity;

/// Coarse state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// `initialize` has not run yet
    Uninitialized,
    /// Hydration or an operation is in flight
    Loading,
    Authenticated,
    Unauthenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Hydration {
    #[default]
    NotStarted,
    Running,
    Done,
}

/// What a loading claim was taken for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Claim {
    Hydration,
    Operation,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    identity: Option<Identity>,
    hydration: Hydration,
    pending: usize,
    /// Bumped on every sign-in/sign-out
    revision: u64,
}

impl Session {
    /// Hydrated session with nothing in flight
    pub fn ready(identity: Option<Identity>) -> Self {
        Self {
            identity,
            hydration: Hydration::Done,
            ..Default::default()
        }
    }

    /// Hydrated session with one operation in flight
    pub fn busy(identity: Option<Identity>) -> Self {
        Self {
            pending: 1,
            ..Self::ready(identity)
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.hydration != Hydration::Done || self.pending > 0
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.hydration == Hydration::NotStarted && self.pending == 0 {
            SessionPhase::Uninitialized
        } else if self.loading() {
            SessionPhase::Loading
        } else if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        }
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Transitions (driven by the session store)
    // ========================================================================

    /// Start hydration; `false` if it already started
    pub(crate) fn try_claim_hydration(&mut self) -> bool {
        if self.hydration != Hydration::NotStarted {
            return false;
        }
        self.hydration = Hydration::Running;
        true
    }

    pub(crate) fn claim_operation(&mut self) {
        self.pending += 1;
    }

    pub(crate) fn release(&mut self, claim: Claim) {
        match claim {
            Claim::Hydration => self.hydration = Hydration::Done,
            Claim::Operation => self.pending = self.pending.saturating_sub(1),
        }
    }

    /// Apply the hydrated identity unless a sign-in/out happened since
    /// `seen_revision` was read
    pub(crate) fn restore(&mut self, identity: Option<Identity>, seen_revision: u64) {
        if self.revision == seen_revision {
            self.identity = identity;
        }
    }

    pub(crate) fn sign_in(&mut self, identity: Identity) {
        self.identity = Some(identity);
        self.revision += 1;
    }

    pub(crate) fn sign_out(&mut self) {
        self.identity = None;
        self.revision += 1;
    }
}
