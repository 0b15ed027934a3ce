//! Online course roster.

use domain::DomainResult;

use crate::participant::{EligibilityPolicy, Participant};

/// Course that admits participants passing its eligibility policy.
#[derive(Debug, Default)]
pub struct OnlineCourse {
    policy: EligibilityPolicy,
    participants: Vec<Participant>,
}

impl OnlineCourse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: EligibilityPolicy) -> Self {
        Self {
            policy,
            participants: Vec::new(),
        }
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    /// Register a participant.
    ///
    /// The roster is only extended when the eligibility check passes.
    pub fn register(&mut self, participant: Participant) -> DomainResult<()> {
        participant.check_eligibility_with(&self.policy)?;
        tracing::debug!(participant = participant.name(), "Participant registered");
        self.participants.push(participant);
        Ok(())
    }

    /// Registered participants in registration order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }
}
