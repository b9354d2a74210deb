use pendzl::traits::String;

pub type ProposalId = u32;

/// Description of the sentinel proposal created when proposal registration starts.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// Phases of the voting workflow, in the only order they can be visited.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, scale::Encode, scale::Decode,
)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum WorkflowStatus {
    #[default]
    RegisteringVoters = 0,
    ProposalsRegistrationStarted = 1,
    ProposalsRegistrationEnded = 2,
    VotingSessionStarted = 3,
    VotingSessionEnded = 4,
    VotesTallied = 5,
}

impl WorkflowStatus {
    /// Returns the phase directly after `self`, `None` once votes are tallied.
    pub fn next(self) -> Option<WorkflowStatus> {
        match self {
            WorkflowStatus::RegisteringVoters => Some(WorkflowStatus::ProposalsRegistrationStarted),
            WorkflowStatus::ProposalsRegistrationStarted => {
                Some(WorkflowStatus::ProposalsRegistrationEnded)
            }
            WorkflowStatus::ProposalsRegistrationEnded => Some(WorkflowStatus::VotingSessionStarted),
            WorkflowStatus::VotingSessionStarted => Some(WorkflowStatus::VotingSessionEnded),
            WorkflowStatus::VotingSessionEnded => Some(WorkflowStatus::VotesTallied),
            WorkflowStatus::VotesTallied => None,
        }
    }
}

impl From<WorkflowStatus> for u8 {
    fn from(status: WorkflowStatus) -> Self {
        status as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Voter {
    /// set by the administrator during `RegisteringVoters`
    pub is_registered: bool,
    /// flips to true on the voter's only successful vote
    pub has_voted: bool,
    /// meaningful only when `has_voted` is true
    pub voted_proposal_id: ProposalId,
}

#[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

/// Capability required by a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Administrator,
    Voter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_every_phase_once() {
        let mut status = WorkflowStatus::default();
        let mut visited = vec![status];
        while let Some(next) = status.next() {
            assert!(next > status);
            visited.push(next);
            status = next;
        }
        assert_eq!(
            visited.iter().map(|s| u8::from(*s)).collect::<Vec<_>>(),
            [0, 1, 2, 3, 4, 5]
        );
        assert_eq!(status, WorkflowStatus::VotesTallied);
    }

    #[test]
    fn default_voter_is_unregistered() {
        let voter = Voter::default();
        assert!(!voter.is_registered);
        assert!(!voter.has_voted);
        assert_eq!(voter.voted_proposal_id, 0);
    }
}
