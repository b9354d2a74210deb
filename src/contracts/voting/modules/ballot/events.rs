use pendzl::traits::AccountId;

use super::structs::{ProposalId, WorkflowStatus};

#[ink::event]
pub struct WorkflowStatusChange {
    pub previous_status: WorkflowStatus,
    pub new_status: WorkflowStatus,
}

#[ink::event]
pub struct VoterRegistered {
    #[ink(topic)]
    pub voter: AccountId,
}

#[ink::event]
pub struct ProposalRegistered {
    #[ink(topic)]
    pub proposal_id: ProposalId,
}

#[ink::event]
pub struct Voted {
    #[ink(topic)]
    pub voter: AccountId,
    #[ink(topic)]
    pub proposal_id: ProposalId,
}

/// Entry of the contract's event log. Each variant mirrors the contract event of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum VotingEvent {
    WorkflowStatusChange {
        previous_status: WorkflowStatus,
        new_status: WorkflowStatus,
    },
    VoterRegistered {
        voter: AccountId,
    },
    ProposalRegistered {
        proposal_id: ProposalId,
    },
    Voted {
        voter: AccountId,
        proposal_id: ProposalId,
    },
}
