use ink::{prelude::borrow::ToOwned, storage::Mapping};
use pendzl::{
    math::errors::MathError,
    traits::{AccountId, String},
};

use crate::modules::ballot::{
    errors::VotingError,
    helpers::tally::winning_proposal,
    structs::{Proposal, ProposalId, Voter, WorkflowStatus, GENESIS_DESCRIPTION},
};

#[derive(Debug)]
#[pendzl::storage_item]
pub struct BallotStorage {
    admin: AccountId,
    #[lazy]
    status: WorkflowStatus,
    #[lazy]
    winning_proposal_id: ProposalId,
    #[lazy]
    proposal_count: u32,
    voters: Mapping<AccountId, Voter>,
    proposals: Mapping<ProposalId, Proposal>,
}

impl BallotStorage {
    pub fn new(admin: &AccountId) -> Self {
        BallotStorage {
            admin: *admin,
            status: Default::default(),
            winning_proposal_id: Default::default(),
            proposal_count: Default::default(),
            voters: Mapping::new(),
            proposals: Mapping::new(),
        }
    }

    pub fn admin(&self) -> AccountId {
        self.admin
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status.get().unwrap_or_default()
    }

    pub fn winning_proposal_id(&self) -> ProposalId {
        self.winning_proposal_id.get().unwrap_or_default()
    }

    pub fn proposal_count(&self) -> u32 {
        self.proposal_count.get().unwrap_or_default()
    }

    /// Returns the record of `account`, the zero value if it was never registered.
    pub fn voter(&self, account: &AccountId) -> Voter {
        self.voters.get(account).unwrap_or_default()
    }

    pub fn proposal(&self, proposal_id: ProposalId) -> Option<Proposal> {
        self.proposals.get(proposal_id)
    }

    fn ensure_status(&self, expected: WorkflowStatus) -> Result<(), VotingError> {
        if self.status() != expected {
            return Err(VotingError::WrongPhase(expected));
        }
        Ok(())
    }

    pub fn register_voter(&mut self, account: &AccountId) -> Result<(), VotingError> {
        self.ensure_status(WorkflowStatus::RegisteringVoters)?;
        if self.voter(account).is_registered {
            return Err(VotingError::AlreadyRegistered);
        }

        self.voters.insert(
            account,
            &Voter {
                is_registered: true,
                ..Default::default()
            },
        );
        Ok(())
    }

    pub fn register_proposal(&mut self, description: String) -> Result<ProposalId, VotingError> {
        self.ensure_status(WorkflowStatus::ProposalsRegistrationStarted)?;
        if description.trim().is_empty() {
            return Err(VotingError::EmptyProposal);
        }

        Ok(self.push_proposal(description)?)
    }

    /// Records the only vote of `account` for `proposal_id`.
    ///
    /// `account` must already be a registered voter.
    pub fn record_vote(
        &mut self,
        account: &AccountId,
        proposal_id: ProposalId,
    ) -> Result<(), VotingError> {
        self.ensure_status(WorkflowStatus::VotingSessionStarted)?;

        let mut voter = self.voter(account);
        if voter.has_voted {
            return Err(VotingError::AlreadyVoted);
        }
        let mut proposal = self
            .proposal(proposal_id)
            .ok_or(VotingError::ProposalNotFound)?;

        proposal.vote_count = proposal
            .vote_count
            .checked_add(1)
            .ok_or(MathError::Overflow)?;
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;

        self.proposals.insert(proposal_id, &proposal);
        self.voters.insert(account, &voter);
        Ok(())
    }

    /// Moves the workflow one phase forward from `from`, applying the side effect of the phase
    /// being entered. Returns the new phase.
    pub fn advance(&mut self, from: WorkflowStatus) -> Result<WorkflowStatus, VotingError> {
        self.ensure_status(from)?;
        let new_status = from.next().ok_or(VotingError::WrongPhase(from))?;

        match new_status {
            WorkflowStatus::ProposalsRegistrationStarted => {
                self.push_proposal(GENESIS_DESCRIPTION.to_owned())?;
            }
            WorkflowStatus::VotesTallied => {
                let winner = winning_proposal(
                    (0..self.proposal_count()).map(|id| {
                        self.proposal(id).map(|p| p.vote_count).unwrap_or_default()
                    }),
                );
                ink::env::debug_println!("winning_proposal_id: {:?}", winner);
                self.winning_proposal_id.set(&winner);
            }
            _ => {}
        }

        ink::env::debug_println!("workflow status: {:?} -> {:?}", from, new_status);
        self.status.set(&new_status);
        Ok(new_status)
    }

    fn push_proposal(&mut self, description: String) -> Result<ProposalId, MathError> {
        let proposal_id = self.proposal_count();
        let new_count = proposal_id.checked_add(1).ok_or(MathError::Overflow)?;

        self.proposals.insert(
            proposal_id,
            &Proposal {
                description,
                vote_count: 0,
            },
        );
        self.proposal_count.set(&new_count);
        Ok(proposal_id)
    }
}
