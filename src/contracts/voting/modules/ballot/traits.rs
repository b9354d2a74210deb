use super::{
    errors::VotingError,
    events::VotingEvent,
    structs::{Proposal, ProposalId, Role, Voter, WorkflowStatus},
};
use ink::prelude::vec::Vec;
use pendzl::traits::{AccountId, String};

#[ink::trait_definition]
/// Messages available to registered voters.
pub trait Voting {
    /// Registers a proposal described by `description` and returns its id.
    ///
    /// On success emits `ProposalRegistered` event.
    ///
    /// # Errors
    /// Returns `NotAVoter` if `caller` is not a registered voter.
    /// Returns `WrongPhase` if proposal registration is not open.
    /// Returns `EmptyProposal` if `description` is empty or only whitespace.
    #[ink(message)]
    fn add_proposal(&mut self, description: String) -> Result<ProposalId, VotingError>;

    /// Casts the `caller`'s vote for `proposal_id`.
    ///
    /// On success emits `Voted` event.
    ///
    /// # Errors
    /// Returns `NotAVoter` if `caller` is not a registered voter.
    /// Returns `WrongPhase` if the voting session is not open.
    /// Returns `AlreadyVoted` if `caller` has already voted.
    /// Returns `ProposalNotFound` if there is no proposal with `proposal_id`.
    #[ink(message)]
    fn set_vote(&mut self, proposal_id: ProposalId) -> Result<(), VotingError>;
}

#[ink::trait_definition]
/// Administrator only messages. Each phase transition emits `WorkflowStatusChange` on success
/// and returns `Unauthorized` for any caller other than the administrator, or `WrongPhase` if
/// the workflow is not in the phase directly preceding the target one.
pub trait VotingManage {
    /// Registers `account` as a voter.
    ///
    /// On success emits `VoterRegistered` event.
    ///
    /// # Errors
    /// Returns `Unauthorized` if `caller` is not the administrator.
    /// Returns `WrongPhase` if voter registration is closed.
    /// Returns `AlreadyRegistered` if `account` is already a voter.
    #[ink(message)]
    fn add_voter(&mut self, account: AccountId) -> Result<(), VotingError>;

    /// Opens proposal registration and registers the `GENESIS` proposal under id 0.
    #[ink(message)]
    fn start_proposals_registering(&mut self) -> Result<(), VotingError>;

    #[ink(message)]
    fn end_proposals_registering(&mut self) -> Result<(), VotingError>;

    #[ink(message)]
    fn start_voting_session(&mut self) -> Result<(), VotingError>;

    #[ink(message)]
    fn end_voting_session(&mut self) -> Result<(), VotingError>;

    /// Closes the workflow and stores the id of the winning proposal.
    /// Ties go to the proposal with the lowest id.
    #[ink(message)]
    fn tally_votes(&mut self) -> Result<(), VotingError>;
}

#[ink::trait_definition]
pub trait VotingView {
    /// Returns the administrator account.
    #[ink(message)]
    fn admin(&self) -> AccountId;

    /// Returns the voter record of `account`. Unknown accounts get an unregistered record.
    #[ink(message)]
    fn get_voter(&self, account: AccountId) -> Voter;

    /// Returns the proposal with `proposal_id`.
    ///
    /// # Errors
    /// Returns `IndexOutOfRange` if there is no such proposal.
    #[ink(message)]
    fn get_one_proposal(&self, proposal_id: ProposalId) -> Result<Proposal, VotingError>;

    /// Returns the number of proposals, the `GENESIS` one included.
    #[ink(message)]
    fn proposal_count(&self) -> u32;

    #[ink(message)]
    fn workflow_status(&self) -> WorkflowStatus;

    /// Returns the id set by `tally_votes`, 0 before the tally.
    #[ink(message)]
    fn winning_proposal_id(&self) -> ProposalId;

    /// Returns the number of entries in the event log.
    #[ink(message)]
    fn event_count(&self) -> u32;

    /// Returns the event log entry at `index`.
    #[ink(message)]
    fn event_at(&self, index: u32) -> Option<VotingEvent>;

    /// Returns up to `limit` event log entries starting at index `from`, in emission order.
    /// At most `MAX_EVENTS_PAGE` entries are returned per call.
    #[ink(message)]
    fn events(&self, from: u32, limit: u32) -> Vec<VotingEvent>;
}

pub trait VotingInternal {
    /// Checks that `account` holds `role`.
    ///
    /// # Errors
    /// Returns `Unauthorized` for `Role::Administrator` and `NotAVoter` for `Role::Voter`.
    fn _ensure_role(&self, account: &AccountId, role: Role) -> Result<(), VotingError>;

    /// Moves the workflow from `from` to the next phase on behalf of the caller.
    ///
    /// On success emits `WorkflowStatusChange` event.
    fn _advance_workflow(&mut self, from: WorkflowStatus) -> Result<(), VotingError>;
}
