use pendzl::math::errors::MathError;

use super::structs::WorkflowStatus;

#[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum VotingError {
    MathError(MathError),

    /// The caller is not the administrator.
    Unauthorized,
    /// The workflow is not in the phase carried by the error, which the operation requires.
    WrongPhase(WorkflowStatus),
    AlreadyRegistered,
    NotAVoter,
    /// The description is empty or whitespace only.
    EmptyProposal,
    AlreadyVoted,
    /// `set_vote` targets an index past the last proposal.
    ProposalNotFound,
    /// `get_one_proposal` was asked for an index past the last proposal.
    IndexOutOfRange,
}

impl From<MathError> for VotingError {
    fn from(e: MathError) -> Self {
        VotingError::MathError(e)
    }
}
