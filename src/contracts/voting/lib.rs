#![cfg_attr(not(feature = "std"), no_std, no_main)]

mod modules;


/// Phased voting contract.
///
/// The administrator registers voters, then walks the workflow through proposal registration,
/// the voting session and the tally. Registered voters submit proposals and cast one vote each.
/// Every successful mutation appends one entry to the contract's event log and emits the
/// matching contract event.
#[ink::contract]
pub mod voting {
    pub use crate::modules::ballot::{
        errors::VotingError,
        events::VotingEvent,
        storage_fields::{
            ballot::BallotStorage,
            event_log::{EventLogStorage, MAX_EVENTS_PAGE},
        },
        structs::{Proposal, ProposalId, Role, Voter, WorkflowStatus, GENESIS_DESCRIPTION},
        traits::{Voting, VotingInternal, VotingManage, VotingView},
    };
    pub use ink::prelude::{string::String, vec::Vec};
    use ink::codegen::Env;

    #[ink(storage)]
    pub struct VotingContract {
        ballot: BallotStorage,
        event_log: EventLogStorage,
    }

    impl VotingContract {
        #[ink(constructor)]
        pub fn new(admin: AccountId) -> Self {
            VotingContract {
                ballot: BallotStorage::new(&admin),
                event_log: EventLogStorage::new(),
            }
        }

        /// Same as `new`, with `admin` also registered as the first voter.
        #[ink(constructor)]
        pub fn new_with_admin_voter(admin: AccountId) -> Result<Self, VotingError> {
            let mut instance = Self::new(admin);

            instance.event_log.next_index()?;
            instance.ballot.register_voter(&admin)?;
            instance
                .event_log
                .record(VotingEvent::VoterRegistered { voter: admin })?;

            Ok(instance)
        }
    }

    impl Voting for VotingContract {
        #[ink(message)]
        fn add_proposal(&mut self, description: String) -> Result<ProposalId, VotingError> {
            let caller = self.env().caller();
            self._ensure_role(&caller, Role::Voter)?;
            self.event_log.next_index()?;

            let proposal_id = self.ballot.register_proposal(description)?;
            self.event_log
                .record(VotingEvent::ProposalRegistered { proposal_id })?;

            Ok(proposal_id)
        }

        #[ink(message)]
        fn set_vote(&mut self, proposal_id: ProposalId) -> Result<(), VotingError> {
            let caller = self.env().caller();
            self._ensure_role(&caller, Role::Voter)?;
            self.event_log.next_index()?;

            self.ballot.record_vote(&caller, proposal_id)?;
            self.event_log.record(VotingEvent::Voted {
                voter: caller,
                proposal_id,
            })?;

            Ok(())
        }
    }

    impl VotingManage for VotingContract {
        #[ink(message)]
        fn add_voter(&mut self, account: AccountId) -> Result<(), VotingError> {
            let caller = self.env().caller();
            self._ensure_role(&caller, Role::Administrator)?;
            self.event_log.next_index()?;

            self.ballot.register_voter(&account)?;
            self.event_log
                .record(VotingEvent::VoterRegistered { voter: account })?;

            Ok(())
        }

        #[ink(message)]
        fn start_proposals_registering(&mut self) -> Result<(), VotingError> {
            self._advance_workflow(WorkflowStatus::RegisteringVoters)
        }

        #[ink(message)]
        fn end_proposals_registering(&mut self) -> Result<(), VotingError> {
            self._advance_workflow(WorkflowStatus::ProposalsRegistrationStarted)
        }

        #[ink(message)]
        fn start_voting_session(&mut self) -> Result<(), VotingError> {
            self._advance_workflow(WorkflowStatus::ProposalsRegistrationEnded)
        }

        #[ink(message)]
        fn end_voting_session(&mut self) -> Result<(), VotingError> {
            self._advance_workflow(WorkflowStatus::VotingSessionStarted)
        }

        #[ink(message)]
        fn tally_votes(&mut self) -> Result<(), VotingError> {
            self._advance_workflow(WorkflowStatus::VotingSessionEnded)
        }
    }

    impl VotingView for VotingContract {
        #[ink(message)]
        fn admin(&self) -> AccountId {
            self.ballot.admin()
        }

        #[ink(message)]
        fn get_voter(&self, account: AccountId) -> Voter {
            self.ballot.voter(&account)
        }

        #[ink(message)]
        fn get_one_proposal(&self, proposal_id: ProposalId) -> Result<Proposal, VotingError> {
            self.ballot
                .proposal(proposal_id)
                .ok_or(VotingError::IndexOutOfRange)
        }

        #[ink(message)]
        fn proposal_count(&self) -> u32 {
            self.ballot.proposal_count()
        }

        #[ink(message)]
        fn workflow_status(&self) -> WorkflowStatus {
            self.ballot.status()
        }

        #[ink(message)]
        fn winning_proposal_id(&self) -> ProposalId {
            self.ballot.winning_proposal_id()
        }

        #[ink(message)]
        fn event_count(&self) -> u32 {
            self.event_log.len()
        }

        #[ink(message)]
        fn event_at(&self, index: u32) -> Option<VotingEvent> {
            self.event_log.entry(index)
        }

        #[ink(message)]
        fn events(&self, from: u32, limit: u32) -> Vec<VotingEvent> {
            self.event_log.page(from, limit)
        }
    }

    impl VotingInternal for VotingContract {
        fn _ensure_role(&self, account: &AccountId, role: Role) -> Result<(), VotingError> {
            match role {
                Role::Administrator if *account != self.ballot.admin() => {
                    Err(VotingError::Unauthorized)
                }
                Role::Voter if !self.ballot.voter(account).is_registered => {
                    Err(VotingError::NotAVoter)
                }
                _ => Ok(()),
            }
        }

        fn _advance_workflow(&mut self, from: WorkflowStatus) -> Result<(), VotingError> {
            let caller = self.env().caller();
            self._ensure_role(&caller, Role::Administrator)?;
            self.event_log.next_index()?;

            let new_status = self.ballot.advance(from)?;
            self.event_log.record(VotingEvent::WorkflowStatusChange {
                previous_status: from,
                new_status,
            })?;

            Ok(())
        }
    }

    #[cfg(test)]
    mod full_log_tests {
        use super::*;
        use ink::env::{test, DefaultEnvironment};
        use pendzl::math::errors::MathError;

        #[ink::test]
        fn full_log_leaves_ballot_untouched() {
            let accounts = test::default_accounts::<DefaultEnvironment>();
            test::set_caller::<DefaultEnvironment>(accounts.alice);
            let mut contract = VotingContract::new(accounts.alice);
            contract.add_voter(accounts.bob).unwrap();
            contract.event_log.set_len(u32::MAX);

            assert_eq!(
                contract.add_voter(accounts.charlie),
                Err(VotingError::MathError(MathError::Overflow))
            );
            assert!(!contract.get_voter(accounts.charlie).is_registered);

            assert_eq!(
                contract.start_proposals_registering(),
                Err(VotingError::MathError(MathError::Overflow))
            );
            assert_eq!(contract.workflow_status(), WorkflowStatus::RegisteringVoters);
            assert_eq!(contract.proposal_count(), 0);
            assert_eq!(test::recorded_events().count(), 1);
        }
    }
}
