use ink::{env::DefaultEnvironment, prelude::vec::Vec, storage::Mapping};
use pendzl::math::errors::MathError;

use crate::modules::ballot::events::{
    ProposalRegistered, Voted, VoterRegistered, VotingEvent, WorkflowStatusChange,
};

/// Largest number of entries returned by one `page` read.
pub const MAX_EVENTS_PAGE: u32 = 100;

/// Append-only log of everything the contract emitted, readable through the view messages.
#[derive(Debug)]
#[pendzl::storage_item]
pub struct EventLogStorage {
    #[lazy]
    len: u32,
    entries: Mapping<u32, VotingEvent>,
}

impl EventLogStorage {
    pub fn new() -> Self {
        EventLogStorage {
            len: Default::default(),
            entries: Mapping::new(),
        }
    }

    pub fn len(&self) -> u32 {
        self.len.get().unwrap_or_default()
    }

    pub fn entry(&self, index: u32) -> Option<VotingEvent> {
        self.entries.get(index)
    }

    /// Returns up to `limit` entries starting at `from`, never more than `MAX_EVENTS_PAGE`.
    pub fn page(&self, from: u32, limit: u32) -> Vec<VotingEvent> {
        let end = from
            .saturating_add(limit.min(MAX_EVENTS_PAGE))
            .min(self.len());
        (from..end)
            .filter_map(|index| self.entries.get(index))
            .collect()
    }

    /// Returns the index the next recorded event will get.
    ///
    /// # Errors
    /// Returns `Overflow` if the log cannot take another entry.
    pub fn next_index(&self) -> Result<u32, MathError> {
        let index = self.len();
        index.checked_add(1).ok_or(MathError::Overflow)?;
        Ok(index)
    }

    /// Appends `event` at the end of the log and emits the matching contract event.
    ///
    /// Returns the index the event was stored at.
    pub fn record(&mut self, event: VotingEvent) -> Result<u32, MathError> {
        let index = self.next_index()?;
        let new_len = index.checked_add(1).ok_or(MathError::Overflow)?;

        self.entries.insert(index, &event);
        self.len.set(&new_len);
        emit(event);

        Ok(index)
    }
}

fn emit(event: VotingEvent) {
    match event {
        VotingEvent::WorkflowStatusChange {
            previous_status,
            new_status,
        } => ink::env::emit_event::<DefaultEnvironment, WorkflowStatusChange>(
            WorkflowStatusChange {
                previous_status,
                new_status,
            },
        ),
        VotingEvent::VoterRegistered { voter } => {
            ink::env::emit_event::<DefaultEnvironment, VoterRegistered>(VoterRegistered { voter })
        }
        VotingEvent::ProposalRegistered { proposal_id } => {
            ink::env::emit_event::<DefaultEnvironment, ProposalRegistered>(ProposalRegistered {
                proposal_id,
            })
        }
        VotingEvent::Voted { voter, proposal_id } => {
            ink::env::emit_event::<DefaultEnvironment, Voted>(Voted { voter, proposal_id })
        }
    }
}

#[cfg(test)]
impl EventLogStorage {
    pub fn set_len(&mut self, len: u32) {
        self.len.set(&len);
    }
}
