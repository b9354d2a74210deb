use crate::modules::ballot::structs::ProposalId;

/// Returns the index of the proposal with the highest vote count.
///
/// `vote_counts` is consumed in proposal index order. On a tie the earliest index keeps the lead,
/// only a strictly greater count takes it over. An empty sequence yields `0`.
pub fn winning_proposal<I>(vote_counts: I) -> ProposalId
where
    I: IntoIterator<Item = u32>,
{
    let mut winner: ProposalId = 0;
    let mut leading_count: Option<u32> = None;

    for (proposal_id, vote_count) in (0..).zip(vote_counts) {
        let takes_lead = match leading_count {
            Some(leading) => vote_count > leading,
            None => true,
        };
        if takes_lead {
            winner = proposal_id;
            leading_count = Some(vote_count);
        }
    }

    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_index_at_maximum_wins() {
        assert_eq!(winning_proposal([3, 5, 5, 2]), 1);
    }

    #[test]
    fn later_strictly_greater_count_takes_lead() {
        assert_eq!(winning_proposal([0, 1, 1, 4]), 3);
    }

    #[test]
    fn no_votes_keeps_the_sentinel() {
        assert_eq!(winning_proposal([0, 0, 0]), 0);
        assert_eq!(winning_proposal(core::iter::empty()), 0);
    }

    #[test]
    fn sentinel_can_lead() {
        assert_eq!(winning_proposal([2, 1, 2]), 0);
    }
}
