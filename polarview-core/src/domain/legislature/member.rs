// polarview-core/src/domain/legislature/member.rs

use serde::Deserialize;

/// VoteView books the President under this pseudo-state; the pipeline only
/// looks at the legislature, so these rows are excluded.
pub const EXECUTIVE_JURISDICTION: &str = "USA";

const DEMOCRAT_CODE: i64 = 100;
const REPUBLICAN_CODE: i64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Party {
    Democrat,
    Republican,
}

impl Party {
    /// Maps a raw VoteView party code. Anything outside the two main
    /// parties stays unmapped and is dropped by the cleaning stage.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            DEMOCRAT_CODE => Some(Party::Democrat),
            REPUBLICAN_CODE => Some(Party::Republican),
            _ => None,
        }
    }
}

/// One member-vote row as loaded, before any cleaning.
///
/// Every field is optional so that incomplete rows survive deserialization
/// and are excluded by the explicit completeness filter instead of failing
/// the whole load. Field renames match the VoteView CSV headers.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMemberVote {
    #[serde(rename = "congress")]
    pub term: Option<u32>,

    #[serde(rename = "state_abbrev")]
    pub state: Option<String>,

    #[serde(rename = "party_code")]
    pub party_code: Option<i64>,

    #[serde(rename = "nominate_dim1")]
    pub score: Option<f64>,
}

/// A cleaned member-vote row: one legislator in one term, with a mapped
/// party and a first-dimension ideal point.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberVote {
    pub term: u32,
    pub state: String,
    pub party: Party,
    pub score: f64,
}

impl MemberVote {
    /// Applies the row-level cleaning rules: executive rows, unmapped party
    /// codes and rows missing any retained field are excluded silently.
    pub fn from_raw(raw: RawMemberVote) -> Option<Self> {
        let term = raw.term?;
        let state = raw.state?;
        if state == EXECUTIVE_JURISDICTION {
            return None;
        }
        let party = Party::from_code(raw.party_code?)?;
        let score = raw.score?;
        Some(MemberVote {
            term,
            state,
            party,
            score,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn raw(term: u32, state: &str, code: i64, score: f64) -> RawMemberVote {
        RawMemberVote {
            term: Some(term),
            state: Some(state.to_string()),
            party_code: Some(code),
            score: Some(score),
        }
    }

    #[test]
    fn test_party_mapping() {
        assert_eq!(Party::from_code(100), Some(Party::Democrat));
        assert_eq!(Party::from_code(200), Some(Party::Republican));
        // Independents, minor parties, garbage: unmapped
        assert_eq!(Party::from_code(328), None);
        assert_eq!(Party::from_code(0), None);
    }

    #[test]
    fn test_from_raw_keeps_clean_row() {
        let vote = MemberVote::from_raw(raw(114, "CA", 100, -0.42)).unwrap();
        assert_eq!(vote.term, 114);
        assert_eq!(vote.state, "CA");
        assert_eq!(vote.party, Party::Democrat);
        assert_eq!(vote.score, -0.42);
    }

    #[test]
    fn test_from_raw_drops_executive_row() {
        assert!(MemberVote::from_raw(raw(114, "USA", 200, 0.9)).is_none());
    }

    #[test]
    fn test_from_raw_drops_third_party() {
        assert!(MemberVote::from_raw(raw(114, "VT", 328, -0.8)).is_none());
    }

    #[test]
    fn test_from_raw_drops_incomplete_rows() {
        let mut missing_score = raw(114, "CA", 100, 0.0);
        missing_score.score = None;
        assert!(MemberVote::from_raw(missing_score).is_none());

        let mut missing_state = raw(114, "CA", 100, 0.1);
        missing_state.state = None;
        assert!(MemberVote::from_raw(missing_state).is_none());

        let mut missing_party = raw(114, "CA", 100, 0.1);
        missing_party.party_code = None;
        assert!(MemberVote::from_raw(missing_party).is_none());
    }
}
