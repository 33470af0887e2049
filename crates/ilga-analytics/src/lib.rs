//! Analytics Engine: per-member scorecards, the Moneyball composite, and
//! the Senate seating/whisper network.

pub mod centrality;
pub mod moneyball;
pub mod scorecard;
pub mod seating;

pub use moneyball::{compute_moneyball, mvp, rank_chamber, rank_overall, LEADERSHIP_THRESHOLD};
pub use scorecard::compute_scorecards;
pub use seating::{apply_seating, SeatChart};
