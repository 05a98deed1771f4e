// Scoring: benchmark statistics over the winners and ranking of candidates.

pub mod benchmark;
pub mod rank;
