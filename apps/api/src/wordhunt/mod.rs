// Daily word-hunt puzzle: seeded grid generation, path validation, scoring,
// one-submission-per-day ledger and per-day leaderboard.
// Grid generation and path search are pure; only seeds and scores touch the store.

pub mod dictionary;
pub mod grid;
pub mod handlers;
pub mod leaderboard;
pub mod ledger;
pub mod path;
pub mod rng;
pub mod scoring;
pub mod seed;
