// Lyricbench: stylometric similarity of song lyrics to past winners
//
// This is the library root. Each module corresponds to a stage of the
// single-pass pipeline: load corpora, extract features, build the benchmark,
// rank candidates, render output.

pub mod config;
pub mod corpus;
pub mod features;
pub mod output;
pub mod pipeline;
pub mod scoring;
