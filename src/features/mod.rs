// Feature extraction: turns raw lyric text into a four-feature stylometric vector.

pub mod extract;
pub mod phrases;
pub mod traits;
pub mod vector;
