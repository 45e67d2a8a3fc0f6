#![deny(unsafe_code)]

pub mod matcher;
pub mod normalize;
pub mod score;

pub use matcher::{MentorIndex, MentorMatcher};
pub use normalize::normalize;
pub use score::{distance, similarity};
