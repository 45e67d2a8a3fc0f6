#![deny(unsafe_code)]

//! CSV loading for import runs: the roster file plus the two candidate
//! pool exports (mentors, mentees).

mod csv_roster;

pub use csv_roster::{read_mentees, read_mentors, read_roster};
