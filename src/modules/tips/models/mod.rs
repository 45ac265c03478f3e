pub mod tip;

pub use tip::{Participant, Tip, TipRequest};
