pub mod decision;
pub mod paths;

pub use decision::{decide, GateDecision};
pub use paths::{classify, MatchKind, PathClass, PathRule};
