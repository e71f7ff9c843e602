/// Module with the accepting states recorded during a scan.
mod accepting_history;
pub(crate) use accepting_history::{AcceptState, AcceptingHistory};

/// Module with conversion to graphviz dot format
#[cfg(feature = "dot_writer")]
pub(crate) mod dot;

/// Module with the scan loop shared by the matchers.
mod matcher_core;
pub(crate) use matcher_core::MatcherCore;
