//! Debug panel output.
//!
//! Written by the debug reader, displayed read-only by the signed-in view.
//! Overlapping refreshes simply overwrite each other.

#[cfg(test)]
#[path = "debug_test.rs"]
mod debug_test;

use crate::util::debug_reader::ClerkStateInspection;

pub const INITIAL_DEBUG_INFO: &str = "Debug info will appear here...";
pub const INITIAL_CLERK_STATE_INFO: &str = "Clerk state info...";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugState {
    /// Main report shown in the "Complete Debug Info" card.
    pub info: String,
    /// Short auth-state report from the "Inspect Clerk State" action.
    pub clerk_state_info: String,
    pub busy: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self {
            info: INITIAL_DEBUG_INFO.to_owned(),
            clerk_state_info: INITIAL_CLERK_STATE_INFO.to_owned(),
            busy: false,
        }
    }
}

impl DebugState {
    /// Merge an inspection result; fields the inspection did not reach keep
    /// their previous text.
    pub fn apply_inspection(&mut self, inspection: ClerkStateInspection) {
        self.clerk_state_info = inspection.clerk_state_info;
        if let Some(info) = inspection.info {
            self.info = info;
        }
    }
}
