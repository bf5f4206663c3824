//! Pipeline state machine

/// States of one generation run.
///
/// The pipeline moves strictly forward; `Failed` is terminal and reachable
/// from any state. Side effects are confined to the `Written` transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenState {
    Loaded,
    Validated,
    VariablesResolved,
    DocumentsResolved,
    Emitted,
    Written,
    Failed,
}

impl GenState {
    /// Whether the run can still advance.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GenState::Written | GenState::Failed)
    }

    /// Whether filesystem side effects have happened by this state.
    pub fn has_side_effects(&self) -> bool {
        matches!(self, GenState::Written)
    }
}

impl std::fmt::Display for GenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GenState::Loaded => "loaded",
            GenState::Validated => "validated",
            GenState::VariablesResolved => "variables-resolved",
            GenState::DocumentsResolved => "documents-resolved",
            GenState::Emitted => "emitted",
            GenState::Written => "written",
            GenState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}
