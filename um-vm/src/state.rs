//! Runtime state representation for the VM

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Resulting state of a single instruction dispatch.
pub enum ExecuteState {
    /// The VM should proceed normally with the execution.
    #[default]
    Proceed,
    /// A halt instruction was reached, or the console asked the machine to
    /// stop.
    Halt,
}

impl ExecuteState {
    /// Return true if the VM execution should continue.
    pub const fn should_continue(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}
