/// The only failure an arithmetic operation can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,
}
