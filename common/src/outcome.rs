/// The result record produced for one input line after probing completes.
///
/// `target` echoes the normalized target label so consumers can correlate
/// outcomes back to their input lines regardless of delivery order.
/// `message` is a short display-ready phrase, not a structured error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub target: String,
    pub success: bool,
    pub message: String,
}

impl ProbeOutcome {
    pub fn reachable(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            success: true,
            message: message.into(),
        }
    }

    pub fn unreachable(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            success: false,
            message: message.into(),
        }
    }
}
