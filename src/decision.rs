//! Decision types for hook responses.

/// The result of evaluating a proposed command.
#[derive(Debug, Clone)]
pub enum Decision {
    /// Allow the command to proceed.
    Allow,
    /// Block the command with a reason.
    Block(BlockInfo),
}

/// Information about why a command was blocked.
#[derive(Debug, Clone)]
pub struct BlockInfo {
    /// The rule that triggered the block.
    pub rule: String,
    /// Human-readable reason for blocking.
    pub reason: String,
}

impl BlockInfo {
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl Decision {
    /// Create an allow decision.
    pub fn allow() -> Self {
        Decision::Allow
    }

    /// Create a block decision.
    pub fn block(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Decision::Block(BlockInfo::new(rule, reason))
    }

    /// Check if this is a block decision.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Decision::Block(_))
    }

    /// Get the block info if blocked.
    pub fn block_info(&self) -> Option<&BlockInfo> {
        match self {
            Decision::Block(info) => Some(info),
            Decision::Allow => None,
        }
    }
}
