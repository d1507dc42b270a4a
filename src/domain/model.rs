use crate::utils::error::{GuideError, NOT_UNDERSTOOD};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    DefineAlias,
    DefinePrice,
    QueryValue,
    QueryPrice,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CommandKind::DefineAlias => "define-alias",
            CommandKind::DefinePrice => "define-price",
            CommandKind::QueryValue => "query-value",
            CommandKind::QueryPrice => "query-price",
        };
        f.write_str(name)
    }
}

/// What happened to one input line.
#[derive(Debug)]
pub enum Outcome {
    /// The command ran; definitions answer with no message.
    Answered {
        command: CommandKind,
        message: Option<String>,
    },
    /// The command was recognized but its content was unusable.
    Rejected {
        command: CommandKind,
        error: GuideError,
    },
    Unrecognized,
    Fault {
        command: Option<CommandKind>,
        error: GuideError,
    },
}

impl Outcome {
    pub fn command(&self) -> Option<CommandKind> {
        match self {
            Outcome::Answered { command, .. } | Outcome::Rejected { command, .. } => Some(*command),
            Outcome::Unrecognized => None,
            Outcome::Fault { command, .. } => *command,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Answered { .. } | Outcome::Rejected { .. })
    }

    pub fn to_result(&self) -> CommandResult {
        match self {
            Outcome::Answered { message, .. } => CommandResult {
                status: true,
                message: message.clone(),
            },
            Outcome::Rejected { error, .. } => CommandResult {
                status: true,
                message: Some(error.user_friendly_message()),
            },
            Outcome::Unrecognized | Outcome::Fault { .. } => CommandResult {
                status: false,
                message: Some(NOT_UNDERSTOOD.to_string()),
            },
        }
    }
}

/// The per-line record handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    pub status: bool,
    pub message: Option<String>,
}

#[derive(Debug)]
pub struct LineReport {
    pub line: String,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub answered: usize,
    pub rejected: usize,
    pub unrecognized: usize,
    pub faults: usize,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub lines: Vec<LineReport>,
}

impl BatchReport {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn results(&self) -> Vec<CommandResult> {
        self.lines.iter().map(|l| l.outcome.to_result()).collect()
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary::default();
        for report in &self.lines {
            match report.outcome {
                Outcome::Answered { .. } => summary.answered += 1,
                Outcome::Rejected { .. } => summary.rejected += 1,
                Outcome::Unrecognized => summary.unrecognized += 1,
                Outcome::Fault { .. } => summary.faults += 1,
            }
        }
        summary
    }
}
