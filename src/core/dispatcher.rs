use crate::core::commands::{DefineAlias, DefinePrice, QueryPrice, QueryValue};
use crate::core::session::{Session, SharedSession};
use crate::domain::model::Outcome;
use crate::domain::ports::Interpreter;
use crate::utils::error::GuideError;

/// Routes a line to the first interpreter whose pattern accepts it.
///
/// Interpreters are tried in registration order and the first structural
/// match owns the line, even when its handler then rejects the content.
pub struct Dispatcher {
    interpreters: Vec<Box<dyn Interpreter>>,
}

impl Dispatcher {
    /// define-alias, define-price, query-value, query-price.
    pub fn new() -> Self {
        Self::with_interpreters(vec![
            Box::new(DefineAlias::new()),
            Box::new(DefinePrice::new()),
            Box::new(QueryValue::new()),
            Box::new(QueryPrice::new()),
        ])
    }

    pub fn with_interpreters(interpreters: Vec<Box<dyn Interpreter>>) -> Self {
        Self { interpreters }
    }

    pub fn dispatch(&self, session: &mut Session, line: &str) -> Outcome {
        for interpreter in &self.interpreters {
            let Some(captures) = interpreter.matches(line) else {
                continue;
            };

            let command = interpreter.kind();
            tracing::debug!("'{}' matched {}", line, command);
            return match interpreter.handle(session, &captures) {
                Ok(message) => Outcome::Answered { command, message },
                Err(error) if error.is_user_facing() => {
                    tracing::debug!("{} rejected '{}': {}", command, line, error);
                    Outcome::Rejected { command, error }
                }
                Err(error) => {
                    tracing::error!("{} failed on '{}': {}", command, line, error);
                    Outcome::Fault {
                        command: Some(command),
                        error,
                    }
                }
            };
        }

        let error = GuideError::UnrecognizedCommand {
            line: line.to_string(),
        };
        tracing::warn!("{}", error);
        Outcome::Unrecognized
    }

    /// Dispatches while holding the session lock for the whole command.
    pub fn dispatch_shared(&self, shared: &SharedSession, line: &str) -> Outcome {
        match shared.with(|session| self.dispatch(session, line)) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::error!("Cannot dispatch '{}': {}", line, error);
                Outcome::Fault {
                    command: None,
                    error,
                }
            }
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
