use crate::core::session::Session;
use crate::domain::model::{BatchReport, CommandKind};
use crate::utils::error::Result;
use regex::Captures;

/// One sentence form: a pure matcher over the raw line plus the handler that
/// runs once the matcher has accepted it.
pub trait Interpreter: Send + Sync {
    fn kind(&self) -> CommandKind;

    fn matches<'l>(&self, line: &'l str) -> Option<Captures<'l>>;

    /// Returns the reply text, or `None` for a silent acknowledgement.
    fn handle(&self, session: &mut Session, captures: &Captures<'_>) -> Result<Option<String>>;
}

pub trait Renderer: Send + Sync {
    fn render(&self, report: &BatchReport) -> Result<String>;
}
