pub mod alias;
pub mod commands;
pub mod dispatcher;
pub mod engine;
pub mod numeral;
pub mod price;
pub mod session;
pub mod symbol;

pub use crate::domain::model::{BatchReport, CommandKind, CommandResult, Outcome};
pub use crate::domain::ports::{Interpreter, Renderer};
pub use crate::utils::error::Result;
