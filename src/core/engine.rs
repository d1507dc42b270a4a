use crate::core::dispatcher::Dispatcher;
use crate::core::session::{Session, SharedSession};
use crate::domain::model::{BatchReport, LineReport, Outcome};

pub struct GuideEngine {
    dispatcher: Dispatcher,
}

impl GuideEngine {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs every non-blank line of `text` in order against `session`.
    pub fn run(&self, session: &mut Session, text: &str) -> BatchReport {
        self.run_with(text, |line| self.dispatcher.dispatch(session, line))
    }

    pub fn run_shared(&self, shared: &SharedSession, text: &str) -> BatchReport {
        self.run_with(text, |line| self.dispatcher.dispatch_shared(shared, line))
    }

    fn run_with(&self, text: &str, mut dispatch: impl FnMut(&str) -> Outcome) -> BatchReport {
        let mut report = BatchReport::default();
        for line in commands(text) {
            let outcome = dispatch(line);
            report.lines.push(LineReport {
                line: line.to_string(),
                outcome,
            });
        }

        let summary = report.summary();
        tracing::info!(
            "Processed {} lines: {} answered, {} rejected, {} not understood, {} faults",
            report.lines.len(),
            summary.answered,
            summary.rejected,
            summary.unrecognized,
            summary.faults
        );
        report
    }
}

impl Default for GuideEngine {
    fn default() -> Self {
        Self::new(Dispatcher::new())
    }
}

fn commands(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
}
