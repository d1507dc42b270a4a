use crate::config::OutputFormat;
use crate::domain::model::BatchReport;
use crate::domain::ports::Renderer;
use crate::utils::error::{GuideError, Result};
use serde::Serialize;

pub const NO_CONTENT: &str = "No content, please enter instructions";
const HEADING: &str = "Test Output:";

#[derive(Debug, Serialize)]
struct Row<'a> {
    line: &'a str,
    status: bool,
    message: String,
}

fn rows(report: &BatchReport) -> Vec<Row<'_>> {
    report
        .lines
        .iter()
        .map(|l| {
            let result = l.outcome.to_result();
            Row {
                line: &l.line,
                status: result.status,
                message: result.message.unwrap_or_default(),
            }
        })
        .collect()
}

/// `<line><separator><message>` per answered line.
pub struct TextRenderer {
    separator: String,
}

impl TextRenderer {
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, report: &BatchReport) -> Result<String> {
        if report.is_empty() {
            return Ok(format!("{}\n", NO_CONTENT));
        }

        let mut out = format!("{}\n", HEADING);
        for line in &report.lines {
            // 定義指令成功時沒有訊息
            if let Some(message) = line.outcome.to_result().message {
                out.push_str(&format!("{}{}{}\n", line.line, self.separator, message));
            }
        }
        Ok(out)
    }
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, report: &BatchReport) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&rows(report))?;
        out.push('\n');
        Ok(out)
    }
}

pub struct CsvRenderer {
    delimiter: u8,
}

impl CsvRenderer {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Renderer for CsvRenderer {
    fn render(&self, report: &BatchReport) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        // 空批次也輸出表頭
        writer.write_record(["line", "status", "message"])?;
        for row in rows(report) {
            let status = row.status.to_string();
            writer.write_record([row.line, status.as_str(), row.message.as_str()])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| GuideError::internal(format!("flushing CSV output: {}", e)))?;
        String::from_utf8(bytes).map_err(|e| GuideError::internal(e.to_string()))
    }
}

pub fn renderer_for(format: OutputFormat, separator: &str) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(separator)),
        OutputFormat::Json => Box::new(JsonRenderer),
        OutputFormat::Csv => Box::new(CsvRenderer::csv()),
        OutputFormat::Tsv => Box::new(CsvRenderer::tsv()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::GuideEngine;
    use crate::core::session::Session;

    fn report() -> BatchReport {
        let mut session = Session::new();
        GuideEngine::default().run(
            &mut session,
            "glob is I\nhow much is glob glob ?\nwhat is this",
        )
    }

    #[test]
    fn test_text_skips_silent_lines() {
        let text = TextRenderer::new(" -> ").render(&report()).unwrap();
        assert_eq!(
            text,
            "Test Output:\n\
             how much is glob glob ? -> glob glob is 2\n\
             what is this -> I have no idea what you are talking about\n"
        );
    }

    #[test]
    fn test_text_empty_batch() {
        let text = TextRenderer::new(" -> ").render(&BatchReport::default()).unwrap();
        assert_eq!(text, "No content, please enter instructions\n");
    }

    #[test]
    fn test_json_has_one_object_per_line() {
        let json = JsonRenderer.render(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["status"], true);
        assert_eq!(rows[0]["message"], "");
        assert_eq!(rows[2]["status"], false);
    }

    #[test]
    fn test_csv_and_tsv() {
        let csv = CsvRenderer::csv().render(&report()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("line,status,message"));
        assert_eq!(lines.next(), Some("glob is I,true,"));
        assert_eq!(lines.next(), Some("how much is glob glob ?,true,glob glob is 2"));

        let tsv = CsvRenderer::tsv().render(&report()).unwrap();
        assert!(tsv.starts_with("line\tstatus\tmessage\n"));
    }
}
