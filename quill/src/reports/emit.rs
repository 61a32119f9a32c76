//! Emit command report.

use quill_emit::{EmitReport, FileStatus};

use super::output::{Output, Report};

/// Summary of one emission run.
#[derive(Debug)]
pub struct EmitSummary<'a> {
    pub report: &'a EmitReport,
}

impl Report for EmitSummary<'_> {
    fn render(&self, out: &mut dyn Output) {
        for warning in self.report.warnings() {
            out.warning(&warning.message);
        }

        out.key_value("Mode", &self.report.mode.to_string());
        out.newline();

        out.section(&format!("Files ({})", self.report.files.len()));
        for file in &self.report.files {
            let path = file.path.display();
            match &file.status {
                FileStatus::Written => out.added_item(&path.to_string()),
                FileStatus::Skipped => out.list_item(&format!("{} (exists, skipped)", path)),
                FileStatus::Failed { .. } => out.list_item(&format!("{} (failed)", path)),
            }
        }

        out.newline();
        out.key_value(
            "Written",
            &format!(
                "{}, skipped {}, failed {}",
                self.report.written().count(),
                self.report.skipped().count(),
                self.report.failed().count()
            ),
        );
    }
}
