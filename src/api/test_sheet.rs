//! Implements the `Sheet` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can
//! run the whole program, top-to-bottom, without using Google Sheets.

use crate::api::Sheet;
use crate::Result;
use tracing::info;

/// A `Sheet` implementation that records writes instead of calling Google.
#[derive(Debug, Default)]
pub(crate) struct TestSheet {
    writes: Vec<SheetWrite>,
}

/// One recorded `write` call.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct SheetWrite {
    pub(crate) worksheet: String,
    pub(crate) range: String,
    pub(crate) values: Vec<Vec<String>>,
}

impl TestSheet {
    pub(crate) fn writes(&self) -> &[SheetWrite] {
        &self.writes
    }
}

#[async_trait::async_trait]
impl Sheet for TestSheet {
    async fn write(
        &mut self,
        worksheet: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> Result<()> {
        info!(
            "Test mode: recording a write of {} rows to '{worksheet}'!{range}",
            values.len()
        );
        self.writes.push(SheetWrite {
            worksheet: worksheet.to_string(),
            range: range.to_string(),
            values,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_are_recorded_in_order() {
        let mut sheet = TestSheet::default();
        sheet
            .write("Tab", "A:Z", vec![vec!["a".to_string()]])
            .await
            .unwrap();
        sheet
            .write("Tab", "A:Z", vec![vec!["b".to_string()]])
            .await
            .unwrap();
        assert_eq!(sheet.writes().len(), 2);
        assert_eq!(sheet.writes()[1].values, vec![vec!["b".to_string()]]);
    }
}
