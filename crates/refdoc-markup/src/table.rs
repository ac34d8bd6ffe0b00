//! Summary table helper.

use crate::error::MarkupError;
use crate::tag::Tag;
use crate::writer::MarkupWriter;

/// Named HTML table rendered as a Bootstrap panel.
///
/// Cells are HTML fragments and are written verbatim; escape plain text
/// before adding it.
#[derive(Debug)]
pub struct TableBuilder {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    column_headers: bool,
}

impl TableBuilder {
    /// Create a table with a panel heading and column descriptions.
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            column_headers: false,
        }
    }

    /// Emit a header row with the column descriptions.
    #[must_use]
    pub fn with_column_headers(mut self, enabled: bool) -> Self {
        self.column_headers = enabled;
        self
    }

    /// Add a row; it must hold exactly one value per column.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::ColumnMismatch`] when the value count differs
    /// from the column count.
    pub fn row(&mut self, values: Vec<String>) -> Result<(), MarkupError> {
        if values.len() != self.columns.len() {
            return Err(MarkupError::ColumnMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    /// Number of rows added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table into `w`.
    pub fn render(&self, w: &mut MarkupWriter) -> Result<(), MarkupError> {
        w.div(&[("class", "panel panel-default")]);

        w.div(&[("class", "panel-heading")]);
        w.heading(&self.name, 4);
        w.close_tag_indented()?; // panel-heading

        w.open_tag_indented(
            Tag::Table,
            &[("class", "table table-striped table-condensed")],
        );

        if self.column_headers {
            w.open_tag_indented(Tag::Tr, &[]);
            for column in &self.columns {
                w.content(Tag::Th, column, &[]);
            }
            w.close_tag_indented()?;
        }

        for row in &self.rows {
            w.open_tag_indented(Tag::Tr, &[]);
            for (i, cell) in row.iter().enumerate() {
                if i == 0 {
                    w.open_tag(Tag::Td, &[("class", "col-xs-3")]);
                } else {
                    w.open_tag(Tag::Td, &[]);
                }
                w.write(cell);
                w.close_tag()?;
            }
            w.close_tag_indented()?;
        }

        w.close_tag_indented()?; // table
        w.close_tag_indented() // panel
    }
}
