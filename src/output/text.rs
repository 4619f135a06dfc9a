use crate::fmt;

pub struct Text {
    header: String,
    values: Vec<String>,
}

impl Text {
    pub fn new(header: &str, values: Vec<String>) -> Self {
        Self {
            header: header.into(),
            values,
        }
    }
}

impl crate::output::Column for Text {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn calculate_width(&self) -> usize {
        let max_value_width = self
            .values
            .iter()
            .map(|value| value.chars().count())
            .max()
            .unwrap_or(0);

        max_value_width.max(self.header.chars().count())
    }

    fn format_header(&self, width: usize) -> String {
        fmt!("{:<width$}", self.header, width = width)
    }

    fn format_cell(&self, row_index: usize, width: usize) -> String {
        fmt!("{:<width$}", self.values[row_index], width = width)
    }
}

impl From<Text> for Box<dyn crate::output::Column> {
    fn from(t: Text) -> Self {
        Box::new(t)
    }
}
