/// Rows of collected tweets as read from CSV, before typing.
///
/// Tables with different headers can be appended: the columns become the
/// union of both, in first-seen order, and a cell a row never had is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TweetTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TweetTable {
    pub fn new(columns: Vec<String>) -> Self {
        TweetTable {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Push a row, padding or truncating it to the table's width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Append every row of `other` after the rows already here.
    pub fn append(&mut self, other: TweetTable) {
        let positions: Vec<usize> = other
            .columns
            .into_iter()
            .map(|name| match self.columns.iter().position(|c| *c == name) {
                Some(position) => position,
                None => {
                    self.columns.push(name);
                    self.columns.len() - 1
                }
            })
            .collect();

        let width = self.columns.len();
        for row in self.rows.iter_mut() {
            row.resize(width, String::new());
        }
        for row in other.rows {
            let mut aligned = vec![String::new(); width];
            for (cell, &position) in row.into_iter().zip(positions.iter()) {
                aligned[position] = cell;
            }
            self.rows.push(aligned);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> TweetTable {
        let mut table = TweetTable::new(columns.iter().map(|c| c.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|c| c.to_string()).collect());
        }
        table
    }

    #[test]
    fn it_should_append_rows_in_order() {
        let mut first = table(&["date", "tweet"], &[&["2020-06-19", "um"]]);
        first.append(table(&["date", "tweet"], &[&["2020-06-26", "dois"]]));

        assert_eq!(first.len(), 2);
        assert_eq!(first.rows()[0], vec!["2020-06-19", "um"]);
        assert_eq!(first.rows()[1], vec!["2020-06-26", "dois"]);
    }

    #[test]
    fn it_should_union_columns() {
        let mut first = table(&["date", "tweet"], &[&["2020-06-19", "um"]]);
        first.append(table(&["hashtags", "date"], &[&["[]", "2020-06-26"]]));

        assert_eq!(first.columns(), &["date", "tweet", "hashtags"]);
        assert_eq!(first.rows()[0], vec!["2020-06-19", "um", ""]);
        assert_eq!(first.rows()[1], vec!["2020-06-26", "", "[]"]);
    }

    #[test]
    fn it_should_adopt_columns_when_empty() {
        let mut combined = TweetTable::default();
        combined.append(table(&["date"], &[&["2020-06-19"]]));
        assert!(combined.has_column("date"));
        assert_eq!(combined.len(), 1);
    }
}
