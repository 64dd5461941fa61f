/// RawRecord: one paragraph of a control file, before normalization
///
/// Field names are case-sensitive and kept in first-seen order. A field
/// that occurs twice keeps its original position and takes the later
/// value (last-wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
    line_number: usize,
}

impl RawRecord {
    /// Creates an empty record whose first line is `line_number` (1-based)
    pub fn new(line_number: usize) -> Self {
        Self {
            fields: Vec::new(),
            line_number,
        }
    }

    /// Inserts a field, replacing the value of an existing field with the same name
    ///
    /// # Returns
    /// The position of the field, to be used with [`RawRecord::append_line`]
    pub fn insert(&mut self, name: &str, value: String) -> usize {
        if let Some(position) = self.fields.iter().position(|(n, _)| n == name) {
            self.fields[position].1 = value;
            position
        } else {
            self.fields.push((name.to_string(), value));
            self.fields.len() - 1
        }
    }

    /// Appends a continuation line to the field at `position`
    pub fn append_line(&mut self, position: usize, line: &str) {
        if let Some((_, value)) = self.fields.get_mut(position) {
            value.push('\n');
            value.push_str(line);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over `(name, value)` pairs in first-seen order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Line of the source text on which this record starts (1-based)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}
