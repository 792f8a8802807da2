use std::fmt;

use crate::error::StringifyError;

/// A single step into a record.
///
/// Object records are indexed by `Key`; array records by `Index`. When an
/// `Index` accessor meets an object record, it is looked up as its decimal
/// string form, so `Accessor::Index(0)` reads the `"0"` property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// A string key into an object record.
    Key(String),
    /// A zero-based index into an array record.
    Index(usize),
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Key(key) => f.write_str(key),
            Accessor::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Accessor {
    fn from(key: &str) -> Self {
        Accessor::Key(key.to_string())
    }
}

impl From<String> for Accessor {
    fn from(key: String) -> Self {
        Accessor::Key(key)
    }
}

impl From<usize> for Accessor {
    fn from(index: usize) -> Self {
        Accessor::Index(index)
    }
}

/// A caller-supplied column specification.
///
/// A column is addressed by a single accessor or by a path of accessors
/// into nested records, optionally carrying an explicit display header.
/// The three shapes map onto the constructors:
///
/// ```
/// use csv_stringify_rs::stringify::ColumnSpec;
///
/// // Bare accessor: header derives from the accessor itself.
/// let age = ColumnSpec::new("age");
///
/// // Accessor path: header derives from the last step.
/// let first = ColumnSpec::path(["name", "first"]);
///
/// // Explicit display header on either form.
/// let labeled = ColumnSpec::path(["name", "first"]).header("First name");
/// # let _ = (age, first, labeled);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    header: Option<String>,
    path: Vec<Accessor>,
}

impl ColumnSpec {
    /// Creates a column addressed by a single accessor.
    pub fn new(accessor: impl Into<Accessor>) -> Self {
        Self {
            header: None,
            path: vec![accessor.into()],
        }
    }

    /// Creates a column addressed by a path of accessors into nested
    /// records.
    pub fn path<I>(path: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Accessor>,
    {
        Self {
            header: None,
            path: path.into_iter().map(Into::into).collect(),
        }
    }

    /// Overrides the derived header with an explicit display name.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Resolves this specification into a [`Column`].
    ///
    /// The header defaults to the string form of the last accessor when no
    /// explicit header was supplied. `position` is the zero-based index of
    /// this column in the configured list and is only used to report an
    /// empty accessor path.
    pub fn normalize(self, position: usize) -> Result<Column, StringifyError> {
        let last = self
            .path
            .last()
            .ok_or(StringifyError::EmptyColumnPath(position))?;

        let header = match self.header {
            Some(header) => header,
            None => last.to_string(),
        };

        Ok(Column {
            header,
            path: self.path,
        })
    }
}

impl From<&str> for ColumnSpec {
    fn from(key: &str) -> Self {
        ColumnSpec::new(key)
    }
}

impl From<String> for ColumnSpec {
    fn from(key: String) -> Self {
        ColumnSpec::new(key)
    }
}

impl From<usize> for ColumnSpec {
    fn from(index: usize) -> Self {
        ColumnSpec::new(index)
    }
}

impl From<Accessor> for ColumnSpec {
    fn from(accessor: Accessor) -> Self {
        ColumnSpec::new(accessor)
    }
}

impl From<Vec<Accessor>> for ColumnSpec {
    fn from(path: Vec<Accessor>) -> Self {
        ColumnSpec::path(path)
    }
}

/// A normalized column: the resolved display header plus the ordered
/// accessor path used to pull a value out of each record.
///
/// Columns are derived once per [`build`](super::CsvStringifierBuilder::build)
/// and are immutable afterwards; their order becomes the output field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    header: String,
    path: Vec<Accessor>,
}

impl Column {
    /// The display header emitted on the header line.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// The ordered accessor path walked against each record.
    pub fn path(&self) -> &[Accessor] {
        &self.path
    }
}
