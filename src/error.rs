use std::fmt;

/// Result type for the MST computation.
pub type MstResult<T> = Result<T, MstError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MstError {
    /// A list operation was invoked on an empty partial tree list. Under
    /// correct operation on a connected graph this never happens; seeing it
    /// means the input was disconnected or the bookkeeping is broken.
    EmptyCollection,

    /// A fragment exhausted its candidate arcs while more than one fragment
    /// remained, so no spanning tree exists.
    Disconnected { found: usize, expected: usize },

    /// The graph file could not be interpreted.
    BadGraphFile(String),
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MstError::EmptyCollection => {
                write!(f, "partial tree list is empty")
            }
            MstError::Disconnected { found, expected } => {
                write!(
                    f,
                    "graph is disconnected: found {} of {} spanning arcs",
                    found, expected
                )
            }
            MstError::BadGraphFile(ref message) => {
                write!(f, "bad graph file: {}", message)
            }
        }
    }
}

impl std::error::Error for MstError {}
