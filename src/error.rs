use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Metric category a query failure belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Cpu,
    Memory,
    Disk,
    Host,
    Network,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Memory => "memory",
            Category::Disk => "disk",
            Category::Host => "host",
            Category::Network => "network",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// File operation an I/O failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IoStep {
    Create,
    Write,
    Read,
}

impl fmt::Display for IoStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IoStep::Create => "creating",
            IoStep::Write => "writing",
            IoStep::Read => "reading",
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error fetching {category} info: {reason}")]
    Query { category: Category, reason: String },

    #[error("error {step} JSON file {}: {source}", .path.display())]
    Io {
        step: IoStep,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error encoding JSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("error rendering report: {0}")]
    Render(#[source] io::Error),
}

impl Error {
    pub fn query(category: Category, reason: impl Into<String>) -> Self {
        Error::Query {
            category,
            reason: reason.into(),
        }
    }

    pub fn io(step: IoStep, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            step,
            path: path.into(),
            source,
        }
    }

    /// Category of a failed query, `None` for persistence errors.
    pub fn category(&self) -> Option<Category> {
        match self {
            Error::Query { category, .. } => Some(*category),
            _ => None,
        }
    }
}
