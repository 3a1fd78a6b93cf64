//! Error taxonomy of fastq_stats, every failure is fatal for the run.

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("fastq_stats can't open file {}: {source}", .path.display())]
    OpenFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("fastq_stats failed to read file {}: {source}", .path.display())]
    ReadFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("fastq_stats failed to read stream: {source}")]
    ReadStream { source: std::io::Error },

    #[error("buffer size must be greater than 0")]
    EmptyBuffer,

    #[error("unknown base {base}")]
    UnknownBase { base: char },

    #[error("quality value {qual} is outside of printable ascii range")]
    QualityOutOfRange { qual: u8 },

    #[error("fastq_stats can't write report: {source}")]
    WriteReport { source: std::io::Error },
}

impl Error {
    /// Attach path of file currently read to a stream error
    pub(crate) fn in_file<P>(self, path: P) -> Self
    where
        P: AsRef<std::path::Path>,
    {
        match self {
            Error::ReadStream { source } => Error::ReadFile {
                path: path.as_ref().to_path_buf(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
