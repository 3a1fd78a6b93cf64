//! Per position base call and quality score count of gzip compressed fastq files.
//!
//! ```no_run
//! use fastq_stats::Sequential;
//!
//! let mut stats = fastq_stats::Stats::new();
//! stats.parse("reads.fastq.gz")?;
//!
//! fastq_stats::report::write(&stats, std::io::stdout())?;
//! # Ok::<(), fastq_stats::error::Error>(())
//! ```

pub mod cycle;
pub mod error;
pub mod parser;
pub mod report;
pub mod stats;

pub use parser::Sequential;
pub use stats::Stats;

/// Default capacity of line reader buffer
pub const DEFAULT_BUFFER_SIZE: usize = 16384;
