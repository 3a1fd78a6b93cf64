//! Position indexed count tables of base call and quality score.

/* project use */
use crate::cycle;
use crate::error;
use crate::parser;

/// Number of base symbol tracked, order is A, C, G, T and N
pub const BASE_SPACE: usize = 5;
/// Number of quality byte value tracked, 0 to 126 included
pub const QUAL_SPACE: usize = 127;
/// Byte value of Phred score 0
pub const PHRED_OFFSET: u8 = 33;

pub type BaseCount = [u64; BASE_SPACE];
pub type QualCount = [u64; QUAL_SPACE];

/// Column of base in [BaseCount]
pub fn base_index(nuc: u8) -> error::Result<usize> {
    match nuc {
        b'A' => Ok(0),
        b'C' => Ok(1),
        b'G' => Ok(2),
        b'T' => Ok(3),
        b'N' => Ok(4),
        _ => Err(error::Error::UnknownBase { base: nuc as char }),
    }
}

/// Accumulate base and quality count of all records read
///
/// Tables grow when a line is longer than current number of position, counts are never reset between files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub(crate) seq_count: u64,
    pub(crate) bases: Vec<BaseCount>,
    pub(crate) quals: Vec<QualCount>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of record seen
    pub fn seq_count(&self) -> u64 {
        self.seq_count
    }

    /// Base count of each position
    pub fn bases(&self) -> &[BaseCount] {
        &self.bases
    }

    /// Quality count of each position, indexed by raw byte value
    pub fn quals(&self) -> &[QualCount] {
        &self.quals
    }

    /// Count one more record
    pub fn add_record(&mut self) {
        self.seq_count += 1;
    }

    /// Count each base of sequence at its offset
    pub fn add_sequence(&mut self, sequence: &[u8]) -> error::Result<()> {
        if sequence.len() > self.bases.len() {
            self.bases.resize(sequence.len(), [0; BASE_SPACE]);
        }

        for (pos, nuc) in sequence.iter().enumerate() {
            self.bases[pos][base_index(*nuc)?] += 1;
        }

        Ok(())
    }

    /// Count each quality byte of quality string at its offset
    pub fn add_quality(&mut self, quality: &[u8]) -> error::Result<()> {
        if quality.len() > self.quals.len() {
            self.quals.resize(quality.len(), [0; QUAL_SPACE]);
        }

        for (pos, qual) in quality.iter().enumerate() {
            if *qual as usize >= QUAL_SPACE {
                return Err(error::Error::QualityOutOfRange { qual: *qual });
            }

            self.quals[pos][*qual as usize] += 1;
        }

        Ok(())
    }

    /// First position without any base call, both table are report until this position
    pub fn cutoff(&self) -> usize {
        self.bases
            .iter()
            .position(|count| count.iter().sum::<u64>() == 0)
            .unwrap_or(self.bases.len())
    }
}

impl parser::Sequential for Stats {
    fn line(&mut self, role: cycle::Role, line: &[u8]) -> error::Result<()> {
        match role {
            cycle::Role::Header => {
                self.add_record();
                Ok(())
            }
            cycle::Role::Sequence => self.add_sequence(line),
            cycle::Role::Separator => Ok(()),
            cycle::Role::Quality => self.add_quality(line),
        }
    }
}
