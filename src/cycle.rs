//! Split a line stream in 4 lines fastq record cycle.
//!
//! Classifier trust strict 4 lines periodicity, no fastq structure validation is perform.

/// Role of a line inside a fastq record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Header,
    Sequence,
    Separator,
    Quality,
}

impl Role {
    /// Role of the line after this one
    pub fn following(self) -> Self {
        match self {
            Role::Header => Role::Sequence,
            Role::Sequence => Role::Separator,
            Role::Separator => Role::Quality,
            Role::Quality => Role::Header,
        }
    }
}

/// Track position in record cycle of one stream
#[derive(Debug, Clone)]
pub struct Classifier {
    next: Role,
    records: u64,
}

impl Classifier {
    /// Create a classifier, first line is a header
    pub fn new() -> Self {
        Self {
            next: Role::Header,
            records: 0,
        }
    }

    /// Get role of next line and move forward in cycle
    pub fn next_role(&mut self) -> Role {
        let role = self.next;

        if role == Role::Header {
            self.records += 1;
        }
        self.next = role.following();

        role
    }

    /// Number of header line seen
    pub fn records(&self) -> u64 {
        self.records
    }

    /// Return true if the next line start a new record
    pub fn is_record_boundary(&self) -> bool {
        self.next == Role::Header
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
