//! Render accumulated [Stats] as two comma separated tables.
//!
//! Output look like:
//! ```text
//! sequences: 2
//! bases (A,C,G,T,N):
//! 1,1,0,1,0,0
//! quals (0..93):
//! 1,0,0,...,2,...,0
//! ```
//! Both tables stop at [Stats::cutoff], quality columns are Phred score 0 to 93.

/* std use */
use std::fmt::Display;

/* project use */
use crate::error;
use crate::stats::{QualCount, Stats, PHRED_OFFSET, QUAL_SPACE};

const NO_QUALS: QualCount = [0; QUAL_SPACE];

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cutoff = self.cutoff();

        writeln!(f, "sequences: {}", self.seq_count())?;

        writeln!(f, "bases (A,C,G,T,N):")?;
        for (pos, count) in self.bases()[..cutoff].iter().enumerate() {
            writeln!(
                f,
                "{},{},{},{},{},{}",
                pos + 1,
                count[0],
                count[1],
                count[2],
                count[3],
                count[4]
            )?;
        }

        writeln!(f, "quals (0..{}):", QUAL_SPACE - 1 - PHRED_OFFSET as usize)?;
        for pos in 0..cutoff {
            // a desynchronized stream can have base without quality
            let count = self.quals().get(pos).unwrap_or(&NO_QUALS);

            write!(f, "{}", pos + 1)?;
            for n in &count[PHRED_OFFSET as usize..] {
                write!(f, ",{}", n)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Write report of stats in output
pub fn write<W>(stats: &Stats, mut output: W) -> error::Result<()>
where
    W: std::io::Write,
{
    write!(output, "{}", stats).map_err(|source| error::Error::WriteReport { source })?;

    output
        .flush()
        .map_err(|source| error::Error::WriteReport { source })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::cycle::Role;
    use crate::parser::Sequential;
    use crate::stats::BASE_SPACE;

    fn feed(stats: &mut Stats, lines: &[&[u8]]) {
        let mut role = Role::Header;
        for line in lines {
            stats.line(role, line).unwrap();
            role = role.following();
        }
    }

    fn qual_row(pos: usize, scores: &[usize]) -> String {
        let mut count = [0; QUAL_SPACE - PHRED_OFFSET as usize];
        for score in scores {
            count[*score] += 1;
        }

        format!(
            "{},{}",
            pos,
            count
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<String>>()
                .join(",")
        )
    }

    #[test]
    fn empty() {
        let mut output = Vec::new();
        write(&Stats::new(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "sequences: 0\nbases (A,C,G,T,N):\nquals (0..93):\n".to_string()
        );
    }

    #[test]
    fn two_records() {
        let mut stats = Stats::new();
        feed(
            &mut stats,
            &[b"@r1", b"ACGTN", b"+", b"!!!!!", b"@r2", b"AC", b"+", b"II"],
        );

        let mut output = Vec::new();
        write(&stats, &mut output).unwrap();

        let expected = vec![
            "sequences: 2".to_string(),
            "bases (A,C,G,T,N):".to_string(),
            "1,2,0,0,0,0".to_string(),
            "2,0,2,0,0,0".to_string(),
            "3,0,0,1,0,0".to_string(),
            "4,0,0,0,1,0".to_string(),
            "5,0,0,0,0,1".to_string(),
            "quals (0..93):".to_string(),
            qual_row(1, &[0, 40]),
            qual_row(2, &[0, 40]),
            qual_row(3, &[0]),
            qual_row(4, &[0]),
            qual_row(5, &[0]),
        ];

        assert_eq!(
            String::from_utf8(output).unwrap(),
            expected.join("\n") + "\n"
        );
    }

    #[test]
    fn quality_row_width() {
        let mut stats = Stats::new();
        feed(&mut stats, &[b"@r1", b"A", b"+", b"~"]);

        let report = stats.to_string();
        let row = report.lines().last().unwrap();

        assert_eq!(row.split(',').count(), 1 + 94);
        assert_eq!(row, qual_row(1, &[93]));
    }

    #[test]
    fn quality_below_offset_hidden() {
        let mut stats = Stats::new();
        feed(&mut stats, &[b"@r1", b"A", b"+", b" "]);

        assert_eq!(stats.quals()[0][b' ' as usize], 1);
        assert_eq!(stats.to_string().lines().last().unwrap(), qual_row(1, &[]));
    }

    #[test]
    fn quality_truncated_at_base_cutoff() {
        let mut stats = Stats::new();
        // quality line longer than sequence line
        feed(&mut stats, &[b"@r1", b"AC", b"+", b"IIII"]);

        assert_eq!(stats.quals().len(), 4);

        let report = stats.to_string();
        let lines = report.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 2 + 2 + 1 + 2);
        assert_eq!(lines[5], qual_row(1, &[40]));
        assert_eq!(lines[6], qual_row(2, &[40]));
    }

    #[test]
    fn both_tables_stop_at_first_empty_base_row() {
        let mut stats = Stats::new();
        feed(&mut stats, &[b"@r1", b"AC", b"+", b"!I"]);

        // third position have no base call but later position have
        stats.bases.extend([[0; BASE_SPACE], [0, 0, 0, 1, 0]]);
        let mut quals = [0; QUAL_SPACE];
        quals[b'5' as usize] = 1;
        stats.quals.extend([quals, quals]);

        let mut output = Vec::new();
        write(&stats, &mut output).unwrap();

        let expected = vec![
            "sequences: 1".to_string(),
            "bases (A,C,G,T,N):".to_string(),
            "1,1,0,0,0,0".to_string(),
            "2,0,1,0,0,0".to_string(),
            "quals (0..93):".to_string(),
            qual_row(1, &[0]),
            qual_row(2, &[40]),
        ];

        assert_eq!(
            String::from_utf8(output).unwrap(),
            expected.join("\n") + "\n"
        );
    }

    #[test]
    fn missing_quality_row() {
        let mut stats = Stats::new();
        feed(&mut stats, &[b"@r1", b"ACG", b"+", b"I"]);

        let report = stats.to_string();
        let lines = report.lines().collect::<Vec<&str>>();

        assert_eq!(lines[lines.len() - 3], qual_row(1, &[40]));
        assert_eq!(lines[lines.len() - 2], qual_row(2, &[]));
        assert_eq!(lines[lines.len() - 1], qual_row(3, &[]));
    }

    #[test]
    fn generated_file() {
        let mut stats = Stats::new();
        stats
            .parse(crate::tests::generate_fastq(42, 100, 150))
            .unwrap();

        let report = stats.to_string();
        let lines = report.lines().collect::<Vec<&str>>();

        assert_eq!(lines[0], "sequences: 100");
        assert_eq!(lines.len(), 1 + 1 + 150 + 1 + 150);
        assert!(lines[2..152].iter().all(|line| {
            line.split(',')
                .skip(1)
                .map(|n| n.parse::<u64>().unwrap())
                .sum::<u64>()
                == 100
        }));
        assert!(lines[153..].iter().all(|line| {
            line.split(',')
                .skip(1)
                .map(|n| n.parse::<u64>().unwrap())
                .sum::<u64>()
                == 100
        }));
    }
}
