/* crate use */
use bstr::io::BufReadExt;

/* project use */
use crate::cycle;
use crate::error;

/// Trait allow sequential parsing of gzip compressed fastq
///
/// File is decompressed and read line by line, each line get a [cycle::Role] from a fresh [cycle::Classifier] and is send to `line` function.
pub trait Sequential {
    /// Parse file indicate by path with default buffer size [crate::DEFAULT_BUFFER_SIZE]
    fn parse<P>(&mut self, path: P) -> error::Result<u64>
    where
        P: AsRef<std::path::Path>,
    {
        self.with_buffer_size(crate::DEFAULT_BUFFER_SIZE, path)
    }

    /// Parse file indicate by path with selected buffer size, return number of record read
    fn with_buffer_size<P>(&mut self, capacity: usize, path: P) -> error::Result<u64>
    where
        P: AsRef<std::path::Path>,
    {
        if capacity == 0 {
            return Err(error::Error::EmptyBuffer);
        }

        let path = path.as_ref();
        log::info!("read {}", path.display());

        let file = std::fs::File::open(path).map_err(|source| error::Error::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

        let records = self
            .reader(std::io::BufReader::with_capacity(
                capacity,
                flate2::read::MultiGzDecoder::new(file),
            ))
            .map_err(|e| e.in_file(path))?;

        log::debug!("{} records in {}", records, path.display());

        Ok(records)
    }

    /// Method call to parse a decompressed stream, return number of record read
    fn reader<R>(&mut self, reader: R) -> error::Result<u64>
    where
        R: std::io::BufRead,
    {
        let mut classifier = cycle::Classifier::new();
        let mut failure = None;

        reader
            .for_byte_line(|line| match self.line(classifier.next_role(), line) {
                Ok(()) => Ok(true),
                Err(e) => {
                    failure = Some(e);
                    Ok(false)
                }
            })
            .map_err(|source| error::Error::ReadStream { source })?;

        if let Some(e) = failure {
            return Err(e);
        }

        if !classifier.is_record_boundary() {
            log::warn!("stream end in the middle of record {}", classifier.records());
        }

        Ok(classifier.records())
    }

    /// Method call on each line
    fn line(&mut self, role: cycle::Role, line: &[u8]) -> error::Result<()>;
}
