use std::ops::Index;

/// Occurrence count of every byte value in an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteFrequencies {
    counts: [usize; 256],
}

impl ByteFrequencies {
    pub fn of(data: &[u8]) -> Self {
        let mut counts = [0usize; 256];
        data.iter().for_each(|&byte| {
            counts[byte as usize] += 1;
        });
        ByteFrequencies { counts }
    }

    /// Present bytes and their counts, in ascending byte order. Absent bytes are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count != 0)
            .map(|(byte, &count)| (byte as u8, count))
    }

    /// Number of distinct bytes present.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count != 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }
}

impl Index<u8> for ByteFrequencies {
    type Output = usize;

    fn index(&self, byte: u8) -> &usize {
        &self.counts[byte as usize]
    }
}
