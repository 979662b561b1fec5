/// A fixed-size run of opaque save bytes, processed as one reversal unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<const SIZE: usize>([u8; SIZE]);

impl<const SIZE: usize> Chunk<SIZE> {
    pub const fn zeroed() -> Self {
        Chunk([0; SIZE])
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }

    // Reverse the whole chunk: byte i goes to SIZE - 1 - i.
    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    // Write the reversed chunk into `target`, leaving self untouched.
    pub fn reverse_into(&self, target: &mut Chunk<SIZE>) {
        for (idx, byte) in self.0.iter().enumerate() {
            target.0[SIZE - 1 - idx] = *byte;
        }
    }

    pub fn reversed(&self) -> Self {
        let mut target = Self::zeroed();
        self.reverse_into(&mut target);
        target
    }
}

impl<const SIZE: usize> Default for Chunk<SIZE> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const SIZE: usize> From<[u8; SIZE]> for Chunk<SIZE> {
    fn from(value: [u8; SIZE]) -> Self {
        Chunk(value)
    }
}

impl<const SIZE: usize> From<Chunk<SIZE>> for [u8; SIZE] {
    fn from(value: Chunk<SIZE>) -> Self {
        value.0
    }
}

#[cfg(test)]
#[path = "chunk_test.rs"]
mod chunk_test;
