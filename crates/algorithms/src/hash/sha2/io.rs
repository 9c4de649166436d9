//! `std::io::Write` adapter, so engines can sit at the end of `io::copy`

use std::io;

use super::engine::Sha2;

impl io::Write for Sha2 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Sha2::write(self, buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
