//! Diagnostic spectrum dump
//!
//! Writes each magnitude spectrum computed by the peak estimator as a labelled
//! text block. Blocks are separated by two blank lines, which gnuplot treats as
//! separate data sets (`index N`).
//!
//! ```text
//! # spectrum 1
//! 1 0 0.0123
//! 1 0.03125 0.0456
//! ...
//!
//!
//! # spectrum 2
//! ```

use std::io::{self, Write};

/// Receiver for per-iteration magnitude spectra
///
/// `spectrum` holds `(bin frequency in [0, 1), magnitude)` for every FFT bin.
pub trait SpectrumSink {
    /// Record one spectrum
    fn record(&mut self, spectrum: &[(f64, f64)]) -> io::Result<()>;
}

/// [`SpectrumSink`] writing plain-text blocks to any [`Write`]
#[derive(Debug)]
pub struct SpectrumDump<W: Write> {
    writer: W,
    calls: usize,
}

impl<W: Write> SpectrumDump<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer, calls: 0 }
    }

    /// Number of spectra written so far
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SpectrumSink for SpectrumDump<W> {
    fn record(&mut self, spectrum: &[(f64, f64)]) -> io::Result<()> {
        self.calls += 1;
        writeln!(self.writer, "# spectrum {}", self.calls)?;
        for (frequency, magnitude) in spectrum {
            writeln!(self.writer, "{} {} {}", self.calls, frequency, magnitude)?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}
