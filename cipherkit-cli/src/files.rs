//! Line by line file transforms.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use cipherkit_core::{decipher_line, encipher_line, Keyword, Mode};
use eyre::{bail, Result, WrapErr};
use tracing::debug;

/// Transforms every line of `input` under `keyword` and writes the results
/// to `output`, one line each, replacing whatever `output` held before.
///
/// Returns the number of lines written.
///
/// # Errors
/// Fails when `input` and `output` name the same path or on any I/O
/// failure. Deciphering also fails on a line that is not valid ciphertext.
pub fn transform_file(input: &Path, output: &Path, keyword: &Keyword, mode: Mode) -> Result<usize> {
    if input == output {
        bail!("cannot overwrite the source file {}", input.display());
    }

    let reader = BufReader::new(
        File::open(input).wrap_err_with(|| format!("failed to open {}", input.display()))?,
    );
    let mut writer = BufWriter::new(
        File::create(output).wrap_err_with(|| format!("failed to create {}", output.display()))?,
    );

    let mut lines = 0_usize;
    for (index, line) in reader.lines().enumerate() {
        let line = line
            .wrap_err_with(|| format!("failed to read line {} of {}", index + 1, input.display()))?;
        let transformed = match mode {
            Mode::Encipher => encipher_line(&line, keyword),
            Mode::Decipher => decipher_line(&line, keyword).wrap_err_with(|| {
                format!("line {} of {} is not valid ciphertext", index + 1, input.display())
            })?,
        };
        writeln!(writer, "{transformed}")
            .wrap_err_with(|| format!("failed to write to {}", output.display()))?;
        lines += 1;
    }
    writer
        .flush()
        .wrap_err_with(|| format!("failed to flush {}", output.display()))?;

    debug!(lines, %mode, "file transform complete");
    Ok(lines)
}

/// Steers output toward a `.txt` file.
///
/// A path naming an existing file is kept as given. Otherwise anything but
/// a `.txt` extension, in any casing, is replaced with one.
#[must_use]
pub fn normalize_output_path(output: PathBuf) -> PathBuf {
    if output.is_file() {
        return output;
    }
    match output.extension() {
        Some(extension) if extension.eq_ignore_ascii_case("txt") => output,
        _ => output.with_extension("txt"),
    }
}
