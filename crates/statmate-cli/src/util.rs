use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use statmate_stats::parse::{self, NumericSeries};
use tracing::debug;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        debug!(output = %self.display_path(), "wrote JSON");
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Reads a numeric series from inline text or from a file.
///
/// Inline text is parsed strictly. File contents are cleaned first, so a
/// pasted spreadsheet column with stray symbols still imports.
///
/// # Errors
///
/// Returns error if neither source is given, the file cannot be read, or
/// any token is not a number.
pub fn read_series(
    name: &str,
    text: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<NumericSeries> {
    let series = match (text, file) {
        (Some(text), _) => parse::parse_numeric_series(text)
            .with_context(|| format!("Failed to parse {name}"))?,
        (None, Some(path)) => {
            let content = fs::read_to_string(path).with_context(|| {
                format!("Failed to read {name} file: {}", path.display())
            })?;
            parse::parse_import_text(&content).with_context(|| {
                format!("Failed to parse {name} file: {}", path.display())
            })?
        }
        (None, None) => anyhow::bail!("No {name} given"),
    };
    debug!(name, n = series.len(), "read numeric series");
    Ok(series)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_read_series_inline() {
        let series = read_series("data", Some("1, 2\n3"), None).unwrap();
        assert_eq!(series.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_series_inline_rejects_garbage() {
        let err = read_series("data", Some("1, x"), None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse data"));
    }

    #[test]
    fn test_read_series_file_is_cleaned() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "$12, 15%\n 9").unwrap();
        let series = read_series("data", None, Some(file.path())).unwrap();
        assert_eq!(series.as_slice(), &[12.0, 15.0, 9.0]);
    }

    #[test]
    fn test_read_series_missing_source() {
        assert!(read_series("group A", None, None).is_err());
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        let mut output = Output::open(path.clone()).unwrap();
        output.write_json(vec![1.5, 2.5]).unwrap();
        drop(output);

        let values: Vec<f64> = read_json_file("values", &path).unwrap();
        assert_eq!(values, [1.5, 2.5]);
        assert!(read_json_file::<Vec<f64>, _>("values", dir.path().join("missing")).is_err());
    }
}
