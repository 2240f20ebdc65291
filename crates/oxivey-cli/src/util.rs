use std::{
    fs::File,
    io::{self, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use log::info;
use oxivey_analysis::dataset::QuestionnaireDataset;

/// Binds and loads a questionnaire dataset, logging the row count.
pub fn load_dataset(path: &Path) -> anyhow::Result<QuestionnaireDataset> {
    let mut dataset = QuestionnaireDataset::new(path)?;
    dataset.load()?;
    info!("Loaded {} records from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Writes a value as pretty JSON to the given file, or to stdout when no
/// file is named.
pub fn write_json<T>(value: &T, output: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_pretty(BufWriter::new(file), value)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            write_pretty(io::stdout().lock(), value).context("Failed to write JSON to stdout")?;
        }
    }
    Ok(())
}

fn write_pretty<W, T>(mut writer: W, value: &T) -> io::Result<()>
where
    W: io::Write,
    T: serde::Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()
}
