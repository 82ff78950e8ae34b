//! CSV export of the day timeline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::timeline::{minute_to_hhmm, DayTimeline};

/// Errors that can occur during CSV export.
#[derive(Error, Debug)]
pub enum CsvExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Timeline column '{0}' is not populated")]
    MissingColumn(&'static str),
}

/// The fixed column order of the exported table.
pub const CSV_COLUMNS: [&str; 15] = [
    "Time",
    "Minute",
    "Temperature",
    "SnowAmount",
    "LightIntensity",
    "ElevationAngle",
    "LightDirectionX",
    "LightDirectionY",
    "LightDirectionZ",
    "SkyColorR",
    "SkyColorG",
    "SkyColorB",
    "SunColorR",
    "SunColorG",
    "SunColorB",
];

/// Writes the timeline as a CSV table at `path`.
///
/// One row per minute (1441 rows plus header); numeric columns are
/// formatted to exactly 2 decimals, colors on the 0-1 scale. The table is
/// written to a temporary sibling file and renamed into place on
/// completion, so a failed write never leaves a half-written table at the
/// final path.
pub fn write_timeline_csv(timeline: &DayTimeline, path: &Path) -> Result<(), CsvExportError> {
    let temps = column(&timeline.temperature_c, "Temperature")?;
    let snow = column(&timeline.snow_cover, "SnowAmount")?;
    let intensities = column(&timeline.light_intensity, "LightIntensity")?;
    let elevations = column(&timeline.elevation_deg, "ElevationAngle")?;
    let directions = column(&timeline.light_direction, "LightDirection")?;
    let sky = column(&timeline.sky_color, "SkyColor")?;
    let sun = column(&timeline.sun_color, "SunColor")?;

    let tmp_path = path.with_extension("csv.tmp");
    let file = File::create(&tmp_path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", CSV_COLUMNS.join(","))?;

    for minute in timeline.minutes() {
        let i = minute as usize;
        let dir = directions[i];
        let sky = sky[i];
        let sun = sun[i];
        writeln!(
            writer,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            minute_to_hhmm(minute),
            minute,
            temps[i],
            snow[i],
            intensities[i],
            elevations[i],
            dir.x,
            dir.y,
            dir.z,
            sky.x,
            sky.y,
            sky.z,
            sun.x,
            sun.y,
            sun.z,
        )?;
    }

    writer.flush()?;
    drop(writer);
    std::fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Exports the timeline as `{base_name}.csv` inside `output_dir`.
///
/// Creates the directory if needed and returns the final file path.
pub fn export_timeline_csv(
    timeline: &DayTimeline,
    output_dir: &Path,
    base_name: &str,
) -> Result<PathBuf, CsvExportError> {
    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}.csv", base_name));
    write_timeline_csv(timeline, &path)?;
    Ok(path)
}

fn column<'a, T>(
    column: &'a Option<Vec<T>>,
    name: &'static str,
) -> Result<&'a [T], CsvExportError> {
    column
        .as_deref()
        .ok_or(CsvExportError::MissingColumn(name))
}
