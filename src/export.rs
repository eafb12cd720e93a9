use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, TimeZone};

use crate::{config::Config, foundation::Foundation};

pub const FILE_PREFIX: &str = "wellsfargo.com-private-foundations";

/// `wellsfargo.com-private-foundations2024-05-01_09-30-00.csv`: the timestamp follows the prefix directly.
pub fn export_file_name<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{FILE_PREFIX}{}.csv", now.format("%Y-%m-%d_%H-%M-%S"))
}

pub fn export_path<Tz: TimeZone>(config: &Config, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    config.out_dir.join(export_file_name(now))
}

/// Writes the header row, then one record per foundation. The header is written even when `rows` is empty.
pub fn write_csv(path: &Path, rows: &[Foundation]) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(Foundation::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    log::debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{DirectoryEntry, FoundationDetails};
    use chrono::{NaiveDate, Utc};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "{}-{}-{name}",
            env!("CARGO_PKG_NAME"),
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_file_name() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 30, 7)
            .unwrap()
            .and_utc();
        assert_eq!(
            export_file_name(&now),
            "wellsfargo.com-private-foundations2024-05-01_09-30-07.csv"
        );

        let config = Config {
            out_dir: PathBuf::from("exports"),
            ..Config::default()
        };
        assert_eq!(
            export_path(&config, &now),
            PathBuf::from("exports").join("wellsfargo.com-private-foundations2024-05-01_09-30-07.csv")
        );
    }

    #[test]
    fn test_write_csv() {
        let dir = scratch_dir("rows");
        let path = dir.join("nested").join(export_file_name(&Utc::now()));
        let entry = DirectoryEntry::new(
            "Coastal Health Foundation",
            "https://www.wellsfargo.com/private-foundations/coastal-health/",
            "Health,Human Services",
            "Oregon, Washington",
            "",
        );
        let rows = vec![Foundation::new(
            &entry,
            FoundationDetails::new("Funds \"community\" clinics.", "", ""),
        )];

        write_csv(&path, &rows).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let mut lines = written.lines();
        assert_eq!(
            lines.next(),
            Some("Name,Link,Area,State Served,Other Limitation,Overview,Grant Guidelines,Foundation Information")
        );
        assert_eq!(
            lines.next(),
            Some("Coastal Health Foundation,https://www.wellsfargo.com/private-foundations/coastal-health/,\"Health,Human Services\",\"Oregon, Washington\",,\"Funds \"\"community\"\" clinics.\",,")
        );
        assert_eq!(lines.next(), None);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_write_csv_without_rows_keeps_header() {
        let dir = scratch_dir("empty");
        let path = dir.join("empty.csv");
        write_csv(&path, &[]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.starts_with("Name,Link,"));
        fs::remove_dir_all(dir).unwrap();
    }
}
