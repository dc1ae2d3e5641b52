use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FtError, FtResult};
use crate::group::GroupDefinition;
use crate::object::{SimulatedObject, TrajectorySample};

/// Columns required of a group-definition table.
pub const GROUP_COLUMNS: [&str; 11] = [
    "group_id",
    "group_size",
    "start_percent",
    "stop_percent",
    "center_north",
    "center_east",
    "center_down",
    "spread_std",
    "mean_travel_distance",
    "travel_std",
    "category",
];

/// Columns required of a trajectory table.
pub const SAMPLE_COLUMNS: [&str; 7] = [
    "object_id",
    "group_id",
    "category",
    "time_percent",
    "north",
    "east",
    "down",
];

/// Read a group-definition table from a CSV file with a header row.
///
/// The header is checked before any row is parsed; an absent required
/// column is fatal and reported by name. Rows are not validated here —
/// see [`crate::group::validate_groups`].
pub fn read_groups(path: &Path) -> FtResult<Vec<GroupDefinition>> {
    read_records(path, &GROUP_COLUMNS)
}

/// Read a trajectory table from a CSV file with a header row.
pub fn read_samples(path: &Path) -> FtResult<Vec<TrajectorySample>> {
    read_records(path, &SAMPLE_COLUMNS)
}

/// Write a group-definition table with a header row.
pub fn write_groups(path: &Path, groups: &[GroupDefinition]) -> FtResult<()> {
    write_records(path, groups)
}

/// Write an objects table with a header row.
pub fn write_objects(path: &Path, objects: &[SimulatedObject]) -> FtResult<()> {
    write_records(path, objects)
}

/// Write a trajectory table with a header row.
pub fn write_samples(path: &Path, samples: &[TrajectorySample]) -> FtResult<()> {
    write_records(path, samples)
}

fn read_records<T: DeserializeOwned>(path: &Path, required: &[&str]) -> FtResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| table_error(path, e))?;

    let headers = reader.headers().map_err(|e| table_error(path, e))?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(FtError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row.map_err(|e| table_error(path, e))?);
    }
    Ok(records)
}

fn write_records<T: Serialize>(path: &Path, records: &[T]) -> FtResult<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| table_error(path, e))?;
    for record in records {
        writer.serialize(record).map_err(|e| table_error(path, e))?;
    }
    writer.flush().map_err(|e| FtError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn table_error(path: &Path, source: csv::Error) -> FtError {
    FtError::Table {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_groups_csv() -> &'static str {
        "group_id,group_size,start_percent,stop_percent,center_north,center_east,center_down,spread_std,mean_travel_distance,travel_std,category\n\
         1,5,0,40,100.0,50.0,0.0,10.0,50.0,5.0,1\n\
         2,3,30,70,200.0,-30.0,-5.0,15.0,30.0,3.0,2\n"
    }

    #[test]
    fn read_groups_parses_all_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.csv");
        fs::write(&path, sample_groups_csv()).unwrap();

        let groups = read_groups(&path).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].group_id, 1);
        assert_eq!(groups[1].center_east, -30.0);
        assert_eq!(groups[1].category, 2);
    }

    #[test]
    fn read_groups_reports_missing_column_by_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.csv");
        fs::write(&path, "group_id,group_size\n1,5\n").unwrap();

        let err = read_groups(&path).unwrap_err();
        match err {
            FtError::MissingColumn { column, .. } => assert_eq!(column, "start_percent"),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    #[test]
    fn read_groups_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = read_groups(&dir.path().join("absent.csv")).unwrap_err();
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn read_groups_accepts_extra_columns_and_any_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.csv");
        fs::write(
            &path,
            "category,travel_std,mean_travel_distance,spread_std,center_down,center_east,\
             center_north,stop_percent,start_percent,group_size,group_id,notes\n\
             1,5.0,50.0,10.0,0.0,50.0,100.0,40,0,5,1,hello\n",
        )
        .unwrap();

        let groups = read_groups(&path).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].group_id, 1);
    }

    #[test]
    fn groups_survive_a_write_read_cycle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("groups.csv");

        let original = read_groups_from_str(sample_groups_csv(), &dir);
        write_groups(&path, &original).unwrap();
        let reloaded = read_groups(&path).unwrap();
        assert_eq!(original, reloaded);
    }

    #[test]
    fn samples_survive_a_write_read_cycle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trajectories.csv");
        let samples = vec![
            TrajectorySample {
                object_id: 1,
                group_id: 1,
                category: 1,
                time_percent: 0.0,
                north: 100.5,
                east: 49.25,
                down: -0.125,
            },
            TrajectorySample {
                object_id: 1,
                group_id: 1,
                category: 1,
                time_percent: 50.0,
                north: 120.5,
                east: 51.0,
                down: 0.75,
            },
        ];

        write_samples(&path, &samples).unwrap();
        let reloaded = read_samples(&path).unwrap();
        assert_eq!(samples, reloaded);
    }

    #[test]
    fn read_samples_reports_missing_column_by_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trajectories.csv");
        fs::write(&path, "object_id,group_id,category,north,east,down\n1,1,1,0,0,0\n").unwrap();

        let err = read_samples(&path).unwrap_err();
        match err {
            FtError::MissingColumn { column, .. } => assert_eq!(column, "time_percent"),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    fn read_groups_from_str(content: &str, dir: &TempDir) -> Vec<GroupDefinition> {
        let path = dir.path().join("fixture.csv");
        fs::write(&path, content).unwrap();
        read_groups(&path).unwrap()
    }
}
