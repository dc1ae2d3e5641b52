use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use ft_core::{ObjectIdentity, TrajectorySample, table};
use serde::Serialize;

use crate::descriptor::WorldEntityDescriptor;
use crate::error::{ConvertError, ConvertResult};

/// Filename of the consolidated descriptor file under the output root.
pub const CONSOLIDATED_FILENAME: &str = "all_G_WORLD_ENTITIES.txt";

/// One tab-delimited output row for a trajectory sample.
///
/// Six positional fields in fixed order. `FIELDS` is deliberately the
/// empty string (never a null marker) and `FRAME` is a constant 0.0.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryRow {
    /// Always empty.
    #[serde(rename = "FIELDS")]
    pub fields: String,
    /// Always 0.0.
    #[serde(rename = "FRAME")]
    pub frame: f64,
    /// The sample's time, percent of total duration.
    #[serde(rename = "TIME")]
    pub time: f64,
    /// North coordinate.
    #[serde(rename = "POS_N")]
    pub pos_n: f64,
    /// East coordinate.
    #[serde(rename = "POS_E")]
    pub pos_e: f64,
    /// Down coordinate.
    #[serde(rename = "POS_D")]
    pub pos_d: f64,
}

/// Everything produced by one conversion call.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Descriptor per entity key, ascending key order.
    pub entities: BTreeMap<u32, WorldEntityDescriptor>,
    /// Written trajectory file per entity key.
    pub files: BTreeMap<u32, PathBuf>,
    /// Path of the consolidated descriptor file.
    pub consolidated: PathBuf,
}

/// Converts trajectory tables into per-object files and descriptor blocks.
///
/// The converter owns the entity-key counter: keys start at 1 and are
/// assigned to each distinct (object, group) identity in first-seen row
/// order, so identical input always yields the identical mapping. One
/// converter fed several tables keeps numbering across all of them.
#[derive(Debug)]
pub struct WorldEntityConverter {
    output_root: PathBuf,
    next_key: u32,
    keys: HashMap<ObjectIdentity, u32>,
    descriptors: BTreeMap<u32, WorldEntityDescriptor>,
}

impl WorldEntityConverter {
    /// Create a converter writing under the given output root.
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            next_key: 1,
            keys: HashMap::new(),
            descriptors: BTreeMap::new(),
        }
    }

    /// The configured output root.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Assign entity keys to every identity present in the table.
    ///
    /// Returns the key for each identity in this table, ascending by key.
    /// Identities already known to this converter keep their key.
    pub fn assign_keys(&mut self, samples: &[TrajectorySample]) -> BTreeMap<u32, ObjectIdentity> {
        let mut assigned = BTreeMap::new();
        for sample in samples {
            let identity = sample.identity();
            let key = *self.keys.entry(identity).or_insert_with(|| {
                let key = self.next_key;
                self.next_key += 1;
                key
            });
            assigned.entry(key).or_insert(identity);
        }
        assigned
    }

    /// Reformat one object's samples into positional output rows.
    pub fn format_rows(samples: &[&TrajectorySample]) -> Vec<TrajectoryRow> {
        samples
            .iter()
            .map(|s| TrajectoryRow {
                fields: String::new(),
                frame: 0.0,
                time: s.time_percent,
                pos_n: s.north,
                pos_e: s.east,
                pos_d: s.down,
            })
            .collect()
    }

    /// Write one object's rows as `G/G_<key>_.txt`, tab-separated with a
    /// header row. The directory is created if absent.
    pub fn write_trajectory_file(
        &self,
        key: u32,
        rows: &[TrajectoryRow],
    ) -> ConvertResult<PathBuf> {
        let dir = self.output_root.join("G");
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;

        let path = dir.join(format!("G_{key}_.txt"));
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_path(&path)
            .map_err(|e| csv_io_error(&path, e))?;
        for row in rows {
            writer.serialize(row).map_err(|e| csv_io_error(&path, e))?;
        }
        writer.flush().map_err(|e| io_error(&path, e))?;
        Ok(path)
    }

    /// Convert one trajectory table.
    ///
    /// Assigns keys, then per key in ascending order writes the object's
    /// trajectory file and builds its descriptor; finally rewrites the
    /// consolidated file with one block per key this converter has ever
    /// seen, blocks separated by a blank line.
    pub fn convert(&mut self, samples: &[TrajectorySample]) -> ConvertResult<Conversion> {
        let assigned = self.assign_keys(samples);

        let mut grouped: HashMap<ObjectIdentity, Vec<&TrajectorySample>> = HashMap::new();
        for sample in samples {
            grouped.entry(sample.identity()).or_default().push(sample);
        }

        let mut entities = BTreeMap::new();
        let mut files = BTreeMap::new();
        for (key, identity) in &assigned {
            let object_samples = match grouped.get(identity) {
                Some(rows) if !rows.is_empty() => rows,
                _ => continue,
            };

            let rows = Self::format_rows(object_samples);
            let path = self.write_trajectory_file(*key, &rows)?;

            let descriptor =
                WorldEntityDescriptor::new(*key, object_samples[0], &self.output_root);
            self.descriptors.insert(*key, descriptor.clone());
            entities.insert(*key, descriptor);
            files.insert(*key, path);
        }

        let consolidated = self.write_consolidated()?;
        Ok(Conversion {
            entities,
            files,
            consolidated,
        })
    }

    /// Read a trajectory table from CSV and convert it.
    ///
    /// A missing required column is fatal; no files are written.
    pub fn convert_csv(&mut self, path: &Path) -> ConvertResult<Conversion> {
        let samples = table::read_samples(path)?;
        self.convert(&samples)
    }

    /// Convert several tables through this converter, keeping one key
    /// numbering across all of them. The result accumulates every entity
    /// and file; the consolidated file covers the union.
    pub fn convert_csv_many(&mut self, paths: &[PathBuf]) -> ConvertResult<Conversion> {
        let mut entities = BTreeMap::new();
        let mut files = BTreeMap::new();
        let mut consolidated = self.output_root.join(CONSOLIDATED_FILENAME);

        for path in paths {
            let conversion = self.convert_csv(path)?;
            entities.extend(conversion.entities);
            files.extend(conversion.files);
            consolidated = conversion.consolidated;
        }

        Ok(Conversion {
            entities,
            files,
            consolidated,
        })
    }

    fn write_consolidated(&self) -> ConvertResult<PathBuf> {
        fs::create_dir_all(&self.output_root).map_err(|e| io_error(&self.output_root, e))?;

        let content = self
            .descriptors
            .values()
            .map(WorldEntityDescriptor::render)
            .collect::<Vec<_>>()
            .join("\n\n");

        let path = self.output_root.join(CONSOLIDATED_FILENAME);
        fs::write(&path, content).map_err(|e| io_error(&path, e))?;
        Ok(path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ConvertError {
    ConvertError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_io_error(path: &Path, source: csv::Error) -> ConvertError {
    match source.into_kind() {
        csv::ErrorKind::Io(e) => io_error(path, e),
        other => io_error(
            path,
            std::io::Error::other(format!("cannot serialize row: {other:?}")),
        ),
    }
}
