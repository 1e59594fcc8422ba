//! The ephemeris store: a time-indexed table of per-body samples.
//!
//! Two text files make up one data set:
//! - `astroeph.dat`: one record per line, whitespace-delimited. First token is
//!   the Julian Date, the rest are values, three per body (longitude in
//!   degrees, latitude in degrees, distance in AU). `#` lines and blank lines
//!   are skipped.
//! - `astronam.dat`: one body per line, `id|name|abbreviation|description`.
//!   The description is optional.
//!
//! A constructed store is ready to query; replacing a data set means building
//! a new store. Records are held sorted by JD and looked up by binary search.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, info};

use crate::error::EphError;

/// Tolerance within which a query JD counts as an exact sample hit.
const EXACT_JD_TOL: f64 = 1e-6;

/// One sampled instant: a Julian Date and a flat value row, three values
/// (lon deg, lat deg, dist AU) per body.
#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisRecord {
    pub jd: f64,
    pub values: Vec<f64>,
}

/// Metadata for one body in the data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyInfo {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
    pub description: String,
}

/// An in-memory ephemeris data set.
#[derive(Debug, Clone)]
pub struct EphemerisStore {
    records: Vec<EphemerisRecord>,
    bodies: BTreeMap<u32, BodyInfo>,
    start_jd: f64,
    end_jd: f64,
}

impl EphemerisStore {
    /// Load a data set from a directory holding `astroeph.dat` and
    /// `astronam.dat`.
    pub fn load(data_dir: &Path) -> Result<Self, EphError> {
        if !data_dir.is_dir() {
            return Err(EphError::DataDirNotFound(data_dir.display().to_string()));
        }

        let eph_path = data_dir.join("astroeph.dat");
        let nam_path = data_dir.join("astronam.dat");
        let samples = std::fs::read_to_string(&eph_path)?;
        let names = std::fs::read_to_string(&nam_path)?;

        let store = Self::parse(&samples, &names)?;
        info!(
            "loaded ephemeris: {} records, {} bodies, JD {:.1}..{:.1}",
            store.records.len(),
            store.bodies.len(),
            store.start_jd,
            store.end_jd
        );
        Ok(store)
    }

    /// Build a store from in-memory file contents.
    pub fn parse(samples: &str, names: &str) -> Result<Self, EphError> {
        let mut records: Vec<EphemerisRecord> = samples.lines().filter_map(parse_sample_line).collect();
        if records.is_empty() {
            return Err(EphError::NoSamples("astroeph.dat".into()));
        }

        let bodies: BTreeMap<u32, BodyInfo> = names
            .lines()
            .filter_map(parse_name_line)
            .map(|b| (b.id, b))
            .collect();
        if bodies.is_empty() {
            return Err(EphError::NoMetadata("astronam.dat".into()));
        }

        records.sort_by(|a, b| a.jd.total_cmp(&b.jd));
        let start_jd = records[0].jd;
        let end_jd = records[records.len() - 1].jd;
        debug!("parsed {} ephemeris records", records.len());

        Ok(Self {
            records,
            bodies,
            start_jd,
            end_jd,
        })
    }

    /// First sampled Julian Date.
    pub fn start_jd(&self) -> f64 {
        self.start_jd
    }

    /// Last sampled Julian Date.
    pub fn end_jd(&self) -> f64 {
        self.end_jd
    }

    /// Whether a JD lies within the sampled range.
    pub fn covers(&self, jd: f64) -> bool {
        jd >= self.start_jd && jd <= self.end_jd
    }

    /// The full value row at a JD, or `None` outside the sampled range.
    ///
    /// An exact sample (within 1e-6 day) is returned as stored; anything else
    /// is linearly interpolated between the bracketing records, with
    /// longitude slots taken along the shorter arc across 0°/360°.
    pub fn values_at(&self, jd: f64) -> Option<Vec<f64>> {
        if !self.covers(jd) {
            return None;
        }
        Some(self.interpolated(jd))
    }

    /// (longitude deg, latitude deg, distance AU) for the body at `index`,
    /// or `None` when the JD is out of range or the row has no slot for it.
    pub fn body_position(&self, index: usize, jd: f64) -> Option<(f64, f64, f64)> {
        let values = self.values_at(jd)?;
        let base = index.checked_mul(3)?;
        if base + 2 >= values.len() {
            return None;
        }
        Some((values[base], values[base + 1], values[base + 2]))
    }

    /// Metadata for one body id.
    pub fn body_info(&self, id: u32) -> Option<&BodyInfo> {
        self.bodies.get(&id)
    }

    /// All body metadata, ordered by id.
    pub fn all_bodies(&self) -> impl Iterator<Item = &BodyInfo> {
        self.bodies.values()
    }

    /// Interpolated value row, clamped to the first/last record outside the
    /// sampled range. Callers wanting strict range behavior gate on
    /// [`Self::covers`] first.
    fn interpolated(&self, jd: f64) -> Vec<f64> {
        let idx = self.records.partition_point(|r| r.jd < jd);

        if idx < self.records.len() && (self.records[idx].jd - jd).abs() < EXACT_JD_TOL {
            return self.records[idx].values.clone();
        }
        if idx == 0 {
            return self.records[0].values.clone();
        }
        if idx == self.records.len() {
            return self.records[idx - 1].values.clone();
        }

        interpolate(&self.records[idx - 1], &self.records[idx], jd)
    }
}

/// Linear interpolation between two records, wrap-aware in longitude slots.
fn interpolate(r1: &EphemerisRecord, r2: &EphemerisRecord, jd: f64) -> Vec<f64> {
    let t = (jd - r1.jd) / (r2.jd - r1.jd);
    let n = r1.values.len().min(r2.values.len());

    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        let mut v1 = r1.values[i];
        let mut v2 = r2.values[i];

        // Stride-3 slots are longitudes; take the shorter arc across 0/360.
        if i % 3 == 0 {
            if v2 - v1 > 180.0 {
                v1 += 360.0;
            } else if v1 - v2 > 180.0 {
                v2 += 360.0;
            }
        }

        let mut v = v1 + t * (v2 - v1);
        if i % 3 == 0 {
            v = v.rem_euclid(360.0);
        }
        result.push(v);
    }
    result
}

fn parse_sample_line(line: &str) -> Option<EphemerisRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut tokens = line.split_whitespace();
    let jd: f64 = tokens.next()?.parse().ok()?;
    let values: Vec<f64> = tokens.filter_map(|t| t.parse().ok()).collect();
    if values.is_empty() {
        return None;
    }

    Some(EphemerisRecord { jd, values })
}

fn parse_name_line(line: &str) -> Option<BodyInfo> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.split('|');
    let id: u32 = fields.next()?.trim().parse().ok()?;
    let name = fields.next()?.trim().to_string();
    let abbreviation = fields.next()?.trim().to_string();
    let description = fields.next().map(str::trim).unwrap_or_default().to_string();

    Some(BodyInfo {
        id,
        name,
        abbreviation,
        description,
    })
}
