//! Flat text trajectory format:
//!
//! ```text
//! <N>
//! <x1> <y1> <z1> <duration1>
//! ...
//! ```
//!
//! No header or version. Values are whitespace separated, so line breaks are
//! not significant when reading.

use glam::Vec3;
use std::ffi::OsString;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Result, TrajectoryError};
use super::{ControlPoint, Trajectory};

/// Values per record: x, y, z, duration
const VALUES_PER_POINT: usize = 4;

/// Conventional file name for an object's trajectory
pub fn trajectory_file_name(object_name: &str) -> String {
    format!("trajectory_{}.txt", object_name)
}

/// Serialize points in the on-disk format
pub fn format_points(points: &[ControlPoint]) -> String {
    let mut out = String::with_capacity(16 + points.len() * 32);
    // Writing into a String cannot fail
    let _ = writeln!(out, "{}", points.len());
    for point in points {
        let p = point.position();
        let _ = writeln!(out, "{} {} {} {}", p.x, p.y, p.z, point.duration());
    }
    out
}

/// Parse the on-disk format. Either every point parses or nothing is returned.
pub fn parse_points(text: &str) -> Result<Vec<ControlPoint>> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens.next().unwrap_or_default();
    let count: usize = count_token
        .parse()
        .map_err(|_| TrajectoryError::InvalidCount(count_token.to_string()))?;

    // The count is untrusted, don't preallocate from it blindly
    let mut points = Vec::with_capacity(count.min(1024));
    for index in 0..count {
        let mut values = [0.0f32; VALUES_PER_POINT];
        for value in values.iter_mut() {
            let token = tokens.next().ok_or(TrajectoryError::MissingValue { index })?;
            *value = token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| TrajectoryError::InvalidNumber {
                    index,
                    token: token.to_string(),
                })?;
        }
        let [x, y, z, duration] = values;
        points.push(ControlPoint::new(Vec3::new(x, y, z), duration));
    }

    if tokens.next().is_some() {
        return Err(TrajectoryError::TrailingData { expected: count });
    }

    Ok(points)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

impl Trajectory {
    /// Write the control points to `path`.
    ///
    /// The text goes to a sibling `.tmp` file first and is renamed over the
    /// destination, so a failed save never truncates an existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let tmp = temp_path_for(path);

        fs::write(&tmp, format_points(&self.points)).map_err(|e| TrajectoryError::io(&tmp, e))?;

        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(TrajectoryError::io(path, e));
        }

        log::debug!("Saved {} control points to {:?}", self.points.len(), path);
        Ok(())
    }

    /// Replace the control points with the content of `path` and rewind to idle.
    ///
    /// On any error the trajectory is left exactly as it was.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| TrajectoryError::io(path, e))?;
        let points = parse_points(&text)?;

        log::debug!("Loaded {} control points from {:?}", points.len(), path);
        self.replace_points(points);
        Ok(())
    }
}
