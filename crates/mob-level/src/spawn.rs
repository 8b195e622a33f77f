//! Spawn markers exported from the map editor.
//!
//! # CSV format
//!
//! One row per map object, positions in world units (object centre,
//! y up).
//!
//! ```csv
//! name,type,x,y
//! start,,2.0,2.0
//! boss,boss1,12.0,6.5
//! sprite,torch,4.0,7.0
//! ```
//!
//! | `name`  | Meaning                                          |
//! |---------|--------------------------------------------------|
//! | `start` | Player start; `type` is ignored                  |
//! | `boss`  | Mob spawn; `type` is the spawn-registry kind     |
//! | other   | Not an AI concern; skipped                       |

use std::io::Read;
use std::path::Path;

use mob_core::Vec2;
use serde::Deserialize;
use tracing::debug;

use crate::{LevelError, LevelResult};

/// A map object the level acts on when it loads.
#[derive(Clone, Debug, PartialEq)]
pub enum SpawnMarker {
    PlayerStart(Vec2),
    Mob { kind: String, at: Vec2 },
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MarkerRecord {
    name:  String,
    #[serde(rename = "type", default)]
    kind:  String,
    x:     f32,
    y:     f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load spawn markers from a CSV file.
pub fn load_markers_path(path: &Path) -> LevelResult<Vec<SpawnMarker>> {
    let file = std::fs::File::open(path)?;
    load_markers_reader(file)
}

/// Like [`load_markers_path`] but accepts any `Read` source.
pub fn load_markers_reader<R: Read>(reader: R) -> LevelResult<Vec<SpawnMarker>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut markers = Vec::new();

    for (row, result) in csv_reader.deserialize::<MarkerRecord>().enumerate() {
        let record = result.map_err(|e| LevelError::Parse(e.to_string()))?;
        let at = Vec2::new(record.x, record.y);
        match record.name.trim() {
            "start" => markers.push(SpawnMarker::PlayerStart(at)),
            "boss" => {
                let kind = record.kind.trim();
                if kind.is_empty() {
                    return Err(LevelError::Parse(format!(
                        "row {}: boss marker at {at} has no type",
                        row + 1
                    )));
                }
                markers.push(SpawnMarker::Mob { kind: kind.to_owned(), at });
            }
            other => debug!(name = other, "skipping non-spawn map object"),
        }
    }
    Ok(markers)
}
