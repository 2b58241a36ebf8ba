use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// Godot engine version an `extension_api.json` was dumped from.
///
/// Parses the forms the engine prints: `4.1`, `4.1.3` and either of those
/// followed by a status such as `.stable` or `.beta2`. The status is not
/// kept; it lives in the dump header next to the numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Always prints all three numbers, so `4.1` round-trips as `4.1.0`.
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid Godot version '{}', expected 'X.Y[.Z][.status]'", s);

        let segments: Vec<&str> = s.split('.').collect();
        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(invalid());
        }

        let numbers: Vec<u32> = segments.iter().map_while(|seg| seg.parse().ok()).collect();
        // at most one status segment may follow the numbers
        let status_segments = segments.len() - numbers.len();

        match (numbers.as_slice(), status_segments) {
            ([major, minor], 0 | 1) => Ok(Self::new(*major, *minor, 0)),
            ([major, minor, patch], 0 | 1) => Ok(Self::new(*major, *minor, *patch)),
            _ => Err(invalid()),
        }
    }
}
