//! Content categories

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Error;

/// A partition of the content tree with its own destination directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Rules,
    Skills,
    Workflows,
}

impl Category {
    /// All categories in processing order.
    pub const ALL: [Category; 3] = [Category::Rules, Category::Skills, Category::Workflows];

    /// Directory name of this category below a content root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::Rules => "rules",
            Self::Skills => "skills",
            Self::Workflows => "workflows",
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rules" => Ok(Self::Rules),
            "skills" => Ok(Self::Skills),
            "workflows" => Ok(Self::Workflows),
            _ => Err(Error::UnknownCategory { name: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
