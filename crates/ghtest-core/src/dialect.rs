//! Output dialects for generated test suites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Code-shaping convention for the generated test source.
///
/// Both dialects render the same discovered data; they differ only in how
/// test classes receive the project file and the host test context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Attribute-annotated classes (`[TestClass]` / `[TestMethod]`) carrying
    /// the file path and the framework's `TestContext` as properties.
    #[default]
    MsTest,
    /// Per-file fixture classes injected into test classes
    /// (`IClassFixture<T>` / `[Fact]`).
    XUnit,
}

impl Dialect {
    pub const ALL: [Self; 2] = [Self::MsTest, Self::XUnit];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MsTest => "mstest",
            Self::XUnit => "xunit",
        }
    }

    /// File extension (without the dot) of the generated source file.
    #[must_use]
    pub const fn source_extension(self) -> &'static str {
        match self {
            Self::MsTest | Self::XUnit => "cs",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mstest" => Ok(Self::MsTest),
            "xunit" => Ok(Self::XUnit),
            other => Err(CoreError::UnknownDialect(other.to_string())),
        }
    }
}
