use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ContextError;

/// The kind of binary being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
  Game,
  Editor,
  Server,
  Client,
  Program,
}

impl TargetType {
  pub const ALL: [TargetType; 5] = [
    TargetType::Game,
    TargetType::Editor,
    TargetType::Server,
    TargetType::Client,
    TargetType::Program,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Game => "game",
      Self::Editor => "editor",
      Self::Server => "server",
      Self::Client => "client",
      Self::Program => "program",
    }
  }
}

impl fmt::Display for TargetType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for TargetType {
  type Err = ContextError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|t| t.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| ContextError::UnknownTargetType(s.to_string()))
  }
}

/// Build configuration name.
///
/// Pass-through context: recorded on descriptors, never consulted by the
/// built-in rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuildConfiguration {
  Debug,
  DebugGame,
  #[default]
  Development,
  Test,
  Shipping,
}

impl BuildConfiguration {
  pub const ALL: [BuildConfiguration; 5] = [
    BuildConfiguration::Debug,
    BuildConfiguration::DebugGame,
    BuildConfiguration::Development,
    BuildConfiguration::Test,
    BuildConfiguration::Shipping,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Debug => "debug",
      Self::DebugGame => "debugGame",
      Self::Development => "development",
      Self::Test => "test",
      Self::Shipping => "shipping",
    }
  }
}

impl fmt::Display for BuildConfiguration {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl FromStr for BuildConfiguration {
  type Err = ContextError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    // Accept both "debugGame" and "debug-game"
    let normalized: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
    Self::ALL
      .into_iter()
      .find(|c| c.as_str().eq_ignore_ascii_case(&normalized))
      .ok_or_else(|| ContextError::UnknownConfiguration(s.to_string()))
  }
}
