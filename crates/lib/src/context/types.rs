use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::{Platform, PlatformParseError};

use super::{BuildConfiguration, TargetType};

/// The flags describing what kind of binary is currently being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildContext {
  /// True when compiling the interactive development environment rather than
  /// a shipping/runtime target.
  pub is_editor_build: bool,
  pub target_type: TargetType,
  #[serde(default)]
  pub configuration: BuildConfiguration,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform: Option<Platform>,
}

impl BuildContext {
  /// A non-editor context for the given target type.
  pub fn new(target_type: TargetType) -> Self {
    Self {
      is_editor_build: false,
      target_type,
      configuration: BuildConfiguration::default(),
      platform: None,
    }
  }

  /// The context of an interactive editor build.
  pub fn editor() -> Self {
    Self::new(TargetType::Editor).with_editor_build(true)
  }

  pub fn with_editor_build(mut self, is_editor_build: bool) -> Self {
    self.is_editor_build = is_editor_build;
    self
  }

  pub fn with_configuration(mut self, configuration: BuildConfiguration) -> Self {
    self.configuration = configuration;
    self
  }

  pub fn with_platform(mut self, platform: Platform) -> Self {
    self.platform = Some(platform);
    self
  }
}

/// A build context as supplied by an orchestrator, before validation.
///
/// ```json
/// { "isEditorBuild": true, "targetType": "editor", "configuration": "debugGame", "platform": "x86_64-linux" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextSpec {
  #[serde(default)]
  pub is_editor_build: bool,
  pub target_type: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub configuration: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub platform: Option<String>,
}

/// A context value outside the closed set the resolver understands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
  #[error("unknown target type '{0}', expected one of game, editor, server, client, program")]
  UnknownTargetType(String),

  #[error("unknown build configuration '{0}'")]
  UnknownConfiguration(String),

  #[error("invalid platform: {0}")]
  InvalidPlatform(#[from] PlatformParseError),
}

impl TryFrom<&ContextSpec> for BuildContext {
  type Error = ContextError;

  fn try_from(spec: &ContextSpec) -> Result<Self, Self::Error> {
    let configuration = match &spec.configuration {
      Some(name) => name.parse()?,
      None => BuildConfiguration::default(),
    };
    let platform = spec.platform.as_deref().map(str::parse::<Platform>).transpose()?;

    Ok(Self {
      is_editor_build: spec.is_editor_build,
      target_type: spec.target_type.parse()?,
      configuration,
      platform,
    })
  }
}

impl TryFrom<ContextSpec> for BuildContext {
  type Error = ContextError;

  fn try_from(spec: ContextSpec) -> Result<Self, Self::Error> {
    Self::try_from(&spec)
  }
}
