//! Registry file of projects and blinks loaded at startup.
//!
//! Entries use the same shape as the registration API. The file is optional:
//! a missing file yields an empty registry.
use crate::models::{
    BlinkCreateRequest, BlinkRepoModel, ProjectCreateRequest, ProjectRepoModel,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid project '{name}': {reason}")]
    InvalidProject { name: String, reason: String },
    #[error("Invalid blink '{ref_code}': {reason}")]
    InvalidBlink { ref_code: String, reason: String },
    #[error("Duplicate id error: {0}")]
    DuplicateId(String),
    #[error("Blink '{ref_code}' references unknown program {program_id}")]
    UnknownProgram { ref_code: String, program_id: String },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub projects: Vec<ProjectCreateRequest>,
    #[serde(default)]
    pub blinks: Vec<BlinkCreateRequest>,
}

/// Validated contents of the registry file, ready to be stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Registry {
    pub projects: Vec<ProjectRepoModel>,
    pub blinks: Vec<BlinkRepoModel>,
}

impl Config {
    /// Validates every entry and the references between them.
    pub fn validate(self) -> Result<Registry, ConfigError> {
        let mut projects: HashMap<String, ProjectRepoModel> = HashMap::new();
        let mut project_order = Vec::with_capacity(self.projects.len());
        for request in self.projects {
            let name = request.project_name.clone();
            let project = ProjectRepoModel::try_from(request).map_err(|e| {
                ConfigError::InvalidProject {
                    name,
                    reason: e.to_string(),
                }
            })?;
            if projects.contains_key(&project.program_id) {
                return Err(ConfigError::DuplicateId(format!(
                    "Duplicate program ID found: {}",
                    project.program_id
                )));
            }
            project_order.push(project.program_id.clone());
            projects.insert(project.program_id.clone(), project);
        }

        let mut seen_ref_codes = HashSet::new();
        let mut blinks = Vec::with_capacity(self.blinks.len());
        for request in self.blinks {
            let ref_code = request.ref_code.clone();
            let blink = BlinkRepoModel::try_from(request).map_err(|e| {
                ConfigError::InvalidBlink {
                    ref_code: ref_code.clone(),
                    reason: e.to_string(),
                }
            })?;
            if !seen_ref_codes.insert(blink.ref_code.clone()) {
                return Err(ConfigError::DuplicateId(format!(
                    "Duplicate referral code found: {}",
                    blink.ref_code
                )));
            }
            let project =
                projects
                    .get(&blink.program_id)
                    .ok_or_else(|| ConfigError::UnknownProgram {
                        ref_code: blink.ref_code.clone(),
                        program_id: blink.program_id.clone(),
                    })?;
            blink
                .validate_against(project)
                .map_err(|e| ConfigError::InvalidBlink {
                    ref_code,
                    reason: e.to_string(),
                })?;
            blinks.push(blink);
        }

        let projects = project_order
            .into_iter()
            .filter_map(|program_id| projects.remove(&program_id))
            .collect();
        Ok(Registry { projects, blinks })
    }
}

/// Loads and validates the registry file at `path`.
pub fn load_config(path: &str) -> Result<Registry, ConfigError> {
    if !Path::new(path).exists() {
        warn!("Config file {} not found, starting with an empty registry", path);
        return Ok(Registry::default());
    }
    let config_str = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&config_str)?;
    let registry = config.validate()?;
    info!(
        "Loaded {} projects and {} blinks from {}",
        registry.projects.len(),
        registry.blinks.len(),
        path
    );
    Ok(registry)
}
