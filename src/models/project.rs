//! Registered projects: an on-chain program, its IDL, and the reward
//! configuration of each method offered for referral.

use std::borrow::Cow;
use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;
use validator::{Validate, ValidationError};

use super::{ApiError, IdlDocument, IdlError};

#[derive(Error, Debug, PartialEq)]
pub enum ProjectValidationError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Idl(#[from] IdlError),
    #[error("IDL does not declare a program address")]
    MissingProgramId,
    #[error("Invalid program id: {0}")]
    InvalidProgramId(String),
    #[error("Method '{0}' is not an instruction of the IDL")]
    UnknownMethod(String),
    #[error("Method '{0}' takes arguments, which blinks cannot supply")]
    MethodTakesArguments(String),
    #[error("Settings for method '{0}' do not match a selected method")]
    UnselectedMethodSettings(String),
}

impl From<ProjectValidationError> for ApiError {
    fn from(error: ProjectValidationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RewardStrategy {
    ShortTerm,
    LongTerm,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[validate(schema(function = "validate_boost_settings"))]
pub struct MethodSettings {
    pub method_name: String,
    pub strategy: RewardStrategy,
    #[validate(range(min = 0.0001, message = "Minimum reward amount is 0.0001"))]
    pub referral_reward: f64,
    #[validate(range(min = 1, message = "Minimum 1 day required"))]
    pub drip_days: Option<u32>,
    #[serde(default)]
    pub enable_volume_boost: bool,
    #[validate(range(min = 1, message = "Minimum threshold is 1"))]
    pub volume_threshold: Option<u64>,
    #[validate(range(min = 0.0001, message = "Minimum bonus amount is 0.0001"))]
    pub volume_bonus: Option<f64>,
    #[serde(default)]
    pub enable_time_boost: bool,
    #[validate(range(min = 1, message = "Minimum target is 1"))]
    pub time_target: Option<u64>,
    /// Boost window, in minutes.
    #[validate(range(min = 1, message = "Minimum window is 1 minute"))]
    pub time_window: Option<u64>,
    #[validate(range(min = 0.0001, message = "Minimum bonus amount is 0.0001"))]
    pub time_bonus: Option<f64>,
}

fn validate_boost_settings(settings: &MethodSettings) -> Result<(), ValidationError> {
    let volume_incomplete = settings.enable_volume_boost
        && (settings.volume_threshold.is_none() || settings.volume_bonus.is_none());
    let time_incomplete = settings.enable_time_boost
        && (settings.time_target.is_none()
            || settings.time_window.is_none()
            || settings.time_bonus.is_none());

    if volume_incomplete || time_incomplete {
        return Err(ValidationError::new("boost_settings").with_message(Cow::from(
            "Please fill in all required fields for enabled boost settings",
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectCreateRequest {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub project_name: String,
    pub idl: serde_json::Value,
    #[validate(length(min = 1, message = "Select at least one method"))]
    pub method_signatures: Vec<String>,
    #[validate(nested)]
    #[serde(default)]
    pub method_settings: Vec<MethodSettings>,
    #[validate(range(min = 0.1, message = "Minimum 0.1 SOL required"))]
    pub escrow_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRepoModel {
    pub program_id: String,
    pub project_name: String,
    pub idl: IdlDocument,
    pub method_signatures: Vec<String>,
    pub method_settings: Vec<MethodSettings>,
    pub escrow_amount: f64,
}

/// Listing view of a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub program_id: String,
    pub project_name: String,
    pub method_signatures: Vec<String>,
}

impl From<ProjectRepoModel> for ProjectSummary {
    fn from(project: ProjectRepoModel) -> Self {
        Self {
            program_id: project.program_id,
            project_name: project.project_name,
            method_signatures: project.method_signatures,
        }
    }
}

impl ProjectRepoModel {
    pub fn offers_method(&self, method: &str) -> bool {
        self.method_signatures.iter().any(|m| m == method)
    }

    pub fn settings_for(&self, method: &str) -> Option<&MethodSettings> {
        self.method_settings.iter().find(|s| s.method_name == method)
    }
}

impl TryFrom<ProjectCreateRequest> for ProjectRepoModel {
    type Error = ProjectValidationError;

    /// Validates the request and takes the program id from the IDL.
    fn try_from(request: ProjectCreateRequest) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|e| ProjectValidationError::Validation(e.to_string()))?;

        let idl = IdlDocument::from_value(request.idl)?;
        let program_id = idl
            .program_address()
            .ok_or(ProjectValidationError::MissingProgramId)?
            .to_string();
        Pubkey::from_str(&program_id)
            .map_err(|e| ProjectValidationError::InvalidProgramId(format!("{program_id}: {e}")))?;

        for method in &request.method_signatures {
            match idl.instruction(method) {
                None => return Err(ProjectValidationError::UnknownMethod(method.clone())),
                Some(instruction) if !instruction.args.is_empty() => {
                    return Err(ProjectValidationError::MethodTakesArguments(
                        method.clone(),
                    ))
                }
                Some(_) => {}
            }
        }

        let selected: HashSet<&str> = request
            .method_signatures
            .iter()
            .map(String::as_str)
            .collect();
        if let Some(settings) = request
            .method_settings
            .iter()
            .find(|s| !selected.contains(s.method_name.as_str()))
        {
            return Err(ProjectValidationError::UnselectedMethodSettings(
                settings.method_name.clone(),
            ));
        }

        Ok(Self {
            program_id,
            project_name: request.project_name,
            idl,
            method_signatures: request.method_signatures,
            method_settings: request.method_settings,
            escrow_amount: request.escrow_amount,
        })
    }
}
