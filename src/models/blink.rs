//! Blinks: shareable referral links bound to one method of a project.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{ApiError, IdlDocument, MethodSettings, ProjectRepoModel};
use crate::constants::MAX_ID_LENGTH;

lazy_static! {
    pub static ref REF_CODE_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9-_]+$").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct BlinkCreateRequest {
    #[validate(
        length(
            min = 1,
            max = MAX_ID_LENGTH,
            message = "Referral code must be between 1 and 36 characters"
        ),
        regex(
            path = *REF_CODE_REGEX,
            message = "Referral code must contain only letters, numbers, dashes and underscores"
        )
    )]
    pub ref_code: String,
    #[validate(length(min = 1, message = "Program id is required"))]
    pub program_id: String,
    #[validate(length(min = 1, message = "Method is required"))]
    pub method_signature: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlinkRepoModel {
    pub ref_code: String,
    pub program_id: String,
    /// Name of the IDL instruction the blink invokes.
    pub method_signature: String,
}

impl BlinkRepoModel {
    /// Checks the blink against the project it points to.
    pub fn validate_against(&self, project: &ProjectRepoModel) -> Result<(), ApiError> {
        if self.program_id != project.program_id {
            return Err(ApiError::BadRequest(format!(
                "Blink {} does not belong to program {}",
                self.ref_code, project.program_id
            )));
        }
        if !project.offers_method(&self.method_signature) {
            return Err(ApiError::BadRequest(format!(
                "Method '{}' is not offered by project {}",
                self.method_signature, project.program_id
            )));
        }
        let takes_args = project
            .idl
            .instruction(&self.method_signature)
            .is_some_and(|instruction| !instruction.args.is_empty());
        if takes_args {
            return Err(ApiError::BadRequest(format!(
                "Method '{}' takes arguments, which blinks cannot supply",
                self.method_signature
            )));
        }
        Ok(())
    }
}

impl TryFrom<BlinkCreateRequest> for BlinkRepoModel {
    type Error = ApiError;

    fn try_from(request: BlinkCreateRequest) -> Result<Self, Self::Error> {
        request
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(Self {
            ref_code: request.ref_code,
            program_id: request.program_id,
            method_signature: request.method_signature,
        })
    }
}

/// A blink joined with the IDL and reward settings of its project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlinkResponse {
    pub ref_code: String,
    pub program_id: String,
    pub method_signature: String,
    pub idl_content: IdlDocument,
    pub method_settings: Option<MethodSettings>,
}

impl BlinkResponse {
    pub fn new(blink: BlinkRepoModel, project: &ProjectRepoModel) -> Self {
        Self {
            method_settings: project.settings_for(&blink.method_signature).cloned(),
            idl_content: project.idl.clone(),
            ref_code: blink.ref_code,
            program_id: blink.program_id,
            method_signature: blink.method_signature,
        }
    }
}
