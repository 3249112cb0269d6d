//! Solana Actions handlers: metadata and transaction creation for a blink.
use actix_web::HttpResponse;
use log::info;

use crate::{
    constants::{ACTIONS_PATH_PREFIX, ACTION_BUTTON_LABEL},
    domain::encode_transaction,
    models::{
        ActionGetResponse, ActionLinks, ActionPostRequest, ActionPostResponse, ActionType,
        AppState, BlinkRepoModel, LinkedAction, ProjectRepoModel, TransactionBuildError,
    },
    utils::to_title,
};

async fn find_blink(
    ref_code: String,
    state: &AppState,
) -> Result<(BlinkRepoModel, ProjectRepoModel), TransactionBuildError> {
    let blink = state.blink_repository.get_by_id(ref_code).await?;
    let project = state
        .project_repository
        .get_by_id(blink.program_id.clone())
        .await?;
    Ok((blink, project))
}

fn icon_url(icon_path: &str, origin: &str) -> String {
    if icon_path.starts_with("http://") || icon_path.starts_with("https://") {
        icon_path.to_string()
    } else {
        format!("{}{}", origin, icon_path)
    }
}

/// Returns the metadata Blink clients render for `ref_code`.
///
/// `origin` is the `scheme://host` the request was made against.
pub async fn get_action(
    ref_code: String,
    origin: String,
    state: &AppState,
) -> Result<HttpResponse, TransactionBuildError> {
    let (blink, project) = find_blink(ref_code, state).await?;
    let title = to_title(&blink.method_signature);

    let response = ActionGetResponse {
        kind: ActionType::Action,
        icon: icon_url(&state.action_icon_path, &origin),
        description: format!(
            "{} on {}. Referred by {}.",
            title, project.project_name, blink.ref_code
        ),
        label: title.clone(),
        title,
        links: Some(ActionLinks {
            actions: vec![LinkedAction {
                kind: ActionType::Transaction,
                label: ACTION_BUTTON_LABEL.to_string(),
                href: format!("{}/{}", ACTIONS_PATH_PREFIX, blink.ref_code),
            }],
        }),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Builds the unsigned transaction for the wallet in `request.account`.
pub async fn create_action_transaction(
    ref_code: String,
    request: ActionPostRequest,
    state: &AppState,
) -> Result<HttpResponse, TransactionBuildError> {
    let (blink, project) = find_blink(ref_code, state).await?;

    let transaction = state
        .transaction_builder
        .build(
            &project.idl,
            &blink.method_signature,
            &request.account,
            &project.program_id,
        )
        .await?;

    info!(
        "Created '{}' transaction for blink {} and account {}",
        blink.method_signature, blink.ref_code, request.account
    );

    Ok(HttpResponse::Ok().json(ActionPostResponse::transaction(encode_transaction(
        &transaction,
    )?)))
}
