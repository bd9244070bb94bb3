// src/presentation/http/controllers/query.rs
use crate::application::{
    commands::info::{GenerateInfoQueryCommand, UpdateInfoQueryCommand},
    dto::GenerationReport,
};
use crate::domain::info::{Campaign, Environment};
use crate::presentation::http::extractors::{JsonPayload, RequestParseError};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::{Query, rejection::QueryRejection},
    http::StatusCode,
};
use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

/// Raw `key=value` pairs in request order.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EnvParams {
    /// Requested environment, `stg` (default) or `prod`.
    pub env: Option<String>,
}

impl EnvParams {
    /// The first `env` value wins; an unparseable query string is ignored.
    fn from_query(query: Result<Query<QueryPairs>, QueryRejection>) -> Self {
        match query {
            Ok(Query(pairs)) => Self {
                env: pairs
                    .into_iter()
                    .find(|(key, _)| key == "env")
                    .map(|(_, value)| value),
            },
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "ignoring query string");
                Self::default()
            }
        }
    }
}

/// JSON `null` decodes to the field's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct GenerateQueryRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub info_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    /// Campaign start, `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "2024-06-01")]
    pub start_time: String,
    /// Last campaign day (inclusive), `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    #[schema(example = "2024-06-02")]
    pub end_date: String,
    /// Target cities; omitted, null or empty selects every default city.
    #[serde(deserialize_with = "null_as_default")]
    pub cities: Vec<String>,
    #[serde(rename = "promocode", deserialize_with = "null_as_default")]
    pub promo_code: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateQueryRequest {
    /// Creation day of the rows to rewrite, `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prev_image_url: String,
    #[serde(flatten)]
    pub campaign: GenerateQueryRequest,
}

impl From<GenerateQueryRequest> for Campaign {
    fn from(request: GenerateQueryRequest) -> Self {
        Campaign {
            info_type: request.info_type,
            title: request.title,
            message: request.message,
            start_date: request.start_time,
            end_date: request.end_date,
            cities: request.cities,
            promo_code: request.promo_code,
        }
    }
}

fn resolve_environment(params: &EnvParams) -> Environment {
    match params.env.as_deref() {
        None | Some("") => Environment::default(),
        Some(value) => value.parse().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "unknown env, using stg");
            Environment::default()
        }),
    }
}

fn log_report(action: &'static str, report: &GenerationReport) {
    if report.is_complete() {
        tracing::info!(
            action,
            statements = report.statements_written,
            files = ?report.files,
            "scripts written"
        );
    } else {
        tracing::warn!(
            action,
            statements = report.statements_written,
            failures = report.failures.len(),
            "scripts partially written"
        );
    }
}

#[utoipa::path(
    post,
    path = "/query/generate",
    params(EnvParams),
    request_body = GenerateQueryRequest,
    responses(
        (status = 201, description = "Insert scripts appended for every environment."),
        (status = 200, description = "Body was not JSON; nothing written.")
    ),
    tag = "Queries"
)]
pub async fn generate_query(
    Extension(state): Extension<HttpState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    payload: Result<JsonPayload<GenerateQueryRequest>, RequestParseError>,
) -> StatusCode {
    let environment = resolve_environment(&EnvParams::from_query(query));
    let JsonPayload(request) = match payload {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse generate request");
            return StatusCode::OK;
        }
    };

    tracing::info!(title = %request.title, env = %environment, "generating query");

    let report = state
        .services
        .info_commands
        .generate(GenerateInfoQueryCommand {
            campaign: request.into(),
            environment,
        })
        .await;
    log_report("generate", &report);

    StatusCode::CREATED
}

#[utoipa::path(
    post,
    path = "/query/update",
    params(EnvParams),
    request_body = UpdateQueryRequest,
    responses(
        (status = 201, description = "Update scripts appended for every environment."),
        (status = 200, description = "Body was not JSON, or created_at / prev_image_url invalid; nothing written.")
    ),
    tag = "Queries"
)]
pub async fn update_query(
    Extension(state): Extension<HttpState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
    payload: Result<JsonPayload<UpdateQueryRequest>, RequestParseError>,
) -> StatusCode {
    let environment = resolve_environment(&EnvParams::from_query(query));
    let JsonPayload(request) = match payload {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse update request");
            return StatusCode::OK;
        }
    };

    tracing::info!(
        title = %request.campaign.title,
        created_at = %request.created_at,
        env = %environment,
        "updating query"
    );

    let command = UpdateInfoQueryCommand {
        campaign: request.campaign.into(),
        created_at: request.created_at,
        prev_image_url: request.prev_image_url,
        environment,
    };

    match state.services.info_commands.update(command).await {
        Ok(report) => {
            log_report("update", &report);
            StatusCode::CREATED
        }
        Err(err) => {
            tracing::warn!(error = %err, "update request rejected");
            StatusCode::OK
        }
    }
}
