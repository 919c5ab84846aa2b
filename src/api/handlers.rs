//! HTTP API handlers.

use super::state::AppState;
use crate::error::{InvalidInputError, StoreError, ValidationError};
use crate::models::{
    Connection, ConnectionInput, Device, DeviceInput, DeviceKind, Project, ProjectInput, SubnetFacts,
    SubnetInput, SubnetRecord, Vlan, VlanInput,
};
use crate::processing::{calculate, validate, PrefixInput};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

type SharedState = State<Arc<AppState>>;
type JsonBody<T> = Result<Json<T>, JsonRejection>;

/// Error body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(e) => (StatusCode::BAD_REQUEST, e),
            ApiError::NotFound(e) => (StatusCode::NOT_FOUND, e),
            ApiError::Internal(e) => {
                log::error!("request failed: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, e)
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<InvalidInputError> for ApiError {
    fn from(e: InvalidInputError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest(e.body_text())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            _ => ApiError::Internal(e.to_string()),
        }
    }
}

fn body<T>(payload: JsonBody<T>) -> Result<T, ApiError> {
    let Json(value) = payload?;
    Ok(value)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of a subnet calculator request.
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculatorRequest {
    pub network: String,
    #[serde(default, rename = "prefixLength")]
    pub prefix_length: Option<serde_json::Value>,
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// One entry of the device palette.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeviceKindEntry {
    pub id: DeviceKind,
    pub name: String,
    pub color: String,
}

/// `GET /api/device-kinds`
pub async fn list_device_kinds() -> Json<Vec<DeviceKindEntry>> {
    Json(
        DeviceKind::all()
            .map(|kind| {
                let info = kind.info();
                DeviceKindEntry {
                    id: kind,
                    name: info.name.to_string(),
                    color: info.color.to_string(),
                }
            })
            .collect(),
    )
}

/// `POST /api/tools/subnet-calculator`
pub async fn subnet_calculator(
    payload: JsonBody<CalculatorRequest>,
) -> Result<Json<SubnetFacts>, ApiError> {
    let request = body(payload)?;
    let prefix = request
        .prefix_length
        .map(PrefixInput::try_from)
        .transpose()?;
    let facts = calculate(&request.network, prefix).map_err(|e| {
        log::info!("rejected calculator input '{}': {e}", request.network);
        e
    })?;
    Ok(Json(facts))
}

pub async fn list_projects(State(state): SharedState) -> Json<Vec<Project>> {
    Json(state.store.read().await.list_projects())
}

pub async fn create_project(
    State(state): SharedState,
    payload: JsonBody<ProjectInput>,
) -> Result<Json<Project>, ApiError> {
    let input = body(payload)?;
    validate::validate_project(&input)?;
    let project = state.store.write().await.create_project(input)?;
    Ok(Json(project))
}

pub async fn get_project(
    State(state): SharedState,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    state
        .store
        .read()
        .await
        .get_project(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("project not found: {id}")))
}

pub async fn list_devices(
    State(state): SharedState,
    Path(project_id): Path<String>,
) -> Json<Vec<Device>> {
    Json(state.store.read().await.list_devices(&project_id))
}

pub async fn create_device(
    State(state): SharedState,
    Path(project_id): Path<String>,
    payload: JsonBody<DeviceInput>,
) -> Result<Json<Device>, ApiError> {
    let input = body(payload)?;
    validate::validate_device(&input)?;
    let device = state.store.write().await.create_device(&project_id, input)?;
    Ok(Json(device))
}

pub async fn update_device(
    State(state): SharedState,
    Path(id): Path<String>,
    payload: JsonBody<DeviceInput>,
) -> Result<Json<Device>, ApiError> {
    let input = body(payload)?;
    validate::validate_device(&input)?;
    let device = state.store.write().await.update_device(&id, input)?;
    Ok(Json(device))
}

pub async fn delete_device(
    State(state): SharedState,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.write().await.delete_device(&id)?;
    Ok(Json(MessageResponse {
        message: "device deleted".to_string(),
    }))
}

pub async fn list_connections(
    State(state): SharedState,
    Path(project_id): Path<String>,
) -> Json<Vec<Connection>> {
    Json(state.store.read().await.list_connections(&project_id))
}

pub async fn create_connection(
    State(state): SharedState,
    Path(project_id): Path<String>,
    payload: JsonBody<ConnectionInput>,
) -> Result<Json<Connection>, ApiError> {
    let input = body(payload)?;
    validate::validate_connection(&input)?;
    let connection = state
        .store
        .write()
        .await
        .create_connection(&project_id, input)?;
    Ok(Json(connection))
}

pub async fn list_vlans(
    State(state): SharedState,
    Path(project_id): Path<String>,
) -> Json<Vec<Vlan>> {
    Json(state.store.read().await.list_vlans(&project_id))
}

pub async fn create_vlan(
    State(state): SharedState,
    Path(project_id): Path<String>,
    payload: JsonBody<VlanInput>,
) -> Result<Json<Vlan>, ApiError> {
    let input = body(payload)?;
    validate::validate_vlan(&input)?;
    let vlan = state.store.write().await.create_vlan(&project_id, input)?;
    Ok(Json(vlan))
}

pub async fn list_subnets(
    State(state): SharedState,
    Path(project_id): Path<String>,
) -> Json<Vec<SubnetRecord>> {
    Json(state.store.read().await.list_subnets(&project_id))
}

pub async fn create_subnet(
    State(state): SharedState,
    Path(project_id): Path<String>,
    payload: JsonBody<SubnetInput>,
) -> Result<Json<SubnetRecord>, ApiError> {
    let input = body(payload)?;
    validate::validate_subnet(&input)?;
    let subnet = state.store.write().await.create_subnet(&project_id, input)?;
    Ok(Json(subnet))
}

/// `GET /api/subnets/:id/facts`
pub async fn subnet_facts(
    State(state): SharedState,
    Path(id): Path<String>,
) -> Result<Json<SubnetFacts>, ApiError> {
    let facts = state.store.read().await.subnet_facts(&id)??;
    Ok(Json(facts))
}
