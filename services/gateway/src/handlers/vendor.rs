use crate::error::AppError;
use crate::models::{
    CreateVendorRequest, ListVendorsQuery, RiskAssessmentResponse, VendorResponse,
};
use crate::state::AppState;
use crate::validation::validate_create_vendor;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use types::errors::VendorError;
use types::ids::VendorId;
use types::vendor::VendorProfile;

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const PAGE_HEADER: &str = "x-page";
pub const PAGE_SIZE_HEADER: &str = "x-page-size";

fn parse_vendor_id(raw: &str) -> Result<VendorId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid vendor ID: {raw}")))
}

async fn load_vendor(state: &AppState, vendor_id: VendorId) -> Result<VendorProfile, AppError> {
    state
        .vendors
        .get(vendor_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(%vendor_id, "vendor not found");
            VendorError::NotFound { vendor_id }.into()
        })
}

pub async fn create_vendor(
    State(state): State<AppState>,
    payload: Result<Json<CreateVendorRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    tracing::info!(vendor_name = %payload.name, "creating vendor");

    let vendor = validate_create_vendor(payload, Utc::now())?;
    let vendor = state.vendors.insert(vendor).await?;

    tracing::info!(vendor_id = %vendor.vendor_id, "vendor created");

    let location = format!("/api/vendor/{}", vendor.vendor_id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(VendorResponse::from(vendor)),
    ))
}

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<Json<VendorResponse>, AppError> {
    let vendor_id = parse_vendor_id(&vendor_id)?;
    let vendor = load_vendor(&state, vendor_id).await?;
    Ok(Json(vendor.into()))
}

pub async fn list_vendors(
    State(state): State<AppState>,
    Query(query): Query<ListVendorsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page();
    tracing::info!(page = page.number, page_size = page.size, "listing vendors");

    let total = state.vendors.count().await?;
    let vendors: Vec<VendorResponse> = state
        .vendors
        .list(page)
        .await?
        .into_iter()
        .map(VendorResponse::from)
        .collect();

    let mut headers = HeaderMap::new();
    headers.insert(HeaderName::from_static(TOTAL_COUNT_HEADER), HeaderValue::from(total));
    headers.insert(HeaderName::from_static(PAGE_HEADER), HeaderValue::from(page.number));
    headers.insert(HeaderName::from_static(PAGE_SIZE_HEADER), HeaderValue::from(page.size));

    Ok((headers, Json(vendors)))
}

/// Compute a fresh assessment for the vendor and append it to the store.
pub async fn assess_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<Json<RiskAssessmentResponse>, AppError> {
    let vendor_id = parse_vendor_id(&vendor_id)?;
    let vendor = load_vendor(&state, vendor_id).await?;

    let (assessment, events) = state.scorer.assess_with_events(&vendor, Utc::now());
    for event in &events {
        tracing::warn!(
            %vendor_id,
            event = ?event.event_type,
            risk_level = %event.risk_level,
            "assessment event"
        );
    }

    state.assessments.append(assessment.clone()).await?;

    tracing::info!(
        %vendor_id,
        risk_level = %assessment.risk_level,
        score = %assessment.final_risk_score,
        "risk assessment stored"
    );

    Ok(Json(assessment.into()))
}

pub async fn list_assessments(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<Json<Vec<RiskAssessmentResponse>>, AppError> {
    let vendor_id = parse_vendor_id(&vendor_id)?;
    load_vendor(&state, vendor_id).await?;

    let history = state
        .assessments
        .list_for_vendor(vendor_id)
        .await?
        .into_iter()
        .map(RiskAssessmentResponse::from)
        .collect();

    Ok(Json(history))
}

/// Delete a vendor together with its stored assessments.
pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let vendor_id = parse_vendor_id(&vendor_id)?;

    if state.vendors.remove(vendor_id).await?.is_none() {
        tracing::warn!(%vendor_id, "vendor not found");
        return Err(VendorError::NotFound { vendor_id }.into());
    }
    let removed = state.assessments.remove_for_vendor(vendor_id).await?;

    tracing::info!(%vendor_id, removed_assessments = removed, "vendor deleted");
    Ok(StatusCode::NO_CONTENT)
}
