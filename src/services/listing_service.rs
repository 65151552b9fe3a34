//! CRUD for service listings (workshops and other businesses).

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::services::{CreateServiceRequest, UpdateServiceRequest},
    entity::services::{self, ActiveModel, Column, Entity as Services},
    error::{AppError, AppResult},
    models::ServiceRead,
    routes::params::Pagination,
    state::AppState,
};

pub const SERVICE_NOT_FOUND: &str = "Service not found.";

pub async fn get_service(state: &AppState, id: i32) -> AppResult<ServiceRead> {
    let txn = state.orm.begin().await?;
    let service = find_service(&txn, id).await?;
    txn.commit().await?;
    Ok(service.into())
}

pub async fn list_services(state: &AppState, page: Pagination) -> AppResult<Vec<ServiceRead>> {
    let (limit, offset) = page.normalize();
    let txn = state.orm.begin().await?;
    let items = Services::find()
        .order_by_asc(Column::Id)
        .limit(limit)
        .offset(offset)
        .all(&txn)
        .await?;
    txn.commit().await?;
    Ok(items.into_iter().map(ServiceRead::from).collect())
}

pub async fn create_service(
    state: &AppState,
    payload: CreateServiceRequest,
) -> AppResult<ServiceRead> {
    let txn = state.orm.begin().await?;
    let active = ActiveModel {
        id: NotSet,
        created: NotSet,
        updated: NotSet,
        name: Set(payload.name),
        address: Set(payload.address),
        summary: Set(payload.summary),
        timetable: Set(payload.timetable),
        website: Set(payload.website),
    };
    let service = active.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!(service_id = service.id, "service created");
    Ok(service.into())
}

pub async fn update_service(
    state: &AppState,
    id: i32,
    payload: UpdateServiceRequest,
) -> AppResult<ServiceRead> {
    let txn = state.orm.begin().await?;
    let existing = find_service(&txn, id).await?;

    let mut active: ActiveModel = existing.into();
    apply_update(&mut active, payload);
    let service = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(service_id = service.id, "service updated");
    Ok(service.into())
}

pub async fn delete_service(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    let result = Services::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(SERVICE_NOT_FOUND));
    }
    txn.commit().await?;

    tracing::info!(service_id = id, "service deleted");
    Ok(())
}

async fn find_service<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<services::Model> {
    Services::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound(SERVICE_NOT_FOUND))
}

fn apply_update(active: &mut ActiveModel, payload: UpdateServiceRequest) {
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(address) = payload.address {
        active.address = Set(address);
    }
    if let Some(summary) = payload.summary {
        active.summary = Set(Some(summary));
    }
    if let Some(timetable) = payload.timetable {
        active.timetable = Set(timetable);
    }
    if let Some(website) = payload.website {
        active.website = Set(Some(website));
    }
}
