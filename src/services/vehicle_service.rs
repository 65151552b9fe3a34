//! Read-only access to the vehicle catalog.
//!
//! Every child listing first checks that its parent exists and fails with a
//! 404 before running the child query.

use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PrimaryKeyTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::{
    entity::{
        Configurations, Generations, Makes, Ranges, VehicleModels, configurations, generations,
        makes, ranges, vehicle_models,
    },
    error::{AppError, AppResult},
    models::{ConfigurationRead, GenerationRead, MakeRead, ModelRead, RangeRead},
    routes::params::{ConfigurationQuery, GenerationQuery, MakeQuery, ModelQuery, RangeQuery},
    state::AppState,
};

pub const MAKE_NOT_FOUND: &str = "Vehicle make not found.";
pub const MODEL_NOT_FOUND: &str = "Vehicle model not found.";
pub const RANGE_NOT_FOUND: &str = "Vehicles model range not found.";
pub const GENERATION_NOT_FOUND: &str = "Vehicle generation not found.";

pub async fn list_makes(state: &AppState, query: MakeQuery) -> AppResult<Vec<MakeRead>> {
    let mut finder = Makes::find();
    if let Some(pattern) = contains_pattern(query.query.as_deref()) {
        finder = finder.filter(Expr::col(makes::Column::Name).ilike(pattern));
    }

    let txn = state.orm.begin().await?;
    let items = finder
        .order_by_asc(makes::Column::Name)
        .all(&txn)
        .await?;
    txn.commit().await?;
    Ok(items.into_iter().map(MakeRead::from).collect())
}

pub async fn list_models(state: &AppState, query: ModelQuery) -> AppResult<Vec<ModelRead>> {
    let txn = state.orm.begin().await?;
    ensure_exists::<Makes, _>(&txn, query.make_id, MAKE_NOT_FOUND).await?;

    let mut finder = VehicleModels::find().filter(vehicle_models::Column::MakeId.eq(query.make_id));
    if let Some(pattern) = contains_pattern(query.query.as_deref()) {
        finder = finder.filter(Expr::col(vehicle_models::Column::Name).ilike(pattern));
    }
    let items = finder
        .order_by_asc(vehicle_models::Column::Name)
        .all(&txn)
        .await?;
    txn.commit().await?;
    Ok(items.into_iter().map(ModelRead::from).collect())
}

pub async fn list_ranges(state: &AppState, query: RangeQuery) -> AppResult<Vec<RangeRead>> {
    let txn = state.orm.begin().await?;
    ensure_exists::<VehicleModels, _>(&txn, query.model_id, MODEL_NOT_FOUND).await?;

    let items = Ranges::find()
        .filter(ranges::Column::ModelId.eq(query.model_id))
        .order_by_asc(ranges::Column::Id)
        .all(&txn)
        .await?;
    txn.commit().await?;
    Ok(items.into_iter().map(RangeRead::from).collect())
}

pub async fn list_generations(
    state: &AppState,
    query: GenerationQuery,
) -> AppResult<Vec<GenerationRead>> {
    let txn = state.orm.begin().await?;
    ensure_exists::<Ranges, _>(&txn, query.range_id, RANGE_NOT_FOUND).await?;

    let items = Generations::find()
        .filter(generations::Column::RangeId.eq(query.range_id))
        .order_by_asc(generations::Column::Id)
        .all(&txn)
        .await?;
    txn.commit().await?;
    Ok(items.into_iter().map(GenerationRead::from).collect())
}

pub async fn list_configurations(
    state: &AppState,
    query: ConfigurationQuery,
) -> AppResult<Vec<ConfigurationRead>> {
    let txn = state.orm.begin().await?;
    ensure_exists::<Generations, _>(&txn, query.generation_id, GENERATION_NOT_FOUND).await?;

    let items = Configurations::find()
        .filter(configurations::Column::GenerationId.eq(query.generation_id))
        .order_by_asc(configurations::Column::Id)
        .all(&txn)
        .await?;
    txn.commit().await?;
    Ok(items.into_iter().map(ConfigurationRead::from).collect())
}

async fn ensure_exists<E, C>(conn: &C, id: i32, message: &'static str) -> AppResult<()>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    C: ConnectionTrait,
{
    match E::find_by_id(id).one(conn).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(message)),
    }
}

/// `ILIKE` pattern for a case-insensitive substring match; `None` for an
/// absent or empty search string.
fn contains_pattern(query: Option<&str>) -> Option<String> {
    query
        .filter(|q| !q.is_empty())
        .map(|q| format!("%{q}%"))
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn empty_query_means_no_filter() {
        assert_eq!(contains_pattern(None), None);
        assert_eq!(contains_pattern(Some("")), None);
        assert_eq!(contains_pattern(Some("ren")), Some("%ren%".to_string()));
    }
}
