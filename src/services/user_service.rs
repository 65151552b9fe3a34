use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    dto::users::{CreateUserRequest, UniqueUserFields, UpdateUserRequest},
    entity::users::{self, ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult, UniqueField},
    models::UserRead,
    routes::params::Pagination,
    services::password::hash_password,
    state::AppState,
};

pub const USER_NOT_FOUND: &str = "User not found.";

pub async fn get_user(state: &AppState, id: i32) -> AppResult<UserRead> {
    let txn = state.orm.begin().await?;
    let user = find_user(&txn, id).await?;
    txn.commit().await?;
    Ok(user.into())
}

pub async fn list_users(state: &AppState, page: Pagination) -> AppResult<Vec<UserRead>> {
    let (limit, offset) = page.normalize();
    let txn = state.orm.begin().await?;
    let items = Users::find()
        .order_by_asc(Column::Id)
        .limit(limit)
        .offset(offset)
        .all(&txn)
        .await?;
    txn.commit().await?;
    Ok(items.into_iter().map(UserRead::from).collect())
}

pub async fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<UserRead> {
    // Argon2 runs before the transaction opens: no pooled connection is held
    // while hashing.
    let password_hash = hash_password(&payload.password)?;

    let txn = state.orm.begin().await?;
    ensure_unique(&txn, UniqueUserFields::from(&payload)).await?;

    let active = ActiveModel {
        id: NotSet,
        created: NotSet,
        updated: NotSet,
        last_name: Set(payload.last_name),
        first_name: Set(payload.first_name),
        patronymic: Set(payload.patronymic),
        birthday: Set(payload.birthday),
        phone: Set(payload.phone),
        email: Set(payload.email),
        role: Set(payload.role),
        login: Set(payload.login),
        password_hash: Set(password_hash),
    };
    let user = active
        .insert(&txn)
        .await
        .map_err(AppError::from_user_write)?;
    txn.commit().await?;

    tracing::info!(user_id = user.id, "user created");
    Ok(user.into())
}

/// Applies the supplied fields of `payload` to the user with `id`.
///
/// The uniqueness check compares against every stored user, including the
/// one being updated, so re-sending an unchanged phone/email/login is
/// reported as a conflict.
pub async fn update_user(
    state: &AppState,
    id: i32,
    payload: UpdateUserRequest,
) -> AppResult<UserRead> {
    let password_hash = supplied_password_hash(&payload)?;

    let txn = state.orm.begin().await?;
    let existing = find_user(&txn, id).await?;
    ensure_unique(&txn, UniqueUserFields::from(&payload)).await?;

    let mut active: ActiveModel = existing.into();
    apply_update(&mut active, payload, password_hash);
    let user = active
        .update(&txn)
        .await
        .map_err(AppError::from_user_write)?;
    txn.commit().await?;

    tracing::info!(user_id = user.id, "user updated");
    Ok(user.into())
}

pub async fn delete_user(state: &AppState, id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    let result = Users::delete_by_id(id).exec(&txn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(USER_NOT_FOUND));
    }
    txn.commit().await?;

    tracing::info!(user_id = id, "user deleted");
    Ok(())
}

async fn find_user<C: ConnectionTrait>(conn: &C, id: i32) -> AppResult<users::Model> {
    Users::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound(USER_NOT_FOUND))
}

/// Rejects the request if any supplied unique value is already stored.
/// Phone is reported before email, email before login.
pub async fn ensure_unique<C: ConnectionTrait>(
    conn: &C,
    fields: UniqueUserFields<'_>,
) -> AppResult<()> {
    if fields.is_empty() {
        return Ok(());
    }

    let mut condition = Condition::any();
    if let Some(phone) = fields.phone {
        condition = condition.add(Column::Phone.eq(phone));
    }
    if let Some(email) = fields.email {
        condition = condition.add(Column::Email.eq(email));
    }
    if let Some(login) = fields.login {
        condition = condition.add(Column::Login.eq(login));
    }

    let clashes = Users::find().filter(condition).all(conn).await?;
    match first_conflict(&clashes, &fields) {
        Some(field) => Err(AppError::Conflict(field)),
        None => Ok(()),
    }
}

fn first_conflict(rows: &[users::Model], fields: &UniqueUserFields<'_>) -> Option<UniqueField> {
    [
        (UniqueField::Phone, fields.phone),
        (UniqueField::Email, fields.email),
        (UniqueField::Login, fields.login),
    ]
    .into_iter()
    .find(|(field, value)| {
        value.is_some_and(|v| rows.iter().any(|row| stored_value(row, *field) == v))
    })
    .map(|(field, _)| field)
}

fn stored_value(row: &users::Model, field: UniqueField) -> &str {
    match field {
        UniqueField::Phone => &row.phone,
        UniqueField::Email => &row.email,
        UniqueField::Login => &row.login,
    }
}

fn supplied_password_hash(payload: &UpdateUserRequest) -> AppResult<Option<String>> {
    payload.password.as_deref().map(hash_password).transpose()
}

/// `password_hash` is the already hashed `payload.password`, if any.
fn apply_update(
    active: &mut ActiveModel,
    payload: UpdateUserRequest,
    password_hash: Option<String>,
) {
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(patronymic) = payload.patronymic {
        active.patronymic = Set(Some(patronymic));
    }
    if let Some(birthday) = payload.birthday {
        active.birthday = Set(birthday);
    }
    if let Some(phone) = payload.phone {
        active.phone = Set(phone);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(role) = payload.role {
        active.role = Set(role);
    }
    if let Some(login) = payload.login {
        active.login = Set(login);
    }
    if let Some(hash) = password_hash {
        active.password_hash = Set(hash);
    }
}
