use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit::{self, ACTOR_CUSTOMER},
    dto::reviews::{CreateReviewRequest, ReviewList},
    entity::reviews::{ActiveModel as ReviewActive, Column as ReviewCol, Entity as Reviews},
    error::AppResult,
    models::Review,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    services::catalog_service::find_movie,
    state::AppState,
};

pub async fn list_reviews(
    state: &AppState,
    movie_id: Uuid,
    pagination: Pagination,
) -> AppResult<ApiResponse<ReviewList>> {
    find_movie(state, movie_id).await?;
    let (page, limit, offset) = pagination.normalize();

    let finder = Reviews::find()
        .filter(ReviewCol::MovieId.eq(movie_id))
        .order_by_desc(ReviewCol::ReviewTime);

    let total = finder.clone().count(state.orm.as_ref()).await? as i64;

    let items: Vec<Review> = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(state.orm.as_ref())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let (average_rating, review_count): (Option<f64>, i64) = sqlx::query_as(
        r#"
        SELECT AVG(rating)::FLOAT8, COUNT(*)::BIGINT
        FROM reviews
        WHERE movie_id = $1
        "#,
    )
    .bind(movie_id)
    .fetch_one(&state.pool)
    .await?;

    let data = ReviewList {
        items,
        average_rating: average_rating.map(|avg| (avg * 10.0).round() / 10.0),
        review_count,
    };
    Ok(ApiResponse::success("Reviews", data, Some(Meta::new(page, limit, total))))
}

pub async fn create_review(
    state: &AppState,
    movie_id: Uuid,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    payload.validate()?;
    let movie = find_movie(state, movie_id).await?;

    let comment = payload
        .comment
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    let review = ReviewActive {
        id: Set(Uuid::new_v4()),
        movie_id: Set(movie.id),
        user_name: Set(payload.user_name.trim().to_string()),
        rating: Set(payload.rating),
        comment: Set(comment),
        review_time: Set(Utc::now().into()),
    }
    .insert(state.orm.as_ref())
    .await?;

    tracing::info!(review_id = %review.id, movie_id = %movie.id, rating = review.rating, "review added");

    audit::record(
        &state.pool,
        ACTOR_CUSTOMER,
        "review_create",
        "reviews",
        serde_json::json!({ "review_id": review.id, "movie_id": movie.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Review added",
        review.into(),
        Some(Meta::empty()),
    ))
}
