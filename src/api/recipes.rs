use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use serde_json::json;

use crate::entities::{recipe, recipe_ingredient, prelude::*};

// GET /recipes
pub async fn list_recipes(Extension(db): Extension<DatabaseConnection>) -> Response {
    match Recipe::find()
        .order_by_asc(recipe::Column::Name)
        .all(&db)
        .await
    {
        Ok(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}

#[derive(Serialize)]
struct RecipeResponse {
    #[serde(flatten)]
    recipe: recipe::Model,
    ingredients: Vec<recipe_ingredient::Model>,
}

// GET /recipes/:id
pub async fn get_recipe(
    Extension(db): Extension<DatabaseConnection>,
    Path(recipe_id): Path<i32>,
) -> Response {
    let recipe = match Recipe::find_by_id(recipe_id).one(&db).await {
        Ok(Some(r)) => r,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Recipe not found"})),
            )
                .into_response()
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response()
        }
    };

    match RecipeIngredient::find()
        .filter(recipe_ingredient::Column::RecipeId.eq(recipe_id))
        .all(&db)
        .await
    {
        Ok(ingredients) => (
            StatusCode::OK,
            Json(RecipeResponse {
                recipe,
                ingredients,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
