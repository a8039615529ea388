//! Post handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use inkpost_core::domain::{Post, PostFilter, PostInput, PostWithCategory};
use inkpost_core::error::{DomainError, RepoError};
use inkpost_shared::dto::{CategoryResponse, PostListQuery, PostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn post_not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// Malformed ids name no post, so they are reported as not found.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound("Post not found".to_string()))
}

fn to_input(req: PostRequest) -> PostInput {
    PostInput {
        title: req.title,
        content: req.content,
        category: req.category,
        featured_image: req.featured_image,
    }
}

fn to_response(resolved: PostWithCategory) -> PostResponse {
    let PostWithCategory { post, category } = resolved;
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        category: category.map(|c| CategoryResponse {
            id: c.id,
            name: c.name,
        }),
        featured_image: post.featured_image,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// Re-read a post that was just written, with its category joined.
async fn reload(state: &AppState, id: Uuid) -> AppResult<PostResponse> {
    state
        .posts
        .find_with_category(id)
        .await?
        .map(to_response)
        .ok_or_else(|| post_not_found(id))
}

/// GET /api/posts?search=&category=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<PostListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();

    let Some(filter) = PostFilter::from_query(query.search.as_deref(), query.category.as_deref())
    else {
        tracing::debug!(category = ?query.category, "Malformed category filter matches nothing");
        return Ok(HttpResponse::Ok().json(Vec::<PostResponse>::new()));
    };

    let posts: Vec<PostResponse> = state
        .posts
        .list(&filter)
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = reload(&state, id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let draft = to_input(body.into_inner()).validate()?;

    let saved = state.posts.insert(Post::new(draft)).await?;
    tracing::info!(%request_id, post_id = %saved.id, "Post created");

    let post = reload(&state, saved.id).await?;
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id} - full-record replace.
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let draft = to_input(body.into_inner()).validate()?;

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(id))?;

    state
        .posts
        .update(existing.replace(draft))
        .await
        .map_err(|e| match e {
            RepoError::NotFound => post_not_found(id),
            other => other.into(),
        })?;
    tracing::info!(%request_id, post_id = %id, "Post updated");

    let post = reload(&state, id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => post_not_found(id),
        other => other.into(),
    })?;
    tracing::info!(%request_id, post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
