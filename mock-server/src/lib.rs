use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub text: String,
}

#[derive(Deserialize)]
pub struct PostInput {
    pub text: String,
}

/// Posts keyed by id; ids are handed out in increasing order, so iteration
/// order is creation order.
#[derive(Default)]
pub struct Store {
    next_id: u64,
    posts: BTreeMap<u64, Post>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/posts", get(list_posts).post(create_post))
        .route("/api/posts/{id}", put(update_post).delete(delete_post))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn validate(input: &PostInput) -> Result<(), StatusCode> {
    if input.text.trim().is_empty() {
        tracing::debug!("rejecting blank post text");
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(())
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    let store = db.read().await;
    Json(store.posts.values().cloned().collect())
}

async fn create_post(
    State(db): State<Db>,
    Json(input): Json<PostInput>,
) -> Result<(StatusCode, Json<Post>), StatusCode> {
    validate(&input)?;
    let mut store = db.write().await;
    store.next_id += 1;
    let post = Post {
        id: store.next_id,
        text: input.text,
    };
    store.posts.insert(post.id, post.clone());
    tracing::info!(id = post.id, "post created");
    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<PostInput>,
) -> Result<Json<Post>, StatusCode> {
    validate(&input)?;
    let mut store = db.write().await;
    let post = store.posts.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    post.text = input.text;
    tracing::info!(id, "post updated");
    Ok(Json(post.clone()))
}

async fn delete_post(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store.posts.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!(id, "post deleted");
    Ok(StatusCode::NO_CONTENT)
}
