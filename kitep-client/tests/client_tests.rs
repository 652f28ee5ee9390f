//! Integration tests for the HTTP client against an in-process backend

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use kitep_client::{load_snapshot, HttpLibraryClient, RemoteLibrary};
use kitep_core::{BookId, CategoryId, FetchError, Locale};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;

/// Bind the router on an ephemeral port and serve it in the background.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn client_for(router: Router) -> HttpLibraryClient {
    let addr = serve(router).await;
    HttpLibraryClient::new(&format!("http://{addr}/api")).unwrap()
}

async fn list_books() -> Json<Value> {
    // one book per accepted category-reference shape, ids in both wire forms
    Json(json!([
        {
            "id": 1,
            "title_ru": "Война и мир",
            "title_kg": "Согуш жана тынчтык",
            "author_ru": "Лев Толстой",
            "year": 1869,
            "category": { "id": 5, "name_ru": "Классика" },
            "file": "/media/books/voina-i-mir.pdf",
        },
        {
            "id": "2",
            "title_ru": "1984",
            "author_ru": "Джордж Оруэлл",
            "category_id": "7",
        },
        {
            "id": 3,
            "title_ru": "Сломанный меч",
            "category": 9,
        },
    ]))
}

async fn list_categories() -> Json<Value> {
    Json(json!([
        { "id": 5, "name_ru": "Классика", "name_kg": "Классика адабияты" },
        { "id": 7, "name": "Антиутопия" },
    ]))
}

async fn book_details(Path(id): Path<String>) -> Json<Value> {
    Json(json!({
        "id": id,
        "title_ru": "Война и мир",
        "category_id": 5,
    }))
}

fn library_router() -> Router {
    Router::new()
        .route("/api/books", get(list_books))
        .route("/api/books/:id", get(book_details))
        .route("/api/categories", get(list_categories))
}

#[tokio::test]
async fn test_fetch_books_normalizes_all_category_shapes() {
    let client = client_for(library_router()).await;
    let books = client.fetch_books(Locale::Ru, &[]).await.unwrap();

    assert_eq!(books.len(), 3);
    // original order, canonical string categories regardless of wire shape
    assert_eq!(books[0].id, BookId::new("1"));
    assert_eq!(books[0].category, CategoryId::new("5"));
    assert_eq!(books[1].category, CategoryId::new("7"));
    assert_eq!(books[2].category, CategoryId::new("9"));
    assert_eq!(books[0].title.resolve(Locale::Kg, Locale::Ru), "Согуш жана тынчтык");
    assert_eq!(books[1].title.resolve(Locale::Kg, Locale::Ru), "1984");
}

#[tokio::test]
async fn test_fetch_categories_decodes_both_name_variants() {
    let client = client_for(library_router()).await;
    let categories = client.fetch_categories(Locale::Ru).await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name.resolve(Locale::Kg, Locale::Ru), "Классика адабияты");
    assert_eq!(categories[1].name.resolve(Locale::Kg, Locale::Ru), "Антиутопия");
}

#[tokio::test]
async fn test_fetch_book_hits_the_details_endpoint() {
    let client = client_for(library_router()).await;
    let book = client.fetch_book(Locale::Ru, &BookId::new("42")).await.unwrap();
    assert_eq!(book.id, BookId::new("42"));
    assert_eq!(book.category, CategoryId::new("5"));
}

async fn echo_params(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    // reflect the query back through a text field the decoder keeps
    Json(json!([{
        "id": 1,
        "title": format!(
            "language={} categories={}",
            params.get("language").cloned().unwrap_or_default(),
            params.get("categories").cloned().unwrap_or_default(),
        ),
        "category_id": 1,
    }]))
}

#[tokio::test]
async fn test_locale_and_category_parameters_are_sent() {
    let router = Router::new().route("/api/books", get(echo_params));
    let client = client_for(router).await;

    let filters = [CategoryId::from(5), CategoryId::from(7)];
    let books = client.fetch_books(Locale::Kg, &filters).await.unwrap();
    assert_eq!(
        books[0].title.resolve(Locale::Ru, Locale::Ru),
        "language=kg categories=5,7"
    );
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn garbage() -> &'static str {
    "this is not json"
}

#[tokio::test]
async fn test_non_success_status_becomes_status_error() {
    let router = Router::new().route("/api/books", get(broken));
    let client = client_for(router).await;

    let error = client.fetch_books(Locale::Ru, &[]).await.unwrap_err();
    assert_eq!(error, FetchError::Status(500));
}

#[tokio::test]
async fn test_malformed_body_becomes_decode_error() {
    let router = Router::new().route("/api/categories", get(garbage));
    let client = client_for(router).await;

    let error = client.fetch_categories(Locale::Ru).await.unwrap_err();
    assert!(matches!(error, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_becomes_transport_error() {
    let client = HttpLibraryClient::new("http://127.0.0.1:1/api").unwrap();
    let error = client.fetch_books(Locale::Ru, &[]).await.unwrap_err();
    assert!(matches!(error, FetchError::Transport(_)));
}

#[tokio::test]
async fn test_load_snapshot_joins_both_collections() {
    let client = client_for(library_router()).await;
    let snapshot = load_snapshot(&client, Locale::Ru).await.unwrap();
    assert_eq!(snapshot.books.len(), 3);
    assert_eq!(snapshot.categories.len(), 2);
}

#[tokio::test]
async fn test_load_snapshot_fails_when_either_fetch_fails() {
    // books succeed, categories do not: the aggregate load is a failure
    let router = Router::new()
        .route("/api/books", get(list_books))
        .route("/api/categories", get(broken));
    let client = client_for(router).await;

    let error = load_snapshot(&client, Locale::Ru).await.unwrap_err();
    assert_eq!(error, FetchError::Status(500));
}
