//! HTTP access to the library backend

use async_trait::async_trait;
use kitep_core::{Book, BookId, Category, CategoryId, FetchError, Locale};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Read access to the library backend.
///
/// A trait seam so the presentation layer and tests can substitute an
/// in-memory fake for the real HTTP client. One attempt per call; retries
/// are user-initiated.
#[async_trait]
pub trait RemoteLibrary: Send + Sync {
    /// Fetch the book collection for a locale, optionally pre-filtered by
    /// category on the server side.
    async fn fetch_books(
        &self,
        locale: Locale,
        categories: &[CategoryId],
    ) -> Result<Vec<Book>, FetchError>;

    /// Fetch the category list for a locale.
    async fn fetch_categories(&self, locale: Locale) -> Result<Vec<Category>, FetchError>;

    /// Fetch a single book by identifier.
    async fn fetch_book(&self, locale: Locale, id: &BookId) -> Result<Book, FetchError>;
}

/// `RemoteLibrary` implementation over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLibraryClient {
    http: Client,
    base: Url,
}

impl HttpLibraryClient {
    /// Build a client for the given API base URL, e.g.
    /// `https://library.example.edu/api`.
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let mut base =
            Url::parse(base).map_err(|error| FetchError::Transport(error.to_string()))?;
        // a trailing slash keeps Url::join from eating the last path segment
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        Ok(Self {
            http: Client::new(),
            base,
        })
    }

    /// The API base this client talks to. Relative file references resolve
    /// against it.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Start fetching an arbitrary file URL, typically a resolved book file.
    /// Returns the response after status checking so the caller can stream
    /// the body.
    pub async fn start_download(&self, url: Url) -> Result<reqwest::Response, FetchError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response)
    }

    fn endpoint(&self, segment: &str) -> Result<Url, FetchError> {
        self.base
            .join(segment)
            .map_err(|error| FetchError::Transport(error.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, FetchError> {
        let response = request
            .send()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .json::<T>()
            .await
            .map_err(|error| FetchError::Decode(error.to_string()))
    }
}

#[async_trait]
impl RemoteLibrary for HttpLibraryClient {
    async fn fetch_books(
        &self,
        locale: Locale,
        categories: &[CategoryId],
    ) -> Result<Vec<Book>, FetchError> {
        let mut request = self
            .http
            .get(self.endpoint("books")?)
            .query(&[("language", locale.code())]);
        if !categories.is_empty() {
            let ids: Vec<&str> = categories.iter().map(CategoryId::as_str).collect();
            request = request.query(&[("categories", ids.join(","))]);
        }
        tracing::debug!(locale = locale.code(), "fetching books");
        Self::get_json(request).await
    }

    async fn fetch_categories(&self, locale: Locale) -> Result<Vec<Category>, FetchError> {
        let request = self
            .http
            .get(self.endpoint("categories")?)
            .query(&[("language", locale.code())]);
        tracing::debug!(locale = locale.code(), "fetching categories");
        Self::get_json(request).await
    }

    async fn fetch_book(&self, locale: Locale, id: &BookId) -> Result<Book, FetchError> {
        let request = self
            .http
            .get(self.endpoint(&format!("books/{id}"))?)
            .query(&[("language", locale.code())]);
        tracing::debug!(book = %id, "fetching book details");
        Self::get_json(request).await
    }
}
