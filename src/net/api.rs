//! REST API client for the expense-tracker backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the
//! session token attached as a bearer credential.
//! Server-side (SSR): stubs returning a network error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is normalized into [`ApiError`] before it leaves this
//! module: callers never see raw transport errors or response bodies.
//! Each operation carries a fallback message used when the server
//! supplies none. No call is ever retried here.

use crate::net::error::ApiError;
use crate::net::query::ListQuery;
use crate::net::types::{
    Category, CategoryPayload, Expense, ExpensePayload, LoginRequest, LoginResponse, Page,
    SignupRequest, User,
};

/// Fallback messages, one per operation, shown when the server response
/// carries no `message` of its own.
#[cfg(feature = "hydrate")]
mod fallback {
    pub const LOGIN: &str = "Login failed";
    pub const SIGNUP: &str = "Signup failed";
    pub const LOAD_USER: &str = "Failed to load user";
    pub const LOAD_CATEGORIES: &str = "Failed to load categories";
    pub const SAVE_CATEGORY: &str = "Failed to save category";
    pub const DELETE_CATEGORY: &str = "Failed to delete category";
    pub const LOAD_EXPENSES: &str = "Failed to load expenses";
    pub const SAVE_EXPENSE: &str = "Failed to save expense";
    pub const DELETE_EXPENSE: &str = "Failed to delete expense";
}

#[cfg(not(feature = "hydrate"))]
const OFFLINE: &str = "not available on server";

/// Authenticate with username-or-email + password.
pub async fn login(req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::post_json("/auth/login", None, req, fallback::LOGIN).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::network(OFFLINE))
    }
}

/// Register a new account. The caller signs in separately afterwards.
pub async fn signup(req: &SignupRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::post_json_unit("/auth/signup", None, req, fallback::SIGNUP).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::network(OFFLINE))
    }
}

/// Fetch the authenticated user's profile. A 401 here is the canonical
/// signal that the persisted session is stale.
pub async fn fetch_me(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::get_json("/users/me", Some(token), fallback::LOAD_USER).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::network(OFFLINE))
    }
}

/// Fetch one page of categories.
pub async fn fetch_categories(
    token: &str,
    query: &ListQuery,
) -> Result<Page<Category>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::fetch_page("/categories", token, query, fallback::LOAD_CATEGORIES).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::network(OFFLINE))
    }
}

pub async fn create_category(
    token: &str,
    payload: &CategoryPayload,
) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::post_json("/categories", Some(token), payload, fallback::SAVE_CATEGORY).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(ApiError::network(OFFLINE))
    }
}

pub async fn update_category(
    token: &str,
    id: i64,
    payload: &CategoryPayload,
) -> Result<Category, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::put_json(
            &format!("/categories/{id}"),
            Some(token),
            payload,
            fallback::SAVE_CATEGORY,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::network(OFFLINE))
    }
}

pub async fn delete_category(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::delete_at(
            &format!("/categories/{id}"),
            Some(token),
            fallback::DELETE_CATEGORY,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::network(OFFLINE))
    }
}

/// Fetch one page of expenses.
pub async fn fetch_expenses(token: &str, query: &ListQuery) -> Result<Page<Expense>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::fetch_page("/expenses", token, query, fallback::LOAD_EXPENSES).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, query);
        Err(ApiError::network(OFFLINE))
    }
}

pub async fn create_expense(token: &str, payload: &ExpensePayload) -> Result<Expense, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::post_json("/expenses", Some(token), payload, fallback::SAVE_EXPENSE).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, payload);
        Err(ApiError::network(OFFLINE))
    }
}

pub async fn update_expense(
    token: &str,
    id: i64,
    payload: &ExpensePayload,
) -> Result<Expense, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::put_json(
            &format!("/expenses/{id}"),
            Some(token),
            payload,
            fallback::SAVE_EXPENSE,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id, payload);
        Err(ApiError::network(OFFLINE))
    }
}

pub async fn delete_expense(token: &str, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        browser::delete_at(
            &format!("/expenses/{id}"),
            Some(token),
            fallback::DELETE_EXPENSE,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, id);
        Err(ApiError::network(OFFLINE))
    }
}

/// The generic request core. Every list endpoint goes through
/// `fetch_page` and every mutation through `post_json`/`put_json`/
/// `delete_at`, so the bearer header, error normalization, and page
/// sanity check are implemented exactly once.
#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::net::error::ApiError;
    use crate::net::query::ListQuery;
    use crate::net::types::Page;

    const API_BASE: &str = "/api";

    fn bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(t) => builder.header("Authorization", &format!("Bearer {t}")),
            None => builder,
        }
    }

    /// Read the server's `{ "message": ... }` body, if any, and fold the
    /// response into an [`ApiError`].
    async fn into_error(resp: Response, fallback: &str) -> ApiError {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            message: Option<String>,
        }

        let status = resp.status();
        let message = resp.json::<ErrorBody>().await.ok().and_then(|b| b.message);
        ApiError::from_status(status, message, fallback)
    }

    async fn decode<T: DeserializeOwned>(resp: Response, fallback: &str) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(into_error(resp, fallback).await);
        }
        match resp.json::<T>().await {
            Ok(value) => Ok(value),
            Err(e) => {
                leptos::logging::warn!("response decode failed: {e}");
                Err(ApiError::network(fallback))
            }
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let resp = bearer(Request::get(&format!("{API_BASE}{path}")), token)
            .send()
            .await
            .map_err(|_| ApiError::network(fallback))?;
        decode(resp, fallback).await
    }

    pub async fn fetch_page<T: DeserializeOwned>(
        path: &str,
        token: &str,
        query: &ListQuery,
        fallback: &str,
    ) -> Result<Page<T>, ApiError> {
        let url = format!("{path}{}", query.to_query());
        let page: Page<T> = get_json(&url, Some(token), fallback).await?;
        if !page.in_bounds() {
            leptos::logging::warn!("inconsistent page metadata from {path}");
        }
        Ok(page)
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let resp = bearer(Request::post(&format!("{API_BASE}{path}")), token)
            .json(body)
            .map_err(|_| ApiError::network(fallback))?
            .send()
            .await
            .map_err(|_| ApiError::network(fallback))?;
        decode(resp, fallback).await
    }

    /// POST where the caller only needs success/failure, not a body.
    pub async fn post_json_unit<B: Serialize>(
        path: &str,
        token: Option<&str>,
        body: &B,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let resp = bearer(Request::post(&format!("{API_BASE}{path}")), token)
            .json(body)
            .map_err(|_| ApiError::network(fallback))?
            .send()
            .await
            .map_err(|_| ApiError::network(fallback))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(into_error(resp, fallback).await)
        }
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
        body: &B,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let resp = bearer(Request::put(&format!("{API_BASE}{path}")), token)
            .json(body)
            .map_err(|_| ApiError::network(fallback))?
            .send()
            .await
            .map_err(|_| ApiError::network(fallback))?;
        decode(resp, fallback).await
    }

    pub async fn delete_at(
        path: &str,
        token: Option<&str>,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let resp = bearer(Request::delete(&format!("{API_BASE}{path}")), token)
            .send()
            .await
            .map_err(|_| ApiError::network(fallback))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(into_error(resp, fallback).await)
        }
    }
}
