//! Extractors whose rejections use the crate error body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::prelude::*;

/// `axum::Json` with rejections reported as `{"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Path` with rejections reported as `{"error": ...}`.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);
