//! HTTP calls made by the page: listing data, footer fragment, contact post

use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::RequestCache;

use crate::catalog::Catalog;
use crate::error::SiteError;

/// GET a static resource, bypassing the HTTP cache like the site always has.
async fn get_fresh(url: &str) -> Result<Response, SiteError> {
  let resp = Request::get(url)
    .cache(RequestCache::NoCache)
    .send()
    .await
    .map_err(|e| SiteError::Network(e.to_string()))?;
  if !resp.ok() {
    return Err(SiteError::Http {
      status: resp.status(),
    });
  }
  Ok(resp)
}

pub async fn fetch_catalog(url: &str) -> Result<Catalog, SiteError> {
  let body = get_fresh(url)
    .await?
    .text()
    .await
    .map_err(|e| SiteError::Decode(e.to_string()))?;
  Catalog::from_json(&body)
}

pub async fn fetch_fragment(url: &str) -> Result<String, SiteError> {
  get_fresh(url)
    .await?
    .text()
    .await
    .map_err(|e| SiteError::Decode(e.to_string()))
}

/// POST the contact payload as JSON and return the decoded response body.
pub async fn post_contact(url: &str, payload: &Value) -> Result<Value, SiteError> {
  let req = Request::post(url)
    .json(payload)
    .map_err(|e| SiteError::Decode(e.to_string()))?;
  let resp = req
    .send()
    .await
    .map_err(|e| SiteError::Network(e.to_string()))?;
  if !resp.ok() {
    return Err(SiteError::Http {
      status: resp.status(),
    });
  }
  resp
    .json()
    .await
    .map_err(|e| SiteError::Decode(e.to_string()))
}
