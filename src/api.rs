use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::PlannerConfig;
use crate::error::ApiError;
use crate::model::{
    HealthStatus, PlanRequest, PlanResult, SuggestRequest, SuggestResult, TipsResult,
};

/// Path of the tips endpoint; the destination is a single encoded segment.
pub fn tips_path(destination: &str) -> String {
    format!("tips/{}", urlencoding::encode(destination))
}

fn network(endpoint: &str, e: gloo_net::Error) -> ApiError {
    ApiError::Network {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    }
}

fn check(endpoint: &str, resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            endpoint: endpoint.to_string(),
            status: resp.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(endpoint: &str, resp: Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

async fn get_json<T: DeserializeOwned>(cfg: &PlannerConfig, path: &str) -> Result<T, ApiError> {
    let url = cfg.endpoint(path);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| network(&url, e))?;
    let resp = check(&url, resp)?;
    decode(&url, resp).await
}

async fn post_json<B, T>(cfg: &PlannerConfig, path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: DeserializeOwned,
{
    let url = cfg.endpoint(path);
    let req = Request::post(&url).json(body).map_err(|e| ApiError::Encode {
        endpoint: url.clone(),
        message: e.to_string(),
    })?;
    let resp = req.send().await.map_err(|e| network(&url, e))?;
    let resp = check(&url, resp)?;
    decode(&url, resp).await
}

pub async fn plan(cfg: &PlannerConfig, req: &PlanRequest) -> Result<PlanResult, ApiError> {
    post_json(cfg, "plan", req).await
}

pub async fn tips(cfg: &PlannerConfig, destination: &str) -> Result<TipsResult, ApiError> {
    get_json(cfg, &tips_path(destination)).await
}

pub async fn suggest(cfg: &PlannerConfig, preferences: &str) -> Result<SuggestResult, ApiError> {
    let body = SuggestRequest {
        preferences: preferences.to_string(),
    };
    post_json(cfg, "suggest", &body).await
}

/// Only the status code decides; an unreadable body on a 2xx is still healthy.
pub async fn health(cfg: &PlannerConfig) -> Result<Option<HealthStatus>, ApiError> {
    let url = cfg.endpoint("health");
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| network(&url, e))?;
    let resp = check(&url, resp)?;
    Ok(resp.json::<HealthStatus>().await.ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_path_encodes_destination_as_one_segment() {
        assert_eq!(tips_path("Paris"), "tips/Paris");
        assert_eq!(tips_path("New York"), "tips/New%20York");
        assert_eq!(tips_path("a/b?c#d"), "tips/a%2Fb%3Fc%23d");
        assert_eq!(tips_path("São Paulo"), "tips/S%C3%A3o%20Paulo");
    }

    #[test]
    fn tips_url_is_under_api_base() {
        let cfg = PlannerConfig::default();
        assert_eq!(cfg.endpoint(&tips_path("Kyoto")), "/api/travel/tips/Kyoto");
    }
}
