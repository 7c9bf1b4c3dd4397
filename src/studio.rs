//! HTTP client for the studio backend: assets, file upload, job scheduling.

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Response;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("studio request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("studio returned HTTP {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Newly created asset container (POST /assets).
#[derive(Debug, Deserialize)]
pub struct AssetRef {
    pub id: String,
}

/// The authenticated creator (GET /creator).
#[derive(Debug, Deserialize)]
pub struct CreatorInfo {
    pub address: String,
}

#[derive(Debug, Serialize)]
pub struct JobRequest {
    pub tasks: Vec<JobTask>,
}

/// One task in a job request. Field names are the studio wire contract.
#[derive(Debug, Serialize)]
pub struct JobTask {
    #[serde(rename = "ref")]
    pub task_ref: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub inputs: TaskInputs,
}

#[derive(Debug, Serialize)]
pub struct TaskInputs {
    #[serde(rename = "assetId")]
    pub asset_id: String,
}

/// Opaque job-creation result. Its internal shape belongs to the studio; the
/// only field this app reads is the published file's public URL.
#[derive(Debug, Deserialize)]
pub struct PublishReceipt(pub serde_json::Value);

impl PublishReceipt {
    pub fn reference_url(&self) -> Option<&str> {
        self.0
            .pointer("/context/arweave/output/asset/files/0/arweaveURL")
            .and_then(serde_json::Value::as_str)
    }
}

/// Studio API surface consumed by the writer. A port so tests can substitute
/// a recording fake for the remote service.
pub trait StudioApi {
    fn create_asset(&self) -> Result<AssetRef, StudioError>;
    fn upload_file(&self, asset_id: &str, file_name: &str, bytes: Vec<u8>) -> Result<(), StudioError>;
    fn create_job(&self, request: &JobRequest) -> Result<PublishReceipt, StudioError>;
    fn creator(&self) -> Result<CreatorInfo, StudioError>;
    fn health_check(&self) -> bool;
}

pub struct StudioClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl StudioClient {
    pub fn new(base_url: String) -> Self {
        // No request timeout: an in-flight publish is allowed to hang until
        // the studio settles it.
        let client = reqwest::blocking::Client::builder()
            .build()
            .expect("reqwest client");
        Self { base_url, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn ensure_success(resp: Response) -> Result<Response, StudioError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(StudioError::Api {
            status,
            message: resp.text().unwrap_or_default(),
        })
    }
}

impl StudioApi for StudioClient {
    fn create_asset(&self) -> Result<AssetRef, StudioError> {
        let resp = self.client.post(self.url("/assets")).send()?;
        Ok(ensure_success(resp)?.json()?)
    }

    fn upload_file(&self, asset_id: &str, file_name: &str, bytes: Vec<u8>) -> Result<(), StudioError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/html")?;
        let form = Form::new().part("file", part);
        let resp = self
            .client
            .post(self.url(&format!("/assets/{asset_id}/files")))
            .multipart(form)
            .send()?;
        ensure_success(resp)?;
        Ok(())
    }

    fn create_job(&self, request: &JobRequest) -> Result<PublishReceipt, StudioError> {
        let resp = self.client.post(self.url("/jobs")).json(request).send()?;
        Ok(ensure_success(resp)?.json()?)
    }

    fn creator(&self) -> Result<CreatorInfo, StudioError> {
        let resp = self.client.get(self.url("/creator")).send()?;
        Ok(ensure_success(resp)?.json()?)
    }

    fn health_check(&self) -> bool {
        self.client
            .get(self.url("/health"))
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_task_uses_wire_field_names() {
        let request = JobRequest {
            tasks: vec![JobTask {
                task_ref: "arweave".into(),
                name: "Publish Post".into(),
                description: "Uploading your post to decentralized storage".into(),
                task_type: "arweave-upload".into(),
                inputs: TaskInputs { asset_id: "asset-1".into() },
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        let task = &json["tasks"][0];
        assert_eq!(task["ref"], "arweave");
        assert_eq!(task["type"], "arweave-upload");
        assert_eq!(task["inputs"]["assetId"], "asset-1");
        assert_eq!(task["name"], "Publish Post");
    }

    #[test]
    fn receipt_url_comes_from_the_nested_shape() {
        let receipt: PublishReceipt = serde_json::from_value(serde_json::json!({
            "context": {
                "arweave": {
                    "output": {
                        "asset": {
                            "files": [{ "arweaveURL": "https://arweave.net/abc123" }]
                        }
                    }
                }
            }
        }))
        .unwrap();
        assert_eq!(receipt.reference_url(), Some("https://arweave.net/abc123"));
    }

    #[test]
    fn receipt_without_url_is_still_a_success() {
        let receipt: PublishReceipt =
            serde_json::from_value(serde_json::json!({ "jobId": 7 })).unwrap();
        assert_eq!(receipt.reference_url(), None);
    }
}
