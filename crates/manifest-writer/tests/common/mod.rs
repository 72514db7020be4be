#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use manifest_writer::Resources;

/// A cut-down Kubernetes namespace document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

pub fn namespace(name: &str, repo: &str) -> Namespace {
    Namespace {
        api_version: "v1".into(),
        kind: "Namespace".into(),
        metadata: Metadata {
            name: name.into(),
            annotations: BTreeMap::from([("app.example.com/repository".to_string(), repo.to_string())]),
        },
    }
}

pub fn sample_resources() -> Resources<Namespace> {
    let mut resources = Resources::new();
    resources.insert("test/myfile.yaml", namespace("test", "https://github.com/org/test"));
    resources
}

pub fn gitops_resources() -> Resources<Namespace> {
    [
        ("config/cicd/namespace.yaml", namespace("cicd", "https://github.com/org/gitops")),
        ("environments/dev/namespace.yaml", namespace("dev", "https://github.com/org/dev")),
        ("environments/stage/namespace.json", namespace("stage", "https://github.com/org/stage")),
    ]
    .into_iter()
    .collect()
}
