//! Component view structs for read model
//!
//! These structs give a serializable mirror of the component tree, with
//! file attributes flattened into optional fields.

use crate::tree::domain::ComponentType;
use crate::tree::services::TreeSummary;
use serde::Serialize;

/// View representation of one component and its visible subtree
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentView {
    pub uuid: String,
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ref of the report entry the component came from
    pub report_ref: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Present for FILE components only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_test: Option<bool>,
    pub children: Vec<ComponentView>,
}

/// View representation of a whole tree
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentTreeView {
    /// RFC 3339 analysis date of the root, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_date: Option<String>,
    pub root: ComponentView,
    pub summary: TreeSummary,
}
