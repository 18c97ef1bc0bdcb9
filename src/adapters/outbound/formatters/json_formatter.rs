use crate::application::read_models::ComponentTreeView;
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the tree read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonFormatter {
    fn format(&self, view: &ComponentTreeView) -> Result<String> {
        let mut json = serde_json::to_string_pretty(view)
            .map_err(|e| anyhow::anyhow!("Failed to serialize component tree to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ComponentTreeViewBuilder;
    use crate::tree::domain::{ComponentBuilder, FileAttributes, ReportAttributes};

    #[test]
    fn test_format_produces_parsable_json() {
        let file = ComponentBuilder::file(FileAttributes::new(false, None, 5))
            .uuid("F")
            .key("f")
            .name("f")
            .report_attributes(ReportAttributes::builder(1).build())
            .build()
            .unwrap();
        let view = ComponentTreeViewBuilder::build(&file, None);

        let output = JsonFormatter::new().format(&view).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed["root"]["uuid"], "F");
        assert_eq!(parsed["root"]["type"], "FILE");
        assert_eq!(parsed["root"]["lines"], 5);
        assert!(parsed["root"].get("language").is_none());
        assert_eq!(parsed["summary"]["totalLines"], 5);
    }
}
