use crate::application::read_models::{ComponentTreeView, ComponentView};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// TextFormatter adapter rendering the tree as indented lines with box-drawing guides
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn describe(view: &ComponentView) -> String {
        let mut line = format!("{} [{}] {}", view.name, view.component_type, view.key);
        if let Some(lines) = view.lines {
            let language = view.language.as_deref().unwrap_or("unknown language");
            line.push_str(&format!(" ({}, {} lines", language, lines));
            if view.unit_test == Some(true) {
                line.push_str(", test");
            }
            line.push(')');
        }
        line
    }

    fn write_children(
        output: &mut String,
        children: &[ComponentView],
        prefix: &str,
    ) -> std::fmt::Result {
        for (i, child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            let (branch, continuation) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            writeln!(output, "{}{}{}", prefix, branch, Self::describe(child))?;
            Self::write_children(output, &child.children, &format!("{}{}", prefix, continuation))?;
        }
        Ok(())
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for TextFormatter {
    fn format(&self, view: &ComponentTreeView) -> Result<String> {
        let mut output = String::new();

        if let Some(date) = &view.analysis_date {
            writeln!(output, "Analysis date: {}", date)?;
            writeln!(output)?;
        }

        writeln!(output, "{}", Self::describe(&view.root))?;
        Self::write_children(&mut output, &view.root.children, "")?;

        let summary = &view.summary;
        writeln!(output)?;
        writeln!(output, "Summary:")?;
        writeln!(output, "  Components: {}", summary.total_components)?;
        for (component_type, count) in &summary.components_by_type {
            writeln!(output, "  {}: {}", component_type, count)?;
        }
        writeln!(output, "  Lines: {}", summary.total_lines)?;
        writeln!(output, "  Unit test files: {}", summary.unit_test_files)?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::ComponentTreeViewBuilder;
    use crate::tree::domain::{
        Component, ComponentBuilder, ContainerType, FileAttributes, ReportAttributes,
    };

    fn file(uuid: &str, key: &str, unit_test: bool) -> Component {
        ComponentBuilder::file(FileAttributes::new(unit_test, Some("rust".to_string()), 10))
            .uuid(uuid)
            .key(key)
            .name(key)
            .report_attributes(ReportAttributes::builder(2).build())
            .build()
            .unwrap()
    }

    fn sample_view() -> ComponentTreeView {
        let directory = ComponentBuilder::new(ContainerType::Directory)
            .uuid("D")
            .key("src")
            .name("src")
            .report_attributes(ReportAttributes::builder(1).build())
            .add_children([file("F1", "a.rs", false), file("F2", "b.rs", true)])
            .build()
            .unwrap();
        let project = ComponentBuilder::new(ContainerType::Project)
            .uuid("P")
            .key("proj")
            .name("Project")
            .report_attributes(ReportAttributes::builder(0).build())
            .add_child(directory)
            .build()
            .unwrap();
        ComponentTreeViewBuilder::build(&project, None)
    }

    #[test]
    fn test_format_draws_tree() {
        let output = TextFormatter::new().format(&sample_view()).unwrap();
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines[0], "Project [PROJECT] proj");
        assert_eq!(lines[1], "└── src [DIRECTORY] src");
        assert_eq!(lines[2], "    ├── a.rs [FILE] a.rs (rust, 10 lines)");
        assert_eq!(lines[3], "    └── b.rs [FILE] b.rs (rust, 10 lines, test)");
    }

    #[test]
    fn test_format_appends_summary() {
        let output = TextFormatter::new().format(&sample_view()).unwrap();

        assert!(output.contains("Summary:"));
        assert!(output.contains("  Components: 4"));
        assert!(output.contains("  FILE: 2"));
        assert!(output.contains("  Lines: 20"));
        assert!(output.contains("  Unit test files: 1"));
        assert!(!output.contains("Analysis date"));
    }
}
