//! Attribute-class dialect (MSTest).
//!
//! One `[TestClass]` per project file exposing the file path and the host
//! `TestContext` as properties; one `[TestMethod]` per grouping that
//! initializes the runner and replays the grouping.

use ghtest_core::{Dialect, DiscoveryResult, ProjectFile};

use super::{
    GeneratedDocument, Renderer, TextBuilder, class_name, guid_expr, method_name, path_literal,
};

const RESERVED: &[&str] = &["FilePath", "TestContext", "testContextInstance"];

#[derive(Debug, Clone)]
pub struct MsTestRenderer {
    namespace: String,
}

impl MsTestRenderer {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }

    fn render_class(text: &mut TextBuilder, file: &ProjectFile) {
        text.line(1, "[TestClass]")
            .line(1, &format!("public class {}", class_name(&file.display_name)))
            .line(1, "{")
            .line(
                2,
                &format!("public string FilePath => {};", path_literal(&file.path)),
            )
            .line(2, "private TestContext testContextInstance;")
            .line(
                2,
                "public TestContext TestContext { get => testContextInstance; set => testContextInstance = value; }",
            );

        for grouping in &file.groupings {
            text.line(2, "[TestMethod]")
                .line(2, &format!("public void {}()", method_name(&grouping.label)))
                .line(2, "{")
                .line(3, "Tenrec.Runner.Initialize(TestContext);")
                .line(
                    3,
                    &format!(
                        "Tenrec.Runner.RunTenrecGroup(FilePath, {}, TestContext);",
                        guid_expr(grouping.id)
                    ),
                )
                .line(2, "}");
        }

        text.line(1, "}").blank();
    }
}

impl Renderer for MsTestRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::MsTest
    }

    fn reserved_members(&self) -> &'static [&'static str] {
        RESERVED
    }

    fn render(&self, result: &DiscoveryResult) -> GeneratedDocument {
        let mut text = TextBuilder::new();
        text.line(0, "using Microsoft.VisualStudio.TestTools.UnitTesting;")
            .blank()
            .line(0, &format!("namespace {}", self.namespace))
            .line(0, "{");

        for file in &result.files {
            Self::render_class(&mut text, file);
        }

        text.line(0, "}");
        GeneratedDocument::new(text.finish(), result, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghtest_core::TestGrouping;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use uuid::Uuid;

    #[test]
    fn renders_exact_class_layout() {
        let path = PathBuf::from("/suite/shapes.ghx");
        let id = Uuid::parse_str("3f2504e0-4f89-41d3-9a0c-0305e82c3301").unwrap();
        let result = DiscoveryResult {
            files: vec![ProjectFile {
                path: path.clone(),
                display_name: "shapes".into(),
                groupings: vec![TestGrouping {
                    file_path: path,
                    label: "circle area".into(),
                    id,
                }],
            }],
            diagnostics: Vec::new(),
        };

        let doc = MsTestRenderer::new("TenrecGeneratedTests").render(&result);
        let expected = r#"using Microsoft.VisualStudio.TestTools.UnitTesting;

namespace TenrecGeneratedTests
{
    [TestClass]
    public class AutoTest_shapes
    {
        public string FilePath => @"/suite/shapes.ghx";
        private TestContext testContextInstance;
        public TestContext TestContext { get => testContextInstance; set => testContextInstance = value; }
        [TestMethod]
        public void circle_area()
        {
            Tenrec.Runner.Initialize(TestContext);
            Tenrec.Runner.RunTenrecGroup(FilePath, new System.Guid("3f2504e0-4f89-41d3-9a0c-0305e82c3301"), TestContext);
        }
    }

}
"#;
        assert_eq!(doc.source, expected);
        assert!(doc.diagnostics.is_empty());
    }

    #[test]
    fn empty_result_renders_bare_namespace() {
        let doc = MsTestRenderer::new("Ns").render(&DiscoveryResult::default());
        assert_eq!(
            doc.source,
            "using Microsoft.VisualStudio.TestTools.UnitTesting;\n\nnamespace Ns\n{\n}\n"
        );
    }
}
