//! Fixture-class dialect (xUnit).
//!
//! Per project file, a fixture class that hands the file path to the shared
//! `GHFileFixture` base, and a test class that receives the fixture and the
//! output helper through its constructor. Test methods replay groupings
//! through the fixture.

use ghtest_core::{Dialect, DiscoveryResult, ProjectFile};

use super::{
    GeneratedDocument, Renderer, TextBuilder, class_name, guid_expr, method_name, path_literal,
};

const RESERVED: &[&str] = &["fixture", "context"];

#[derive(Debug, Clone)]
pub struct XUnitRenderer {
    namespace: String,
}

impl XUnitRenderer {
    #[must_use]
    pub fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }

    fn render_fixture(text: &mut TextBuilder, file: &ProjectFile, fixture: &str) {
        text.line(1, &format!("public class {fixture} : GHFileFixture"))
            .line(1, "{")
            .line(2, &format!("public {fixture}()"))
            .line(3, &format!(" : base({})", path_literal(&file.path)))
            .line(2, "{")
            .line(2, "}")
            .line(1, "}");
    }

    fn render_class(text: &mut TextBuilder, file: &ProjectFile) {
        let class = class_name(&file.display_name);
        let fixture = format!("{class}_Fixture");

        Self::render_fixture(text, file, &fixture);

        text.line(
            1,
            &format!("public class {class} : IClassFixture<{fixture}>"),
        )
        .line(1, "{")
        .line(2, &format!("private readonly {fixture} fixture;"))
        .line(2, "private readonly ITestOutputHelper context;")
        .line(
            2,
            &format!("public {class} ({fixture} fixture, ITestOutputHelper context)"),
        )
        .line(2, "{")
        .line(3, "this.fixture = fixture;")
        .line(3, "this.context = context;")
        .line(2, "}");

        for grouping in &file.groupings {
            text.line(2, "[Fact]")
                .line(2, &format!("public void {}()", method_name(&grouping.label)))
                .line(2, "{")
                .line(
                    3,
                    &format!(
                        "fixture.RunGroup(fixture.Doc, {}, context);",
                        guid_expr(grouping.id)
                    ),
                )
                .line(2, "}");
        }

        text.line(1, "}").blank();
    }
}

impl Renderer for XUnitRenderer {
    fn dialect(&self) -> Dialect {
        Dialect::XUnit
    }

    fn reserved_members(&self) -> &'static [&'static str] {
        RESERVED
    }

    fn render(&self, result: &DiscoveryResult) -> GeneratedDocument {
        let mut text = TextBuilder::new();
        text.line(0, "using Xunit;")
            .line(0, "using Xunit.Abstractions;")
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
    fn renders_fixture_and_test_class() {
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

        let doc = XUnitRenderer::new("TenrecGeneratedTests").render(&result);
        let expected = r#"using Xunit;
using Xunit.Abstractions;

namespace TenrecGeneratedTests
{
    public class AutoTest_shapes_Fixture : GHFileFixture
    {
        public AutoTest_shapes_Fixture()
             : base(@"/suite/shapes.ghx")
        {
        }
    }
    public class AutoTest_shapes : IClassFixture<AutoTest_shapes_Fixture>
    {
        private readonly AutoTest_shapes_Fixture fixture;
        private readonly ITestOutputHelper context;
        public AutoTest_shapes (AutoTest_shapes_Fixture fixture, ITestOutputHelper context)
        {
            this.fixture = fixture;
            this.context = context;
        }
        [Fact]
        public void circle_area()
        {
            fixture.RunGroup(fixture.Doc, new System.Guid("3f2504e0-4f89-41d3-9a0c-0305e82c3301"), context);
        }
    }

}
"#;
        assert_eq!(doc.source, expected);
    }

    #[test]
    fn empty_result_renders_bare_namespace() {
        let doc = XUnitRenderer::new("Ns").render(&DiscoveryResult::default());
        assert_eq!(
            doc.source,
            "using Xunit;\nusing Xunit.Abstractions;\n\nnamespace Ns\n{\n}\n"
        );
    }
}
