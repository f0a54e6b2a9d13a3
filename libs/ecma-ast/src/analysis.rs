//! Small queries built on [`crate::traverse`].

use crate::ast::{AstView, Identifier, Program, Unknown};
use crate::diagnostic::Diagnostic;
use crate::nodes::Node;
use crate::traverse::{find_all, find_all_typed, walk_with, VisitResult, Visitor};

/// Names of every identifier token in source order, repeats included.
///
/// # Example
///
/// ```rust
/// let program = ecma_ast::parse(r#"const greeting = message + "!";"#).unwrap();
/// assert_eq!(ecma_ast::analysis::identifier_names(&program), ["greeting", "message"]);
/// ```
pub fn identifier_names(root: &Node) -> Vec<&str> {
    find_all_typed::<Identifier>(root)
        .into_iter()
        .map(Identifier::name)
        .collect()
}

/// Number of top-level statements under a `Program`, or of composite
/// children under any other node.
///
/// # Example
///
/// ```rust
/// let program = ecma_ast::parse("let a = 1;\nfoo(a);\nif (a) {}").unwrap();
/// assert_eq!(ecma_ast::analysis::count_statements(&program), 3);
/// ```
pub fn count_statements(root: &Node) -> usize {
    match Program::cast(root) {
        Some(program) => program.statements().count(),
        None => root
            .child_nodes()
            .iter()
            .filter(|child| child.is_composite())
            .count(),
    }
}

/// Every `Unknown` node, in pre-order.
pub fn unknown_nodes(root: &Node) -> Vec<&Node> {
    find_all(root, Node::is_unknown)
}

/// Whether the tree only partially covers the grammar.
pub fn has_unknown(root: &Node) -> bool {
    crate::traverse::find_first(root, Node::is_unknown).is_some()
}

/// One warning per outermost `Unknown` node: syntax the parser accepted but
/// the tree does not model. Gaps nested inside a reported gap are not
/// repeated.
///
/// # Example
///
/// ```rust
/// use ecma_ast::analysis::coverage_warnings;
/// use ecma_ast::Severity;
///
/// let program = ecma_ast::parse("import x from 'y';\nx();").unwrap();
/// let warnings = coverage_warnings(&program);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].severity, Severity::Warning);
/// assert_eq!(warnings[0].message, "Unsupported syntax: import_statement");
/// ```
pub fn coverage_warnings(root: &Node) -> Vec<Diagnostic> {
    struct Gaps(Vec<Diagnostic>);

    impl<'a> Visitor<'a> for Gaps {
        fn enter(&mut self, node: &'a Node, _ancestors: &[&'a Node]) -> VisitResult {
            let Some(gap) = Unknown::cast(node) else {
                return VisitResult::Continue;
            };
            self.0.push(
                Diagnostic::warning(format!("Unsupported syntax: {}", gap.rule()), node.position())
                    .with_hint("Kept as an Unknown node; its children are still built"),
            );
            VisitResult::SkipChildren
        }
    }

    let mut gaps = Gaps(Vec::new());
    walk_with(root, &mut gaps);
    gaps.0
}

#[cfg(all(test, feature = "native-parser"))]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_identifier_names_in_source_order() {
        let program = parse("let total = price * qty; total += tax;").unwrap();
        assert_eq!(
            identifier_names(&program),
            ["total", "price", "qty", "total", "tax"]
        );
    }

    #[test]
    fn test_count_statements_ignores_comments() {
        let program = parse("// header\na();\n/* mid */\nb();").unwrap();
        assert_eq!(count_statements(&program), 2);
        assert_eq!(count_statements(&parse("").unwrap()), 0);
    }

    #[test]
    fn test_unknown_nodes() {
        let covered = parse("let a = 1;").unwrap();
        assert!(!has_unknown(&covered));
        assert!(unknown_nodes(&covered).is_empty());

        let partial = parse("import { a } from 'b';").unwrap();
        assert!(has_unknown(&partial));
        assert_eq!(unknown_nodes(&partial)[0].text(), "import { a } from 'b';");
    }

    #[test]
    fn test_coverage_warnings_report_outermost_gaps() {
        use crate::diagnostic::Severity;
        use crate::position::Position;

        assert!(coverage_warnings(&parse("let a = 1;").unwrap()).is_empty());

        let source = "import { a } from 'b';\nexport { a };";
        let warnings = coverage_warnings(&parse(source).unwrap());
        let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Unsupported syntax: import_statement",
                "Unsupported syntax: export_statement"
            ]
        );
        assert!(warnings.iter().all(|w| w.severity == Severity::Warning));
        assert_eq!(warnings[0].position, Position::new(0, 22));
    }
}
