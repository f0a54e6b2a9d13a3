use super::*;
use crate::nodes::{DeclarationKind, LiteralValue};

#[cfg(feature = "native-parser")]
fn build(source: &str) -> Node {
    build_with(source, &ParserConfig::default()).expect("source should convert")
}

#[cfg(feature = "native-parser")]
fn build_with(source: &str, config: &ParserConfig) -> Result<Node, ParseError> {
    let tree = ecma_parser::parse_source(source).expect("grammar should load");
    transform(tree.root_node(), source, config)
}

/// Depth-first search for the first composite of the given kind name.
#[cfg(feature = "native-parser")]
fn first_of<'a>(node: &'a Node, type_name: &str) -> Option<&'a Node> {
    if node.node_type() == type_name {
        return Some(node);
    }
    node.child_nodes()
        .iter()
        .find_map(|child| first_of(child, type_name))
}

#[cfg(feature = "native-parser")]
fn kind_of(node: &Node) -> NodeKind {
    node.as_composite()
        .map(|composite| composite.kind().clone())
        .expect("composite node")
}

#[cfg(feature = "native-parser")]
mod native {
    use super::*;

    #[test]
    fn test_const_declaration_shape() {
        let program = build("const x = 42;");
        assert_eq!(program.node_type(), "Program");
        assert_eq!(program.text(), "const x = 42;");

        let declaration = &program.child_nodes()[0];
        assert_eq!(
            kind_of(declaration),
            NodeKind::VariableDeclaration {
                kind: DeclarationKind::Const
            }
        );

        let declarator = first_of(declaration, "VariableDeclarator").unwrap();
        let parts: Vec<&str> = declarator.significant_children().map(|n| n.text()).collect();
        assert_eq!(parts, ["x", "42"]);
    }

    #[test]
    fn test_let_and_var_keywords() {
        let program = build("let a = 1; var b = 2;");
        let kinds: Vec<NodeKind> = program.child_nodes().iter().map(kind_of).collect();
        assert_eq!(
            kinds,
            [
                NodeKind::VariableDeclaration {
                    kind: DeclarationKind::Let
                },
                NodeKind::VariableDeclaration {
                    kind: DeclarationKind::Var
                },
            ]
        );
    }

    #[test]
    fn test_binary_and_logical_operators() {
        let program = build("a + b; c ?? d; this * 2;");
        let binary = first_of(&program, "BinaryExpression").unwrap();
        assert_eq!(
            kind_of(binary),
            NodeKind::BinaryExpression {
                operator: "+".to_string()
            }
        );
        let logical = first_of(&program, "LogicalExpression").unwrap();
        assert_eq!(
            kind_of(logical),
            NodeKind::LogicalExpression {
                operator: "??".to_string()
            }
        );
        let with_this = first_of(&program.child_nodes()[2], "BinaryExpression").unwrap();
        assert_eq!(
            kind_of(with_this),
            NodeKind::BinaryExpression {
                operator: "*".to_string()
            }
        );
    }

    #[test]
    fn test_update_prefix_and_postfix() {
        let program = build("++i; j--;");
        let updates: Vec<NodeKind> = program
            .child_nodes()
            .iter()
            .filter_map(|statement| first_of(statement, "UpdateExpression"))
            .map(kind_of)
            .collect();
        assert_eq!(
            updates,
            [
                NodeKind::UpdateExpression {
                    operator: "++".to_string(),
                    prefix: true
                },
                NodeKind::UpdateExpression {
                    operator: "--".to_string(),
                    prefix: false
                },
            ]
        );
    }

    #[test]
    fn test_update_on_keyword_operand() {
        let program = build("this++; --this.count;");
        let updates: Vec<NodeKind> = program
            .child_nodes()
            .iter()
            .filter_map(|statement| first_of(statement, "UpdateExpression"))
            .map(kind_of)
            .collect();
        assert_eq!(
            updates,
            [
                NodeKind::UpdateExpression {
                    operator: "++".to_string(),
                    prefix: false
                },
                NodeKind::UpdateExpression {
                    operator: "--".to_string(),
                    prefix: true
                },
            ]
        );
    }

    #[test]
    fn test_member_and_optional_chains() {
        let program = build("a.b; a[0]; a?.b;");
        let members: Vec<NodeKind> = program
            .child_nodes()
            .iter()
            .filter_map(|statement| first_of(statement, "MemberExpression"))
            .map(kind_of)
            .collect();
        assert_eq!(
            members,
            [
                NodeKind::MemberExpression {
                    computed: false,
                    optional: false
                },
                NodeKind::MemberExpression {
                    computed: true,
                    optional: false
                },
                NodeKind::MemberExpression {
                    computed: false,
                    optional: true
                },
            ]
        );
    }

    #[test]
    fn test_function_flags() {
        let program = build("async function f() {} function* g() {}");
        let kinds: Vec<NodeKind> = program.child_nodes().iter().map(kind_of).collect();
        assert_eq!(
            kinds,
            [
                NodeKind::FunctionDeclaration {
                    is_async: true,
                    generator: false
                },
                NodeKind::FunctionDeclaration {
                    is_async: false,
                    generator: true
                },
            ]
        );
    }

    #[test]
    fn test_for_of_and_for_in() {
        let program = build("for (const x of xs) {} for (k in o) {}");
        let types: Vec<&str> = program.child_nodes().iter().map(Node::node_type).collect();
        assert_eq!(types, ["ForOfStatement", "ForInStatement"]);
    }

    #[test]
    fn test_string_and_regex_literals() {
        let program = build(r#"s = "a\nb"; r = /ab+c/gi;"#);
        let string = first_of(&program, "Literal")
            .and_then(|n| n.as_composite())
            .map(|c| c.kind().clone());
        assert_eq!(
            string,
            Some(NodeKind::Literal {
                value: LiteralValue::String("a\nb".to_string())
            })
        );

        let regex = first_of(&program.child_nodes()[1], "Literal").map(kind_of);
        assert_eq!(
            regex,
            Some(NodeKind::Literal {
                value: LiteralValue::Regex {
                    pattern: "ab+c".to_string(),
                    flags: "gi".to_string()
                }
            })
        );
    }

    #[test]
    fn test_unmapped_rule_becomes_unknown() {
        let program = build("import x from 'y';");
        let statement = &program.child_nodes()[0];
        assert!(statement.is_unknown());
        assert_eq!(
            kind_of(statement),
            NodeKind::Unknown {
                rule: "import_statement".to_string()
            }
        );
        assert_eq!(statement.text(), "import x from 'y';");
        // children of an Unknown node are still converted
        assert!(statement.child_nodes().iter().any(|n| n.text() == "import"));
    }

    #[test]
    fn test_positions_cover_children() {
        let source = "  foo(1, 2);  ";
        let program = build(source);
        assert_eq!(program.position(), Position::new(2, 12));
        assert_eq!(program.text(), "foo(1, 2);");
    }

    #[test]
    fn test_empty_source() {
        let program = build("");
        assert_eq!(program.node_type(), "Program");
        assert_eq!(program.children().map(|c| c.len()), Some(0));
    }

    #[test]
    fn test_nesting_limit() {
        let source = format!("x = {}1{};", "(".repeat(40), ")".repeat(40));
        let config = ParserConfig::new(10).unwrap();
        let err = build_with(&source, &config).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { limit: 10, .. }));

        assert!(build_with(&source, &ParserConfig::default()).is_ok());
    }
}

#[test]
fn test_operator_helpers() {
    let children = vec![
        Node::token(
            TokenKind::Identifier {
                name: "a".to_string(),
            },
            "a",
            Position::new(0, 1),
        ),
        Node::token(TokenKind::Punctuator, "?.", Position::new(1, 3)),
        Node::token(
            TokenKind::Identifier {
                name: "b".to_string(),
            },
            "b",
            Position::new(3, 4),
        ),
    ];
    assert_eq!(first_operator(&children), Some("?."));
    assert!(has_token(&children, "?."));
    assert!(!has_token(&children, "."));
}

#[test]
fn test_unregistered_rule_dispatch() {
    let kind = build_kind(RuleKind::Other, "jsx_element", &[]);
    assert_eq!(
        kind,
        NodeKind::Unknown {
            rule: "jsx_element".to_string()
        }
    );
}

#[test]
fn test_update_operator_skips_keyword_operand() {
    let children = vec![
        Node::token(TokenKind::Keyword, "this", Position::new(0, 4)),
        Node::token(TokenKind::Punctuator, "++", Position::new(4, 6)),
    ];
    assert_eq!(
        build_kind(RuleKind::UpdateExpression, "update_expression", &children),
        NodeKind::UpdateExpression {
            operator: "++".to_string(),
            prefix: false
        }
    );
}
