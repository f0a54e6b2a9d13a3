//! # Grammar Rule Kinds
//!
//! Closed enumeration of the `tree-sitter-javascript` rules and terminals the
//! visitor knows about. Dispatch in `visitor::cst_to_ast` is a `match` over
//! this enum; anything the grammar adds later lands in [`RuleKind::Other`] and
//! becomes an `Unknown` node.

/// A grammar rule or terminal recognized at grammar-build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    // Program and declarations
    Program,
    LexicalDeclaration,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    GeneratorFunctionDeclaration,
    ClassDeclaration,
    ClassBody,
    MethodDefinition,
    FormalParameters,

    // Statements
    ExpressionStatement,
    EmptyStatement,
    StatementBlock,
    ReturnStatement,
    IfStatement,
    ElseClause,
    ForStatement,
    ForInStatement,
    WhileStatement,
    DoStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    FinallyClause,

    // Expressions
    BinaryExpression,
    UnaryExpression,
    UpdateExpression,
    AssignmentExpression,
    AugmentedAssignmentExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    SubscriptExpression,
    ParenthesizedExpression,
    TernaryExpression,
    SequenceExpression,
    SpreadElement,
    AwaitExpression,
    FunctionExpression,
    GeneratorFunction,
    ArrowFunction,
    Arguments,
    Array,
    Object,
    Pair,

    // Composite literals
    String,
    TemplateString,
    TemplateSubstitution,
    Regex,

    // Named terminals
    Identifier,
    Number,
    True,
    False,
    Null,
    Undefined,
    This,
    Super,
    Comment,
    HashBangLine,
    StringFragment,
    EscapeSequence,
    RegexPattern,
    RegexFlags,
    OptionalChain,

    /// Unnamed grammar token: keywords, operators and punctuation.
    Anonymous,
    /// Named rule with no registered constructor.
    Other,
}

impl RuleKind {
    /// Maps a grammar node name to its rule kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ecma_ast::RuleKind;
    ///
    /// assert_eq!(RuleKind::from_grammar_name("lexical_declaration", true), RuleKind::LexicalDeclaration);
    /// assert_eq!(RuleKind::from_grammar_name("=", false), RuleKind::Anonymous);
    /// assert_eq!(RuleKind::from_grammar_name("import_statement", true), RuleKind::Other);
    /// ```
    pub fn from_grammar_name(name: &str, named: bool) -> Self {
        if !named {
            return RuleKind::Anonymous;
        }
        match name {
            "program" => RuleKind::Program,
            "lexical_declaration" => RuleKind::LexicalDeclaration,
            "variable_declaration" => RuleKind::VariableDeclaration,
            "variable_declarator" => RuleKind::VariableDeclarator,
            "function_declaration" => RuleKind::FunctionDeclaration,
            "generator_function_declaration" => RuleKind::GeneratorFunctionDeclaration,
            "class_declaration" => RuleKind::ClassDeclaration,
            "class_body" => RuleKind::ClassBody,
            "method_definition" => RuleKind::MethodDefinition,
            "formal_parameters" => RuleKind::FormalParameters,

            "expression_statement" => RuleKind::ExpressionStatement,
            "empty_statement" => RuleKind::EmptyStatement,
            "statement_block" => RuleKind::StatementBlock,
            "return_statement" => RuleKind::ReturnStatement,
            "if_statement" => RuleKind::IfStatement,
            "else_clause" => RuleKind::ElseClause,
            "for_statement" => RuleKind::ForStatement,
            "for_in_statement" => RuleKind::ForInStatement,
            "while_statement" => RuleKind::WhileStatement,
            "do_statement" => RuleKind::DoStatement,
            "break_statement" => RuleKind::BreakStatement,
            "continue_statement" => RuleKind::ContinueStatement,
            "throw_statement" => RuleKind::ThrowStatement,
            "try_statement" => RuleKind::TryStatement,
            "catch_clause" => RuleKind::CatchClause,
            "finally_clause" => RuleKind::FinallyClause,

            "binary_expression" => RuleKind::BinaryExpression,
            "unary_expression" => RuleKind::UnaryExpression,
            "update_expression" => RuleKind::UpdateExpression,
            "assignment_expression" => RuleKind::AssignmentExpression,
            "augmented_assignment_expression" => RuleKind::AugmentedAssignmentExpression,
            "call_expression" => RuleKind::CallExpression,
            "new_expression" => RuleKind::NewExpression,
            "member_expression" => RuleKind::MemberExpression,
            "subscript_expression" => RuleKind::SubscriptExpression,
            "parenthesized_expression" => RuleKind::ParenthesizedExpression,
            "ternary_expression" => RuleKind::TernaryExpression,
            "sequence_expression" => RuleKind::SequenceExpression,
            "spread_element" => RuleKind::SpreadElement,
            "await_expression" => RuleKind::AwaitExpression,
            // older grammar releases call it "function"
            "function_expression" | "function" => RuleKind::FunctionExpression,
            "generator_function" => RuleKind::GeneratorFunction,
            "arrow_function" => RuleKind::ArrowFunction,
            "arguments" => RuleKind::Arguments,
            "array" => RuleKind::Array,
            "object" => RuleKind::Object,
            "pair" => RuleKind::Pair,

            "string" => RuleKind::String,
            "template_string" => RuleKind::TemplateString,
            "template_substitution" => RuleKind::TemplateSubstitution,
            "regex" => RuleKind::Regex,

            "identifier"
            | "property_identifier"
            | "shorthand_property_identifier"
            | "shorthand_property_identifier_pattern"
            | "private_property_identifier"
            | "statement_identifier" => RuleKind::Identifier,
            "number" => RuleKind::Number,
            "true" => RuleKind::True,
            "false" => RuleKind::False,
            "null" => RuleKind::Null,
            "undefined" => RuleKind::Undefined,
            "this" => RuleKind::This,
            "super" => RuleKind::Super,
            "comment" => RuleKind::Comment,
            "hash_bang_line" => RuleKind::HashBangLine,
            "string_fragment" => RuleKind::StringFragment,
            "escape_sequence" => RuleKind::EscapeSequence,
            "regex_pattern" => RuleKind::RegexPattern,
            "regex_flags" => RuleKind::RegexFlags,
            "optional_chain" => RuleKind::OptionalChain,

            _ => RuleKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_tokens_ignore_name() {
        assert_eq!(RuleKind::from_grammar_name("const", false), RuleKind::Anonymous);
        // an anonymous token spelled like a named rule is still anonymous
        assert_eq!(RuleKind::from_grammar_name("string", false), RuleKind::Anonymous);
    }

    #[test]
    fn test_identifier_family() {
        for name in ["identifier", "property_identifier", "shorthand_property_identifier"] {
            assert_eq!(RuleKind::from_grammar_name(name, true), RuleKind::Identifier);
        }
    }

    #[test]
    fn test_function_expression_aliases() {
        assert_eq!(RuleKind::from_grammar_name("function", true), RuleKind::FunctionExpression);
        assert_eq!(
            RuleKind::from_grammar_name("function_expression", true),
            RuleKind::FunctionExpression
        );
    }

    #[test]
    fn test_unregistered_rules_are_other() {
        assert_eq!(RuleKind::from_grammar_name("ERROR", true), RuleKind::Other);
        assert_eq!(RuleKind::from_grammar_name("jsx_element", true), RuleKind::Other);
    }
}
