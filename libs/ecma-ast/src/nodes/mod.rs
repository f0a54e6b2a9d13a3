//! Fundamental AST node definitions.
//!
//! A tree is built from two variants: [`Token`] leaves, which have no child
//! list at all, and [`Composite`] nodes, which own an ordered child list.
//! Every node stores its kind, its exact source text and its [`Position`], so
//! `&source[node.position()] == node.text()` holds everywhere in a parsed tree.
//!
//! Nodes are immutable once built: fields are private and there are no
//! setters. Rewrites go through `crate::transform`, which builds new trees.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::Position;

// =============================================================================
// NODE
// =============================================================================

/// A node of the syntax tree.
///
/// # Examples
/// ```
/// use ecma_ast::{Node, Position, TokenKind};
/// let node = Node::token(TokenKind::Punctuator, ";", Position::new(0, 1));
/// assert!(node.is_token());
/// assert!(node.children().is_none());
/// assert_eq!(node.node_type(), "Punctuator");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Leaf: a single lexical unit.
    Token(Token),
    /// Interior node with ordered children.
    Composite(Composite),
}

impl Node {
    /// Builds a leaf node.
    pub fn token(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Node::Token(Token {
            kind,
            text: text.into(),
            position,
        })
    }

    /// Builds an interior node owning `children`.
    pub fn composite(
        kind: NodeKind,
        text: impl Into<String>,
        position: Position,
        children: Vec<Node>,
    ) -> Self {
        Node::Composite(Composite {
            kind,
            text: text.into(),
            position,
            children,
        })
    }

    /// The `type` tag of this node (e.g. `"Program"`, `"Identifier"`).
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Token(token) => token.kind.type_name(),
            Node::Composite(composite) => composite.kind.type_name(),
        }
    }

    /// Exact source text covered by this node.
    pub fn text(&self) -> &str {
        match self {
            Node::Token(token) => &token.text,
            Node::Composite(composite) => &composite.text,
        }
    }

    /// Source range covered by this node.
    pub fn position(&self) -> Position {
        match self {
            Node::Token(token) => token.position,
            Node::Composite(composite) => composite.position,
        }
    }

    /// Child list, absent for tokens.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Token(_) => None,
            Node::Composite(composite) => Some(&composite.children),
        }
    }

    /// Child list, empty for tokens.
    pub fn child_nodes(&self) -> &[Node] {
        self.children().unwrap_or(&[])
    }

    /// Children that carry meaning: everything except keyword, punctuation
    /// and comment tokens.
    ///
    /// # Examples
    /// ```
    /// let program = ecma_ast::parse("a + /* note */ b;").unwrap();
    /// let statement = &program.child_nodes()[0];
    /// let binary = &statement.significant_children().next().unwrap();
    /// let operands: Vec<&str> = binary.significant_children().map(|n| n.text()).collect();
    /// assert_eq!(operands, ["a", "b"]);
    /// ```
    pub fn significant_children(&self) -> impl Iterator<Item = &Node> + '_ {
        self.child_nodes().iter().filter(|child| !child.is_trivia())
    }

    /// Returns true for leaves.
    pub fn is_token(&self) -> bool {
        matches!(self, Node::Token(_))
    }

    /// Returns true for interior nodes.
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Composite(_))
    }

    /// Returns true for fallback nodes emitted where no mapping exists.
    pub fn is_unknown(&self) -> bool {
        match self {
            Node::Token(token) => matches!(token.kind, TokenKind::Unknown { .. }),
            Node::Composite(composite) => matches!(composite.kind, NodeKind::Unknown { .. }),
        }
    }

    /// Returns true for keyword, punctuation and comment tokens.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Node::Token(Token {
                kind: TokenKind::Keyword | TokenKind::Punctuator | TokenKind::Comment,
                ..
            })
        )
    }

    /// Returns true for statement-level composites.
    pub fn is_statement(&self) -> bool {
        match self {
            Node::Token(_) => false,
            Node::Composite(composite) => composite.kind.is_statement(),
        }
    }

    /// Returns the leaf payload, if this is a token.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Token(token) => Some(token),
            Node::Composite(_) => None,
        }
    }

    /// Returns the interior payload, if this is a composite.
    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Node::Token(_) => None,
            Node::Composite(composite) => Some(composite),
        }
    }

    /// Rebuilds this node with a replacement child list.
    ///
    /// Tokens have no children and are returned unchanged. Text and position
    /// are carried over from `self`.
    pub fn with_children(&self, children: Vec<Node>) -> Node {
        match self {
            Node::Token(token) => Node::Token(token.clone()),
            Node::Composite(composite) => Node::Composite(Composite {
                kind: composite.kind.clone(),
                text: composite.text.clone(),
                position: composite.position,
                children,
            }),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.position();
        write!(f, "{}@{}..{}", self.node_type(), position.start(), position.end())
    }
}

// =============================================================================
// TOKEN
// =============================================================================

/// Leaf node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Token {
    kind: TokenKind,
    text: String,
    position: Position,
}

impl Token {
    /// Returns the token kind.
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Returns the token text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the token position.
    pub fn position(&self) -> Position {
        self.position
    }
}

/// Kinds of leaf node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Binding or property name; `name` equals the token text.
    Identifier { name: String },
    /// Number, BigInt, boolean or `null` literal.
    Literal { value: LiteralValue },
    /// Reserved or contextual word: `const`, `typeof`, `this`, `of`.
    Keyword,
    /// Operator or punctuation: `=`, `;`, `?.`, `=>`.
    Punctuator,
    /// Line, block or hash-bang comment.
    Comment,
    /// Raw piece of a string, template or regex literal.
    Fragment,
    /// Named terminal with no registered mapping.
    Unknown { rule: String },
}

impl TokenKind {
    /// The `type` tag for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            TokenKind::Identifier { .. } => "Identifier",
            TokenKind::Literal { .. } => "Literal",
            TokenKind::Keyword => "Keyword",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::Comment => "Comment",
            TokenKind::Fragment => "Fragment",
            TokenKind::Unknown { .. } => "Unknown",
        }
    }
}

// =============================================================================
// COMPOSITE
// =============================================================================

/// Interior node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composite {
    kind: NodeKind,
    text: String,
    position: Position,
    children: Vec<Node>,
}

impl Composite {
    /// Returns the node kind.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the node text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the node position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the ordered children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}

/// Kinds of interior node. Variants with fields carry facts that would
/// otherwise need re-reading tokens; structural parts stay in the child list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    Program,
    /// `const` / `let` / `var` declaration list.
    VariableDeclaration { kind: DeclarationKind },
    VariableDeclarator,
    ExpressionStatement,
    EmptyStatement,
    BlockStatement,
    ReturnStatement,
    IfStatement,
    ElseClause,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    WhileStatement,
    DoWhileStatement,
    BreakStatement,
    ContinueStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    FinallyClause,
    FunctionDeclaration { is_async: bool, generator: bool },
    FunctionExpression { is_async: bool, generator: bool },
    ArrowFunctionExpression { is_async: bool },
    /// Parenthesized formal parameter list.
    Parameters,
    ClassDeclaration,
    ClassBody,
    MethodDefinition,
    /// Arithmetic, comparison, bitwise, `in` and `instanceof`.
    BinaryExpression { operator: String },
    /// `&&`, `||` and `??`.
    LogicalExpression { operator: String },
    UnaryExpression { operator: String },
    UpdateExpression { operator: String, prefix: bool },
    /// Plain and compound assignment.
    AssignmentExpression { operator: String },
    CallExpression { optional: bool },
    NewExpression,
    /// `a.b` (`computed: false`) or `a[b]` (`computed: true`).
    MemberExpression { computed: bool, optional: bool },
    ParenthesizedExpression,
    ConditionalExpression,
    SequenceExpression,
    SpreadElement,
    AwaitExpression,
    /// Parenthesized call argument list.
    Arguments,
    ArrayExpression,
    ObjectExpression,
    Property,
    TemplateLiteral,
    TemplateSubstitution,
    /// String or regex literal with its decoded value.
    Literal { value: LiteralValue },
    /// Grammar rule with no registered mapping.
    Unknown { rule: String },
}

impl NodeKind {
    /// The `type` tag for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::ElseClause => "ElseClause",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::ForInStatement => "ForInStatement",
            NodeKind::ForOfStatement => "ForOfStatement",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::DoWhileStatement => "DoWhileStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::ThrowStatement => "ThrowStatement",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::CatchClause => "CatchClause",
            NodeKind::FinallyClause => "FinallyClause",
            NodeKind::FunctionDeclaration { .. } => "FunctionDeclaration",
            NodeKind::FunctionExpression { .. } => "FunctionExpression",
            NodeKind::ArrowFunctionExpression { .. } => "ArrowFunctionExpression",
            NodeKind::Parameters => "Parameters",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::ClassBody => "ClassBody",
            NodeKind::MethodDefinition => "MethodDefinition",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::LogicalExpression { .. } => "LogicalExpression",
            NodeKind::UnaryExpression { .. } => "UnaryExpression",
            NodeKind::UpdateExpression { .. } => "UpdateExpression",
            NodeKind::AssignmentExpression { .. } => "AssignmentExpression",
            NodeKind::CallExpression { .. } => "CallExpression",
            NodeKind::NewExpression => "NewExpression",
            NodeKind::MemberExpression { .. } => "MemberExpression",
            NodeKind::ParenthesizedExpression => "ParenthesizedExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::SequenceExpression => "SequenceExpression",
            NodeKind::SpreadElement => "SpreadElement",
            NodeKind::AwaitExpression => "AwaitExpression",
            NodeKind::Arguments => "Arguments",
            NodeKind::ArrayExpression => "ArrayExpression",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::Property => "Property",
            NodeKind::TemplateLiteral => "TemplateLiteral",
            NodeKind::TemplateSubstitution => "TemplateSubstitution",
            NodeKind::Literal { .. } => "Literal",
            NodeKind::Unknown { .. } => "Unknown",
        }
    }

    /// Returns true for kinds that appear in statement position.
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::VariableDeclaration { .. }
                | NodeKind::ExpressionStatement
                | NodeKind::EmptyStatement
                | NodeKind::BlockStatement
                | NodeKind::ReturnStatement
                | NodeKind::IfStatement
                | NodeKind::ForStatement
                | NodeKind::ForInStatement
                | NodeKind::ForOfStatement
                | NodeKind::WhileStatement
                | NodeKind::DoWhileStatement
                | NodeKind::BreakStatement
                | NodeKind::ContinueStatement
                | NodeKind::ThrowStatement
                | NodeKind::TryStatement
                | NodeKind::FunctionDeclaration { .. }
                | NodeKind::ClassDeclaration
        )
    }
}

// =============================================================================
// VALUES
// =============================================================================

/// Decoded value of a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    Number(f64),
    /// Digits of a BigInt literal, without the `n` suffix or separators.
    BigInt(String),
    /// String contents with escape sequences resolved.
    String(String),
    Boolean(bool),
    Null,
    Regex { pattern: String, flags: String },
}

/// Keyword that introduced a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

impl DeclarationKind {
    /// Parses the declaring keyword.
    ///
    /// # Examples
    /// ```
    /// use ecma_ast::DeclarationKind;
    /// assert_eq!(DeclarationKind::from_keyword("const"), Some(DeclarationKind::Const));
    /// assert_eq!(DeclarationKind::from_keyword("using"), None);
    /// ```
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "const" => Some(DeclarationKind::Const),
            "let" => Some(DeclarationKind::Let),
            "var" => Some(DeclarationKind::Var),
            _ => None,
        }
    }

    /// Returns the keyword spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Const => "const",
            DeclarationKind::Let => "let",
            DeclarationKind::Var => "var",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
