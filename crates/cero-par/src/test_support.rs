//! Helpers shared by the parser test modules.

use cero_util::{CollectingReporter, Message, Source};

use crate::ast::*;
use crate::{parse_source, Ast};

pub(crate) fn src(text: &str) -> Source {
    Source::new("test.ce", text)
}

/// Parses and checks the structural invariant; diagnostics are up to the
/// caller.
pub(crate) fn parse_with(source: &Source) -> (Ast<'_>, CollectingReporter) {
    let mut reporter = CollectingReporter::new();
    let ast = parse_source(source, &mut reporter);
    assert_preorder(&ast);
    (ast, reporter)
}

/// Parses a source that must produce no diagnostics at all.
pub(crate) fn parse_clean(source: &Source) -> Ast<'_> {
    let (ast, reporter) = parse_with(source);
    assert!(
        reporter.diagnostics().is_empty(),
        "unexpected diagnostics: {:?}",
        reporter.diagnostics()
    );
    ast
}

/// Asserts the reported diagnostics, in order, as (kind, line, column).
pub(crate) fn expect_reports(reporter: &CollectingReporter, expected: &[(Message, u32, u32)]) {
    let actual: Vec<(Message, u32, u32)> = reporter
        .diagnostics()
        .iter()
        .map(|d| (d.message, d.location.line, d.location.column))
        .collect();
    assert_eq!(actual, expected);
}

/// The per-node child counts must exactly tile the node vector: walking
/// from the root by child counts lands on every node once and ends at the
/// buffer's end. This is the pre-order invariant the cursor relies on.
pub(crate) fn assert_preorder(ast: &Ast<'_>) {
    fn walk(nodes: &[AstNode<'_>], index: usize) -> usize {
        assert!(index < nodes.len(), "child count points past the buffer");
        let mut next = index + 1;
        for _ in 0..nodes[index].num_children() {
            next = walk(nodes, next);
        }
        next
    }

    let nodes = ast.raw();
    assert_eq!(walk(nodes, 0), nodes.len(), "nodes outside the root's subtree");
}

/// Renders every node as one short line, in pre-order. The child counts
/// are validated separately, so kind plus key fields pins the tree shape.
pub(crate) fn flatten(ast: &Ast<'_>) -> Vec<String> {
    fn access_prefix(access: AccessSpecifier) -> &'static str {
        match access {
            AccessSpecifier::None => "",
            AccessSpecifier::Private => "private ",
            AccessSpecifier::Public => "public ",
        }
    }

    ast.raw()
        .iter()
        .map(|node| match node {
            AstNode::Root(_) => "root".to_owned(),
            AstNode::StructDefinition(n) => {
                format!("{}struct `{}`", access_prefix(n.access), n.name)
            }
            AstNode::EnumDefinition(n) => {
                format!("{}enum `{}`", access_prefix(n.access), n.name)
            }
            AstNode::FunctionDefinition(n) => {
                format!("{}function `{}`", access_prefix(n.access), n.name)
            }
            AstNode::FunctionParameter(n) => {
                let specifier = match n.specifier {
                    ParameterSpecifier::None => "",
                    ParameterSpecifier::In => " in",
                    ParameterSpecifier::Var => " var",
                };
                let default = if n.has_default_argument { " = default" } else { "" };
                format!("param{specifier} `{}`{default}", n.name)
            }
            AstNode::FunctionOutput(n) => match n.name {
                Some(name) => format!("output `{name}`"),
                None => "output".to_owned(),
            },
            AstNode::BlockStatement(_) => "block".to_owned(),
            AstNode::BindingStatement(n) => {
                let specifier = match n.specifier {
                    BindingSpecifier::Let => "let",
                    BindingSpecifier::Var => "var",
                    BindingSpecifier::Const => "const",
                    BindingSpecifier::Static => "static",
                    BindingSpecifier::StaticVar => "static var",
                };
                let typed = if n.has_type { " typed" } else { "" };
                let init = if n.has_initializer { " = init" } else { "" };
                format!("{specifier} `{}`{typed}{init}", n.name)
            }
            AstNode::IfExpr(n) => {
                if n.has_else {
                    "if else".to_owned()
                } else {
                    "if".to_owned()
                }
            }
            AstNode::WhileLoop(_) => "while".to_owned(),
            AstNode::ForLoop(_) => "for".to_owned(),
            AstNode::NameExpr(n) => format!("name `{}`", n.name),
            AstNode::GenericNameExpr(n) => format!("generic name `{}`", n.name),
            AstNode::MemberExpr(n) => format!("member `{}`", n.member),
            AstNode::GenericMemberExpr(n) => format!("generic member `{}`", n.member),
            AstNode::GroupExpr(_) => "group".to_owned(),
            AstNode::CallExpr(_) => "call".to_owned(),
            AstNode::IndexExpr(_) => "index".to_owned(),
            AstNode::ArrayLiteralExpr(_) => "array literal".to_owned(),
            AstNode::UnaryExpr(n) => format!("unary {}", n.op.as_str()),
            AstNode::BinaryExpr(n) => format!("binary {}", n.op.as_str()),
            AstNode::ReturnExpr(_) => "return".to_owned(),
            AstNode::ThrowExpr(_) => "throw".to_owned(),
            AstNode::BreakExpr(_) => "break".to_owned(),
            AstNode::ContinueExpr(_) => "continue".to_owned(),
            AstNode::NumericLiteralExpr(n) => format!("number {:?}", n.kind),
            AstNode::StringLiteralExpr(n) => format!("string {}", n.value),
            AstNode::PermissionExpr(n) => format!("permission {:?}", n.specifier),
            AstNode::PointerTypeExpr(_) => "pointer type".to_owned(),
            AstNode::ArrayTypeExpr(n) => {
                if n.has_bound {
                    "array type".to_owned()
                } else {
                    "array type unbounded".to_owned()
                }
            }
            AstNode::FunctionTypeExpr(_) => "function type".to_owned(),
        })
        .collect()
}
