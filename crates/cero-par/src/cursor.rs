//! Depth-limited walks over the flat AST.

use crate::ast::*;

/// Receives AST nodes during a walk. Every method has an empty default
/// body, so a visitor only implements the kinds it cares about.
#[allow(unused_variables)]
pub trait AstVisitor<'s> {
    fn visit_root(&mut self, node: &Root) {}
    fn visit_struct_definition(&mut self, node: &StructDefinition<'s>) {}
    fn visit_enum_definition(&mut self, node: &EnumDefinition<'s>) {}
    fn visit_function_definition(&mut self, node: &FunctionDefinition<'s>) {}
    fn visit_function_parameter(&mut self, node: &FunctionParameter<'s>) {}
    fn visit_function_output(&mut self, node: &FunctionOutput<'s>) {}
    fn visit_block_statement(&mut self, node: &BlockStatement) {}
    fn visit_binding_statement(&mut self, node: &BindingStatement<'s>) {}
    fn visit_if_expr(&mut self, node: &IfExpr) {}
    fn visit_while_loop(&mut self, node: &WhileLoop) {}
    fn visit_for_loop(&mut self, node: &ForLoop) {}
    fn visit_name_expr(&mut self, node: &NameExpr<'s>) {}
    fn visit_generic_name_expr(&mut self, node: &GenericNameExpr<'s>) {}
    fn visit_member_expr(&mut self, node: &MemberExpr<'s>) {}
    fn visit_generic_member_expr(&mut self, node: &GenericMemberExpr<'s>) {}
    fn visit_group_expr(&mut self, node: &GroupExpr) {}
    fn visit_call_expr(&mut self, node: &CallExpr) {}
    fn visit_index_expr(&mut self, node: &IndexExpr) {}
    fn visit_array_literal_expr(&mut self, node: &ArrayLiteralExpr) {}
    fn visit_unary_expr(&mut self, node: &UnaryExpr) {}
    fn visit_binary_expr(&mut self, node: &BinaryExpr) {}
    fn visit_return_expr(&mut self, node: &ReturnExpr) {}
    fn visit_throw_expr(&mut self, node: &ThrowExpr) {}
    fn visit_break_expr(&mut self, node: &BreakExpr) {}
    fn visit_continue_expr(&mut self, node: &ContinueExpr) {}
    fn visit_numeric_literal_expr(&mut self, node: &NumericLiteralExpr) {}
    fn visit_string_literal_expr(&mut self, node: &StringLiteralExpr) {}
    fn visit_permission_expr(&mut self, node: &PermissionExpr) {}
    fn visit_pointer_type_expr(&mut self, node: &PointerTypeExpr) {}
    fn visit_array_type_expr(&mut self, node: &ArrayTypeExpr) {}
    fn visit_function_type_expr(&mut self, node: &FunctionTypeExpr) {}
}

/// Walks the flat node vector, keeping track of how many children of the
/// current node remain to be visited. `visit_child` and `visit_children`
/// let a visitor descend selectively; `visit_all` takes whole subtrees.
pub struct AstCursor<'a, 's> {
    nodes: &'a [AstNode<'s>],
    index: usize,
    num_children_to_visit: u32,
}

impl<'a, 's> AstCursor<'a, 's> {
    pub(crate) fn new(ast: &'a Ast<'s>) -> Self {
        // a fresh cursor has one node pending: the root
        Self {
            nodes: ast.raw(),
            index: 0,
            num_children_to_visit: 1,
        }
    }

    /// Visits the current node and, recursively, its whole subtree.
    pub fn visit_all<V: AstVisitor<'s>>(&mut self, visitor: &mut V) {
        let node = &self.nodes[self.index];
        self.index += 1;

        let outer = std::mem::replace(&mut self.num_children_to_visit, node.num_children());
        dispatch(visitor, node);

        while self.num_children_to_visit > 0 {
            self.visit_all(visitor);
            self.num_children_to_visit -= 1;
        }
        self.num_children_to_visit = outer;
    }

    /// Visits the next unvisited child (and its subtree) of the current
    /// node.
    pub fn visit_child<V: AstVisitor<'s>>(&mut self, visitor: &mut V) {
        debug_assert!(
            self.num_children_to_visit > 0,
            "current node has no children left to visit"
        );
        if self.num_children_to_visit > 0 {
            self.visit_all(visitor);
            self.num_children_to_visit -= 1;
        }
    }

    /// Visits the next `n` unvisited children of the current node.
    pub fn visit_children<V: AstVisitor<'s>>(&mut self, n: u32, visitor: &mut V) {
        debug_assert!(
            n <= self.num_children_to_visit,
            "fewer children left to visit than requested"
        );
        let n = n.min(self.num_children_to_visit);
        for _ in 0..n {
            self.visit_all(visitor);
            self.num_children_to_visit -= 1;
        }
    }

    /// How many children of the current node have not been visited yet.
    #[inline]
    pub fn num_children_to_visit(&self) -> u32 {
        self.num_children_to_visit
    }
}


fn dispatch<'s, V: AstVisitor<'s>>(visitor: &mut V, node: &AstNode<'s>) {
    match node {
        AstNode::Root(n) => visitor.visit_root(n),
        AstNode::StructDefinition(n) => visitor.visit_struct_definition(n),
        AstNode::EnumDefinition(n) => visitor.visit_enum_definition(n),
        AstNode::FunctionDefinition(n) => visitor.visit_function_definition(n),
        AstNode::FunctionParameter(n) => visitor.visit_function_parameter(n),
        AstNode::FunctionOutput(n) => visitor.visit_function_output(n),
        AstNode::BlockStatement(n) => visitor.visit_block_statement(n),
        AstNode::BindingStatement(n) => visitor.visit_binding_statement(n),
        AstNode::IfExpr(n) => visitor.visit_if_expr(n),
        AstNode::WhileLoop(n) => visitor.visit_while_loop(n),
        AstNode::ForLoop(n) => visitor.visit_for_loop(n),
        AstNode::NameExpr(n) => visitor.visit_name_expr(n),
        AstNode::GenericNameExpr(n) => visitor.visit_generic_name_expr(n),
        AstNode::MemberExpr(n) => visitor.visit_member_expr(n),
        AstNode::GenericMemberExpr(n) => visitor.visit_generic_member_expr(n),
        AstNode::GroupExpr(n) => visitor.visit_group_expr(n),
        AstNode::CallExpr(n) => visitor.visit_call_expr(n),
        AstNode::IndexExpr(n) => visitor.visit_index_expr(n),
        AstNode::ArrayLiteralExpr(n) => visitor.visit_array_literal_expr(n),
        AstNode::UnaryExpr(n) => visitor.visit_unary_expr(n),
        AstNode::BinaryExpr(n) => visitor.visit_binary_expr(n),
        AstNode::ReturnExpr(n) => visitor.visit_return_expr(n),
        AstNode::ThrowExpr(n) => visitor.visit_throw_expr(n),
        AstNode::BreakExpr(n) => visitor.visit_break_expr(n),
        AstNode::ContinueExpr(n) => visitor.visit_continue_expr(n),
        AstNode::NumericLiteralExpr(n) => visitor.visit_numeric_literal_expr(n),
        AstNode::StringLiteralExpr(n) => visitor.visit_string_literal_expr(n),
        AstNode::PermissionExpr(n) => visitor.visit_permission_expr(n),
        AstNode::PointerTypeExpr(n) => visitor.visit_pointer_type_expr(n),
        AstNode::ArrayTypeExpr(n) => visitor.visit_array_type_expr(n),
        AstNode::FunctionTypeExpr(n) => visitor.visit_function_type_expr(n),
    }
}
