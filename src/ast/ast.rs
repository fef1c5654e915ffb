use crate::Position;

use super::{
    expressions::{
        BoolLiteral, FunctionCall, Identifier, IntLiteral, ListLiteral, PrefixExpr, StringLiteral,
    },
    statements::{
        BlockStatement, BreakStatement, ContinueStatement, DatatypeDeclaration,
        FunctionDeclaration, IfStatement, ListVariableDecl, LoopStatement, ReassignmentStatement,
        ReturnStatement, VariableDeclaration,
    },
};

/// Root of the tree: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub stmts: Vec<Stmt>,
}

impl Program {
    pub fn new() -> Self {
        Program { stmts: vec![] }
    }

    pub fn push_stmt(&mut self, stmt: Stmt) {
        self.stmts.push(stmt);
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

/// Statement Types
///
/// Every node that may stand in statement position.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression terminated by a dot, e.g. `"Hello".` or `print(1).`
    Expression(Expr),
    VariableDeclaration(VariableDeclaration),
    ListVariableDecl(ListVariableDecl),
    Reassignment(ReassignmentStatement),
    Block(BlockStatement),
    Loop(LoopStatement),
    If(IfStatement),
    Return(ReturnStatement),
    Break(BreakStatement),
    Continue(ContinueStatement),
    DatatypeDeclaration(DatatypeDeclaration),
    FunctionDeclaration(FunctionDeclaration),
}

impl Stmt {
    /// Position of the token the statement starts with.
    pub fn get_position(&self) -> Position {
        match self {
            Stmt::Expression(expr) => expr.get_position(),
            Stmt::VariableDeclaration(decl) => decl.data_type.token().position,
            Stmt::ListVariableDecl(decl) => decl.token.position,
            Stmt::Reassignment(reassignment) => reassignment.identifier.token.position,
            Stmt::Block(block) => block.token.position,
            Stmt::Loop(loop_stmt) => loop_stmt.token.position,
            Stmt::If(if_stmt) => if_stmt.token.position,
            Stmt::Return(ret) => ret.token.position,
            Stmt::Break(brk) => brk.token.position,
            Stmt::Continue(cont) => cont.token.position,
            Stmt::DatatypeDeclaration(decl) => decl.token.position,
            Stmt::FunctionDeclaration(decl) => decl.token.position,
        }
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    String(StringLiteral),
    Int(IntLiteral),
    Bool(BoolLiteral),
    Identifier(Identifier),
    List(ListLiteral),
    Prefix(PrefixExpr),
    Call(FunctionCall),
}

impl Expr {
    pub fn get_position(&self) -> Position {
        match self {
            Expr::String(lit) => lit.token.position,
            Expr::Int(lit) => lit.token.position,
            Expr::Bool(lit) => lit.token.position,
            Expr::Identifier(ident) => ident.token.position,
            Expr::List(list) => list.token.position,
            Expr::Prefix(prefix) => prefix.token.position,
            Expr::Call(call) => match &call.namespace {
                Some(namespace) => namespace.token.position,
                None => call.name.token.position,
            },
        }
    }
}
