use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Stmt},
    expressions::{Identifier, ListLiteral},
    types::DataType,
};

/// `int n = 4.` or `User u = "u1".`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub data_type: DataType,
    pub identifier: Identifier,
    pub value: Expr,
}

/// `listof int nx = [1, 2, 3].`
#[derive(Debug, Clone, PartialEq)]
pub struct ListVariableDecl {
    pub element_type: DataType,
    pub identifier: Identifier,
    pub list: ListLiteral,
    /// The `listof` keyword.
    pub token: Token,
}

/// `name = "new value".`
#[derive(Debug, Clone, PartialEq)]
pub struct ReassignmentStatement {
    pub identifier: Identifier,
    pub new_value: Expr,
}

/// `block ... end`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Stmt>,
    pub token: Token,
}

/// `loop cond { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct LoopStatement {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub token: Token,
}

/// `if cond { ... }` with an optional chain.
///
/// An `elseif` is itself an `IfStatement` stored in `alternative`; a final
/// `else` is stored in `default` of the last link.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub alternative: Option<Box<IfStatement>>,
    pub default: Option<ElseStatement>,
    /// The `if` or `elseif` keyword.
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseStatement {
    pub body: Vec<Stmt>,
    pub token: Token,
}

/// `return a, b.`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub values: Vec<Expr>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub token: Token,
}

/// `datatype City { ... }`, one field per line.
#[derive(Debug, Clone, PartialEq)]
pub struct DatatypeDeclaration {
    pub name: Identifier,
    pub fields: Vec<DatatypeField>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatatypeField {
    pub data_type: DataType,
    pub identifier: Identifier,
}

/// `fun name(int a, User u) -> int, string { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub params: Vec<FunctionParam>,
    pub return_types: Vec<DataType>,
    pub body: Vec<Stmt>,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParam {
    pub data_type: DataType,
    pub identifier: Identifier,
}
