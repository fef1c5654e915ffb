/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root and the statement/expression sum types
/// - expressions: Literal, identifier, list, prefix and call nodes
/// - statements: Declaration and control-flow nodes
/// - types: Type annotations used by declarations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
