/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement and expression enums and the visitor trait
/// - expressions: Payloads of the expression variants
/// - statements: Payloads of the statement variants
/// - types: Type annotations and parameters
/// - printer: Renders a tree back into a canonical text form
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
