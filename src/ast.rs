//! # Sift Filter Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the sift filter
//! language, the function-call notation a language model is prompted to emit
//! when it turns a natural-language request into a metadata filter.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[function]** - The `Function` call node and its `Argument`s
//! - **[operators]** - The closed `Operator` and `Comparator` vocabularies
//!
//! ## Quick Start
//!
//! ```text
//! and(or(eq("artist", true), eq("artist", "Katy Perry")), lt("length", 180), eq("genre", "pop"))
//! ```
//!
//! This filter keeps pop songs shorter than three minutes by one artist.
//!
//! ## Core Concepts
//!
//! ### One Production
//!
//! Every node is a call. The grammar does not know `and` from `eq`:
//!
//! ```text
//! call    := IDENT "(" arglist? ")"
//! arglist := arg ("," arg)*
//! arg     := call | STRING | INT | FLOAT | BOOL
//! ```
//!
//! ### Operators and Comparators
//!
//! - **Operators** `and`, `or`, `not` combine nested predicates
//! - **Comparators** `eq`, `ne`, `gt`, `gte`, `lt`, `lte`, `contain`, `like`,
//!   `in`, `nin` compare a field (argument 0) with a value (argument 1)
//!
//! Which vocabulary a name belongs to is decided by [`FunctionKind::classify`],
//! never by the parser. Names outside both sets still parse.
//!
//! ### Literal Typing
//!
//! - `180` is an integer, `3.5` and `1e3` are floats
//! - `true` / `FALSE` are booleans
//! - `"pop"` is a string, quotes stripped
pub mod tokens;
pub mod function;
pub mod operators;

pub use tokens::Token;
pub use function::{Argument, Function, Functions};
pub use operators::{Comparator, FunctionKind, Operator, UnknownName};
