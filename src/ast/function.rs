use std::fmt;

use crate::ast::FunctionKind;

/// A parsed call: `name(arg, arg, ...)`.
///
/// The root of every parse is a `Function`. Logical operators and value
/// comparators share this shape; see [`Function::kind`] to tell them apart.
///
/// # Example
/// ```text
/// and(eq("genre", "pop"), lt("length", 180))
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Call name exactly as written
    pub name: String,

    /// Positional arguments, in source order
    pub args: Vec<Argument>,
}

/// A single call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Nested call
    Function(Function),

    /// String literal
    ///
    /// # Example
    /// ```text
    /// "Katy Perry"
    /// ```
    String(String),

    /// Literal integer
    Integer(i64),

    /// Literal floating point number
    Float(f64),

    /// Boolean literal
    Boolean(bool),
}

impl Function {
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        Function {
            name: name.into(),
            args,
        }
    }

    /// Operator or comparator this call names, if any.
    pub fn kind(&self) -> Option<FunctionKind> {
        FunctionKind::classify(&self.name)
    }

    /// Nested calls among the direct arguments.
    pub fn nested(&self) -> impl Iterator<Item = &Function> {
        self.args.iter().filter_map(Argument::as_function)
    }

    /// Depth-first, pre-order walk over this call and every nested call.
    pub fn functions(&self) -> Functions<'_> {
        Functions { stack: vec![self] }
    }

    /// Nesting depth; a call with only literal arguments has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.nested().map(Function::depth).max().unwrap_or(0)
    }
}

impl Argument {
    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Argument::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Argument::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Argument::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Argument::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Either numeric literal widened to `f64`. Lossy: integers beyond
    /// 2^53 are rounded, and `180` and `180.0` become indistinguishable.
    pub fn as_number_lossy(&self) -> Option<f64> {
        match self {
            Argument::Float(n) => Some(*n),
            Argument::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Argument::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_literal(&self) -> bool {
        !matches!(self, Argument::Function(_))
    }
}

impl From<Function> for Argument {
    fn from(func: Function) -> Self {
        Argument::Function(func)
    }
}

impl From<&str> for Argument {
    fn from(s: &str) -> Self {
        Argument::String(s.to_string())
    }
}

impl From<String> for Argument {
    fn from(s: String) -> Self {
        Argument::String(s)
    }
}

impl From<i64> for Argument {
    fn from(n: i64) -> Self {
        Argument::Integer(n)
    }
}

impl From<f64> for Argument {
    fn from(n: f64) -> Self {
        Argument::Float(n)
    }
}

impl From<bool> for Argument {
    fn from(b: bool) -> Self {
        Argument::Boolean(b)
    }
}

/// Iterator returned by [`Function::functions`].
pub struct Functions<'a> {
    stack: Vec<&'a Function>,
}

impl<'a> Iterator for Functions<'a> {
    type Item = &'a Function;

    fn next(&mut self) -> Option<Self::Item> {
        let func = self.stack.pop()?;
        // Reversed so the leftmost argument is visited first
        self.stack.extend(func.nested().collect::<Vec<_>>().into_iter().rev());
        Some(func)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(")")
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Function(func) => write!(f, "{}", func),
            Argument::String(s) => {
                f.write_str("\"")?;
                for ch in s.chars() {
                    match ch {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\t' => f.write_str("\\t")?,
                        '\r' => f.write_str("\\r")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
            Argument::Integer(n) => write!(f, "{}", n),
            // Debug keeps the decimal point (`3.0`) so the value lexes back as a float
            Argument::Float(n) => write!(f, "{:?}", n),
            Argument::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Function {
        Function::new(
            "and",
            vec![
                Function::new(
                    "or",
                    vec![
                        Function::new("eq", vec!["a".into(), 1i64.into()]).into(),
                        Function::new("ne", vec!["b".into(), "x".into()]).into(),
                    ],
                )
                .into(),
                Function::new("lt", vec!["c".into(), 5i64.into()]).into(),
            ],
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(
            sample().to_string(),
            r#"and(or(eq("a", 1), ne("b", "x")), lt("c", 5))"#
        );
        assert_eq!(Function::new("foo", vec![]).to_string(), "foo()");
    }

    #[test]
    fn test_display_float_and_escapes() {
        let func = Function::new(
            "eq",
            vec![r#"say "hi""#.into(), 3.0f64.into(), false.into()],
        );
        assert_eq!(func.to_string(), r#"eq("say \"hi\"", 3.0, false)"#);
    }

    #[test]
    fn test_functions_preorder() {
        let root = sample();
        let names: Vec<&str> = root.functions().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["and", "or", "eq", "ne", "lt"]);
    }

    #[test]
    fn test_literal_accessors_match_one_variant() {
        let int = Argument::Integer(180);
        let float = Argument::Float(180.0);
        let boolean = Argument::Boolean(true);
        let string = Argument::from("pop");

        assert_eq!(int.as_int(), Some(180));
        assert_eq!(int.as_float(), None);
        assert_eq!(float.as_float(), Some(180.0));
        assert_eq!(float.as_int(), None);
        assert_eq!(boolean.as_bool(), Some(true));
        assert_eq!(string.as_bool(), None);
        assert_eq!(string.as_str(), Some("pop"));
        assert_eq!(Argument::Integer(i64::MAX).as_float(), None);

        for arg in [&int, &float, &boolean, &string] {
            assert!(arg.is_literal());
            assert!(arg.as_function().is_none());
        }
        let nested = Argument::from(Function::new("foo", vec![]));
        assert!(!nested.is_literal());
        assert_eq!(nested.as_int(), None);
    }

    #[test]
    fn test_as_number_lossy() {
        assert_eq!(Argument::Integer(180).as_number_lossy(), Some(180.0));
        assert_eq!(Argument::Float(3.5).as_number_lossy(), Some(3.5));
        assert_eq!(
            Argument::Integer(i64::MAX).as_number_lossy(),
            Some(9.223372036854776e18)
        );
        assert_eq!(Argument::Boolean(true).as_number_lossy(), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(sample().depth(), 3);
        assert_eq!(Function::new("foo", vec![]).depth(), 1);
    }
}
