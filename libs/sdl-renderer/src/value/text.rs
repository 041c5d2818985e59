use std::fmt::{self, Write};

/// A string value, rendered double-quoted with `"` and `\` escaped.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Text<T: fmt::Display>(pub(crate) T);

impl<T: fmt::Display> fmt::Display for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;

        for c in self.0.to_string().chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                c => f.write_char(c)?,
            }
        }

        f.write_str("\"")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_escapes() {
        assert_eq!(Text("meow").to_string(), r#""meow""#);
        assert_eq!(Text(r#"say "hi""#).to_string(), r#""say \"hi\"""#);
        assert_eq!(Text(r"back\slash").to_string(), r#""back\\slash""#);
    }
}
