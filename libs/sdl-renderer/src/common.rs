use std::fmt;

pub(crate) trait IteratorJoin {
    fn join(self, sep: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<T, I> IteratorJoin for I
where
    T: fmt::Display,
    I: Iterator<Item = T>,
{
    fn join(mut self, sep: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.next() {
            first.fmt(f)?;
        }

        for item in self {
            f.write_str(sep)?;
            item.fmt(f)?;
        }

        Ok(())
    }
}
