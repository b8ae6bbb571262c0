use std::fmt::{Display, Formatter};

/// Namespace of keys in the flat store.
///
/// Components are scoped as `Class[id]`, indexed children of a component as
/// `Class[id].object[index]` and fields as `<prefix>.field`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(String);

impl Prefix {
    pub fn component<I: Display>(class: &str, id: I) -> Self {
        Self(format!("{}[{}]", class, id))
    }

    pub fn object(&self, index: usize) -> Self {
        Self(format!("{}.object[{}]", self.0, index))
    }

    pub fn nested(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    #[inline]
    pub fn key(&self, field: &str) -> String {
        format!("{}.{}", self.0, field)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
