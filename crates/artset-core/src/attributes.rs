use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Immutable key/value attributes describing the variant an artifact or file
/// was selected from (e.g. `usage=java-runtime`).
///
/// Clones share storage, so passing a container along with every visited
/// artifact costs one reference count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AttributeContainer {
    attributes: Arc<BTreeMap<String, String>>,
}

impl AttributeContainer {
    /// A container with no attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Return a new container with `key` set to `value`.
    ///
    /// `self` is left untouched.
    pub fn with(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut attributes = (*self.attributes).clone();
        attributes.insert(key.into(), value.into());
        Self {
            attributes: Arc::new(attributes),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeContainer {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let attributes = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            attributes: Arc::new(attributes),
        }
    }
}

impl fmt::Display for AttributeContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        write!(f, "}}")
    }
}
