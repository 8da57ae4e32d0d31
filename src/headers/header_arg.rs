use std::collections::{BTreeMap, HashMap};

/// Headers passed along with a write-head call.
#[derive(Clone, Debug, PartialEq)]
pub enum HeaderArg {
    /// Ordered `(name, value)` pairs, applied in sequence order.
    Pairs(Vec<(String, String)>),
    /// Entries of a name to value mapping, in the mapping's iteration
    /// order. Entries with an empty name are skipped when applied.
    Map(Vec<(String, String)>),
}

impl HeaderArg {
    /// The header lines this argument sets, in application order.
    pub fn into_lines(self) -> Vec<(String, String)> {
        match self {
            HeaderArg::Pairs(pairs) => pairs,
            HeaderArg::Map(entries) => entries
                .into_iter()
                .filter(|(name, _)| !name.is_empty())
                .collect(),
        }
    }
}

fn to_lines<K, V, I>(iter: I) -> Vec<(String, String)>
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect()
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for HeaderArg {
    fn from(pairs: Vec<(K, V)>) -> Self {
        HeaderArg::Pairs(to_lines(pairs))
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]>
    for HeaderArg
{
    fn from(pairs: [(K, V); N]) -> Self {
        HeaderArg::Pairs(to_lines(pairs))
    }
}

impl<K: Into<String>, V: Into<String>> From<HashMap<K, V>> for HeaderArg {
    fn from(map: HashMap<K, V>) -> Self {
        HeaderArg::Map(to_lines(map))
    }
}

impl<K: Into<String>, V: Into<String>> From<BTreeMap<K, V>> for HeaderArg {
    fn from(map: BTreeMap<K, V>) -> Self {
        HeaderArg::Map(to_lines(map))
    }
}

#[cfg(test)]
mod tests {
    use super::HeaderArg;
    use crate::assert_match;
    use std::collections::BTreeMap;

    #[test]
    fn test_pairs_keep_sequence_order() {
        let arg = HeaderArg::from(vec![("x-b", "2"), ("x-a", "1")]);
        assert_match!(arg, HeaderArg::Pairs(_));
        assert_eq!(
            arg.into_lines(),
            vec![
                ("x-b".to_string(), "2".to_string()),
                ("x-a".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_pairs_keep_empty_names() {
        let arg = HeaderArg::from([("", "1")]);
        assert_eq!(arg.into_lines().len(), 1);
    }

    #[test]
    fn test_map_skips_empty_names() {
        let mut map = BTreeMap::new();
        map.insert("", "dropped");
        map.insert("etag", "abc");
        map.insert("vary", "accept");

        let arg = HeaderArg::from(map);
        assert_match!(arg, HeaderArg::Map(_));
        assert_eq!(
            arg.into_lines(),
            vec![
                ("etag".to_string(), "abc".to_string()),
                ("vary".to_string(), "accept".to_string()),
            ]
        );
    }
}
