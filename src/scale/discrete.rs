//! Discrete (ordinal) scale.

use std::collections::HashMap;

use crate::data::{Value, ValueKey};
use crate::error::{PlotError, PlotResult};

/// Maps each domain key to `range[position mod range.len()]`.
///
/// The range may be shorter than the domain, in which case its values cycle.
/// Repeated keys keep their last position.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteScale<T = Value> {
    domain: Vec<Value>,
    positions: HashMap<ValueKey, usize>,
    range: Vec<T>,
}

impl<T> DiscreteScale<T> {
    pub fn new(domain: Vec<Value>, range: Vec<T>) -> PlotResult<Self> {
        if range.is_empty() {
            return Err(PlotError::InvalidConfig(
                "Discrete scale range must not be empty".to_string(),
            ));
        }
        let positions = domain
            .iter()
            .enumerate()
            .map(|(i, key)| (key.key(), i))
            .collect();
        Ok(DiscreteScale {
            domain,
            positions,
            range,
        })
    }

    /// Ordinal position of a key in the domain.
    pub fn position(&self, key: &Value) -> Option<usize> {
        self.positions.get(&key.key()).copied()
    }

    /// Look up the range value for a key; `None` for unknown keys.
    pub fn get(&self, key: &Value) -> Option<&T> {
        self.position(key)
            .map(|i| &self.range[i % self.range.len()])
    }

    pub fn domain(&self) -> &[Value] {
        &self.domain
    }

    pub fn range(&self) -> &[T] {
        &self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn test_range_cycles() {
        let scale = DiscreteScale::new(keys(&["a", "b", "c"]), keys(&["r1", "r2"])).unwrap();
        assert_eq!(scale.get(&Value::from("a")), Some(&Value::from("r1")));
        assert_eq!(scale.get(&Value::from("b")), Some(&Value::from("r2")));
        assert_eq!(scale.get(&Value::from("c")), Some(&Value::from("r1")));
    }

    #[test]
    fn test_unknown_key_is_none() {
        let scale = DiscreteScale::new(keys(&["a"]), vec![1.0]).unwrap();
        assert_eq!(scale.get(&Value::from("z")), None);
        assert_eq!(scale.get(&Value::from(1)), None);
    }

    #[test]
    fn test_numeric_keys() {
        let domain = vec![Value::from(2020), Value::from(2021)];
        let scale = DiscreteScale::new(domain, vec![10.0, 20.0, 30.0]).unwrap();
        assert_eq!(scale.get(&Value::from(2021.0)), Some(&20.0));
        assert_eq!(scale.position(&Value::from(2020)), Some(0));
    }

    #[test]
    fn test_empty_range_rejected() {
        let result = DiscreteScale::<f64>::new(keys(&["a"]), Vec::new());
        assert!(matches!(result, Err(PlotError::InvalidConfig(_))));
    }
}
