//! Helpers over string-keyed, insertion-ordered maps
//!
//! The async helpers dispatch the callback for every entry before awaiting
//! any of them, then reassemble the results in the input key order. If any
//! entry fails, the whole call fails with one [`EntryFailures`] listing every
//! failed key; no partial map is returned.
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use type_guards::objects;
//!
//! # tokio_test::block_on(async {
//! let prices: IndexMap<String, u32> = objects::from_entries([("tea", 3), ("cake", 5)]);
//!
//! let doubled = objects::map(&prices, |price, _key| async move {
//!     Ok::<_, String>(price * 2)
//! })
//! .await
//! .unwrap();
//!
//! assert_eq!(objects::entries(&doubled), vec![("tea", &6), ("cake", &10)]);
//! # });
//! ```

use std::future::Future;

use futures::future::join_all;
use indexmap::IndexMap;

use crate::error::EntryFailures;

/// Borrow the entries of `input` in key order.
pub fn entries<V>(input: &IndexMap<String, V>) -> Vec<(&str, &V)> {
    input.iter().map(|(k, v)| (k.as_str(), v)).collect()
}

/// Build a map from `(key, value)` pairs. A repeated key keeps its first
/// position and its last value.
pub fn from_entries<I, K, V>(pairs: I) -> IndexMap<String, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Map every entry, keys included.
///
/// `f` receives the `(key, value)` pair and the entry's index.
///
/// ```rust
/// use indexmap::IndexMap;
/// use type_guards::objects;
///
/// # tokio_test::block_on(async {
/// let input: IndexMap<String, i32> = objects::from_entries([("a", 1), ("b", 2)]);
///
/// let renamed = objects::map_entries(&input, |(key, value), index| async move {
///     Ok::<_, String>((format!("{}{}", key, index), value * 10))
/// })
/// .await
/// .unwrap();
///
/// assert_eq!(objects::entries(&renamed), vec![("a0", &10), ("b1", &20)]);
/// # });
/// ```
pub async fn map_entries<'a, In, Out, E, F, Fut>(
    input: &'a IndexMap<String, In>,
    f: F,
) -> Result<IndexMap<String, Out>, EntryFailures<E>>
where
    F: Fn((&'a str, &'a In), usize) -> Fut,
    Fut: Future<Output = Result<(String, Out), E>>,
{
    let pending: Vec<_> = input
        .iter()
        .enumerate()
        .map(|(index, (key, value))| {
            let fut = f((key.as_str(), value), index);
            async move { (key.as_str(), fut.await) }
        })
        .collect();

    let settled = settle(join_all(pending).await)?;
    Ok(settled.into_iter().collect())
}

/// Map every value, keeping keys.
///
/// `f` receives the value and its key.
pub async fn map<'a, In, Out, E, F, Fut>(
    input: &'a IndexMap<String, In>,
    f: F,
) -> Result<IndexMap<String, Out>, EntryFailures<E>>
where
    F: Fn(&'a In, &'a str) -> Fut,
    Fut: Future<Output = Result<Out, E>>,
{
    map_entries(input, |(key, value), _| {
        let fut = f(value, key);
        async move { fut.await.map(|out| (key.to_string(), out)) }
    })
    .await
}

/// Run `f` for every entry concurrently.
///
/// ```rust
/// use std::sync::Mutex;
/// use indexmap::IndexMap;
/// use type_guards::objects;
///
/// # tokio_test::block_on(async {
/// let input: IndexMap<String, i32> = objects::from_entries([("a", 1), ("b", 2)]);
/// let total = Mutex::new(0);
///
/// objects::for_each(&input, |value, _key| {
///     let total = &total;
///     async move {
///         *total.lock().unwrap() += value;
///         Ok::<_, String>(())
///     }
/// })
/// .await
/// .unwrap();
///
/// assert_eq!(*total.lock().unwrap(), 3);
/// # });
/// ```
pub async fn for_each<'a, In, E, F, Fut>(
    input: &'a IndexMap<String, In>,
    f: F,
) -> Result<(), EntryFailures<E>>
where
    F: Fn(&'a In, &'a str) -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    let pending: Vec<_> = input
        .iter()
        .map(|(key, value)| {
            let fut = f(value, key.as_str());
            async move { (key.as_str(), fut.await) }
        })
        .collect();

    settle(join_all(pending).await).map(|_| ())
}

/// Keep the entries whose value and key satisfy `pred`.
///
/// ```rust
/// use indexmap::IndexMap;
/// use type_guards::{create_filter, objects, Value};
///
/// let row: IndexMap<String, Value> =
///     objects::from_entries([("id", Value::from(1)), ("note", Value::Null)]);
/// let present = create_filter(["!nullish"]).unwrap();
///
/// let kept = objects::filter(&row, |value, _| present.matches(value));
/// assert_eq!(kept.keys().collect::<Vec<_>>(), ["id"]);
/// ```
pub fn filter<V, P>(input: &IndexMap<String, V>, pred: P) -> IndexMap<String, V>
where
    V: Clone,
    P: Fn(&V, &str) -> bool,
{
    input
        .iter()
        .filter(|(key, value)| pred(value, key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn settle<T, E>(settled: Vec<(&str, Result<T, E>)>) -> Result<Vec<T>, EntryFailures<E>> {
    let mut successes = Vec::with_capacity(settled.len());
    let mut failures = Vec::new();

    for (key, result) in settled {
        match result {
            Ok(value) => successes.push(value),
            Err(e) => failures.push((key.to_string(), e)),
        }
    }

    match EntryFailures::new(failures) {
        Some(failures) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(failed = failures.len(), "object entries failed");
            Err(failures)
        }
        None => Ok(successes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexMap<String, i32> {
        from_entries([("z", 26), ("a", 1), ("m", 13)])
    }

    #[test]
    fn entries_keep_order() {
        let input = sample();
        assert_eq!(entries(&input), vec![("z", &26), ("a", &1), ("m", &13)]);
    }

    #[test]
    fn from_entries_last_value_wins() {
        let map: IndexMap<String, i32> = from_entries([("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(entries(&map), vec![("a", &3), ("b", &2)]);
    }

    #[test]
    fn filter_by_key_and_value() {
        let input = sample();
        let kept = filter(&input, |v, k| *v > 1 && k != "m");
        assert_eq!(entries(&kept), vec![("z", &26)]);
    }

    #[tokio::test]
    async fn map_preserves_key_order() {
        let input = sample();
        let out = map(&input, |v, _| async move { Ok::<_, String>(v + 1) })
            .await
            .unwrap();
        assert_eq!(entries(&out), vec![("z", &27), ("a", &2), ("m", &14)]);
    }

    #[tokio::test]
    async fn map_aggregates_every_failure() {
        let input = sample();
        let err = map(&input, |v, key| async move {
            if *v > 10 {
                Err(format!("{} too large", key))
            } else {
                Ok(*v)
            }
        })
        .await
        .unwrap_err();

        assert_eq!(
            err.into_failures(),
            vec![
                ("z".to_string(), "z too large".to_string()),
                ("m".to_string(), "m too large".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn for_each_reports_failures() {
        let input = sample();
        let err = for_each(&input, |v, _| async move {
            if *v == 1 {
                Err("one")
            } else {
                Ok(())
            }
        })
        .await
        .unwrap_err();
        assert_eq!(err.keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[tokio::test]
    async fn empty_input_succeeds() {
        let input: IndexMap<String, i32> = IndexMap::new();
        let out = map(&input, |v, _| async move { Ok::<_, ()>(*v) })
            .await
            .unwrap();
        assert!(out.is_empty());
    }
}
