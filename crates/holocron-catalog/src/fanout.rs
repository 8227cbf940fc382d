// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Order-preserving parallel map.

use std::future::Future;

use futures::future::try_join_all;

/// Run `op` on every item concurrently and collect the results by input position.
///
/// Completion order does not affect output order. The first error fails the
/// whole batch and the remaining operations are dropped.
pub async fn try_map_ordered<I, F, Fut, T, E>(items: I, op: F) -> Result<Vec<T>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    try_join_all(items.into_iter().map(op)).await
}
