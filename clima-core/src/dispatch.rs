//! Hand-off of lookup results to a presentation layer.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::debug;

use crate::{WeatherError, WeatherProvider, WeatherQuery, WeatherReading};

pub type LookupResult = Result<WeatherReading, WeatherError>;

/// Run one lookup on the tokio runtime and deliver its outcome on the
/// returned receiver. Exactly one value is sent per call. Calls are
/// independent; nothing is shared or coalesced between them.
///
/// Must be called from within a tokio runtime.
pub fn spawn_lookup(
    provider: Arc<dyn WeatherProvider>,
    query: WeatherQuery,
) -> oneshot::Receiver<LookupResult> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let result = provider.current_weather(&query).await;
        if tx.send(result).is_err() {
            debug!(%query, "receiver dropped before weather result was delivered");
        }
    });

    rx
}
