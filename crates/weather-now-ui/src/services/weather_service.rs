//! Weather backend: async lookups.
//! All network work runs on the tokio runtime; results are sent back via mpsc.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use weather_now_lookup::{WeatherError, WeatherLookup, WeatherReport};

/// Messages sent from async operations back to the calling thread
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of one lookup
    LookupDone(Result<WeatherReport, WeatherError>),
}

/// Run a lookup for `input` on the runtime.
/// Sends `LookupDone` on the channel when complete; if the task is dropped
/// first, `tx` goes with it and the receiver sees a disconnect.
pub fn request_lookup(
    tx: Sender<WeatherServiceMessage>,
    runtime: &Handle,
    lookup: Arc<WeatherLookup>,
    input: String,
) {
    runtime.spawn(async move {
        let result = lookup.lookup(&input).await;
        if let Err(e) = &result {
            tracing::warn!("Weather lookup for '{}' failed: {}", input.trim(), e);
        }
        if tx.send(WeatherServiceMessage::LookupDone(result)).is_err() {
            tracing::debug!("Weather lookup finished after the receiver was dropped");
        }
    });
}
