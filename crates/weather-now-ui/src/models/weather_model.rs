use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use weather_now_lookup::{PlaceQuery, WeatherLookup, WeatherReport};

use crate::error_mapping;
use crate::services::{request_lookup, WeatherServiceMessage};

/// What the screen shows right now
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Latest submitted text, as typed
    pub query: String,
    pub report: Option<WeatherReport>,
    pub error_message: Option<String>,
    pub loading: bool,
}

impl ViewState {
    /// Background theme key for the current screen
    pub fn theme(&self) -> &'static str {
        self.report
            .as_ref()
            .map_or("default", |r| r.descriptor.theme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Lookup handed to the runtime
    Started,
    /// Input failed validation; no request was made
    Rejected,
    /// A lookup is already in flight
    Busy,
}

pub struct WeatherModel {
    state: ViewState,
    runtime: Handle,
    lookup: Arc<WeatherLookup>,
    /// Result channel of the in-flight lookup, if any
    rx: Option<Receiver<WeatherServiceMessage>>,
}

impl WeatherModel {
    pub fn new(runtime: Handle, lookup: Arc<WeatherLookup>) -> Self {
        Self {
            state: ViewState::default(),
            runtime,
            lookup,
            rx: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        if self.state.loading {
            tracing::debug!("Ignoring submit while a lookup is in flight");
            return SubmitOutcome::Busy;
        }

        self.state.query = input.to_string();

        if let Err(e) = PlaceQuery::parse(input) {
            self.state.report = None;
            self.state.error_message = Some(error_mapping::user_message(e).to_string());
            return SubmitOutcome::Rejected;
        }

        self.state.error_message = None;
        self.state.report = None;
        self.state.loading = true;

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        request_lookup(tx, &self.runtime, self.lookup.clone(), input.to_string());
        SubmitOutcome::Started
    }

    /// Block until the in-flight lookup finishes or `timeout` passes.
    /// Returns true once nothing is pending.
    pub fn wait_for_result(&mut self, timeout: Duration) -> bool {
        if !self.state.loading {
            return true;
        }
        let Some(rx) = self.rx.as_ref() else {
            self.fail_in_flight();
            return true;
        };

        match rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.apply(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                self.fail_in_flight();
                true
            }
        }
    }

    fn apply(&mut self, msg: WeatherServiceMessage) {
        match msg {
            WeatherServiceMessage::LookupDone(Ok(report)) => {
                self.state.report = Some(report);
                self.state.error_message = None;
            }
            WeatherServiceMessage::LookupDone(Err(e)) => {
                self.state.report = None;
                self.state.error_message = Some(error_mapping::user_message(e).to_string());
            }
        }
        self.state.loading = false;
        self.rx = None;
    }

    fn fail_in_flight(&mut self) {
        tracing::error!("Weather service channel closed with a lookup in flight");
        self.state.report = None;
        self.state.error_message =
            Some("An unexpected error occurred. Please try again.".to_string());
        self.state.loading = false;
        self.rx = None;
    }
}
