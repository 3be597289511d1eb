//! Callback and async entry points that keep lookups off the foreground thread

use crate::engine::DeviceNames;
use devicename_catalog::fallback_info;
use devicename_types::{DeviceInfo, DeviceQuery, Error, Resolution, ResolutionSource, Result};
use std::thread;
use tracing::{debug, warn};

/// A pending lookup
///
/// The codename and model default to the current device's.
///
/// # Examples
///
/// ```rust,no_run
/// use devicename_engine::DeviceNames;
///
/// let names = DeviceNames::new()?;
/// names
///     .request()
///     .codename("zerolte")
///     .model("SM-G925I")
///     .request(|info, error| {
///         if let Some(error) = error {
///             eprintln!("lookup failed: {}", error);
///         }
///         println!("{}", info.name());
///     })?;
/// # Ok::<(), devicename_types::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    names: DeviceNames,
    codename: Option<String>,
    model: Option<String>,
}

impl Request {
    pub(crate) fn new(names: DeviceNames) -> Self {
        Self {
            names,
            codename: None,
            model: None,
        }
    }

    /// Look up `codename` instead of the current device's
    pub fn codename(mut self, codename: impl Into<String>) -> Self {
        self.codename = Some(codename.into());
        self
    }

    /// Look up `model` instead of the current device's
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The query this request will run
    pub fn query(&self) -> DeviceQuery {
        let current = self.names.current_device();
        DeviceQuery::new(
            Some(self.codename.as_deref().unwrap_or(&current.codename)),
            Some(self.model.as_deref().unwrap_or(&current.model)),
        )
    }

    /// Run the lookup on the calling thread
    ///
    /// On failure the fallback record is returned together with the error,
    /// so `info.name()` is always usable.
    pub fn run(&self) -> (DeviceInfo, Option<Error>) {
        let (resolution, error) = self.run_detailed();
        (resolution.info, error)
    }

    /// Like [`run`](Self::run), also reporting which layer answered
    pub fn run_detailed(&self) -> (Resolution, Option<Error>) {
        let query = self.query();
        match self.names.resolution(&query) {
            Ok(resolution) => (resolution, None),
            Err(e) => {
                warn!("Lookup for {} failed: {}", query, e);
                let info = fallback_info(self.names.current_device(), &query);
                (Resolution::new(info, ResolutionSource::Fallback), Some(e))
            }
        }
    }

    /// Run the lookup and hand the result to `callback`
    ///
    /// Called on the foreground thread, the lookup moves to a new worker
    /// thread; otherwise it runs inline. When a foreground thread is
    /// configured the callback is always posted to it, else it runs on the
    /// thread that finished the lookup. Fails only if the worker thread
    /// cannot be spawned.
    pub fn request<F>(self, callback: F) -> Result<()>
    where
        F: FnOnce(DeviceInfo, Option<Error>) + Send + 'static,
    {
        let Some(main) = self.names.main_thread().cloned() else {
            let (info, error) = self.run();
            callback(info, error);
            return Ok(());
        };

        if main.is_current() {
            debug!("Dispatching lookup for {} to a worker thread", self.query());
            thread::Builder::new()
                .name("devicename-request".to_string())
                .spawn(move || {
                    let (info, error) = self.run();
                    main.post(Box::new(move || callback(info, error)));
                })?;
        } else {
            let (info, error) = self.run();
            main.post(Box::new(move || callback(info, error)));
        }
        Ok(())
    }

    /// Run the lookup on the tokio blocking pool
    pub async fn execute(self) -> Result<DeviceInfo> {
        let query = self.query();
        let names = self.names;
        tokio::task::spawn_blocking(move || names.device_info(&query))
            .await
            .map_err(|e| Error::other(format!("Lookup task failed: {}", e)))?
    }
}
