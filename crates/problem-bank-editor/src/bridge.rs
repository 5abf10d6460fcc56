//! Bridge between the egui shell and the problem bank backend.
//! Requests run on a worker pool; results come back through an inbox the
//! UI drains every frame.

use std::sync::{Arc, Mutex};

use eframe::egui;
use problem_bank_adapters::{ProblemBankAdapter, ProblemBankAdapterConfig};
use problem_bank_core::{execute, EditorEvent, EditorRequest};

/// Acquire mutex lock, recovering from poisoned state if necessary.
macro_rules! lock_or_recover {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("editor inbox mutex was poisoned, recovering");
                poisoned.into_inner()
            }
        }
    };
}

pub struct EditorBridge {
    runtime: Option<tokio::runtime::Runtime>,
    adapter: Arc<ProblemBankAdapter>,
    inbox: Arc<Mutex<Vec<EditorEvent>>>,
}

impl EditorBridge {
    pub fn new(config: ProblemBankAdapterConfig) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("problem-bank-io")
            .enable_all()
            .build()?;
        Ok(Self {
            runtime: Some(runtime),
            adapter: Arc::new(ProblemBankAdapter::with_config(config)),
            inbox: Arc::new(Mutex::new(Vec::new())),
        })
    }

    pub fn backend_label(&self) -> &'static str {
        self.adapter.backend_label()
    }

    /// Runs `request` off the UI thread. Requests are not coordinated with
    /// each other and are never cancelled.
    pub fn submit(&self, request: EditorRequest, ctx: &egui::Context) {
        let Some(runtime) = self.runtime.as_ref() else {
            return;
        };
        tracing::debug!(request = request.label(), ticket = request.ticket().0, "submitting request");
        let adapter = Arc::clone(&self.adapter);
        let inbox = Arc::clone(&self.inbox);
        let ctx = ctx.clone();

        runtime.spawn_blocking(move || {
            let event = execute(adapter.as_ref(), request);
            lock_or_recover!(inbox).push(event);
            ctx.request_repaint();
        });
    }

    /// Takes every result that arrived since the last call, in arrival order.
    pub fn drain(&self) -> Vec<EditorEvent> {
        std::mem::take(&mut *lock_or_recover!(self.inbox))
    }
}

impl Drop for EditorBridge {
    /// In-flight requests are abandoned rather than awaited.
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
