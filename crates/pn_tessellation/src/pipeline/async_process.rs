//! Async Batch Processor
//!
//! Non-blocking wrapper around [`process_batch`] that runs a frame's batch on
//! rayon's thread pool and hands the result back through a channel.
//!
//! A batch either completes or is discarded as a whole: [`AsyncTessellator::cancel`]
//! drops the receiver and the worker's result goes nowhere. There is no
//! partial-batch cancellation.
//!
//! # Usage
//!
//! ```ignore
//! let mut tessellator = AsyncTessellator::new();
//!
//! // Start processing (non-blocking)
//! tessellator.start(TessellationRequest { frame, source: mesh.clone(), config });
//!
//! // Poll each frame
//! if let Some(result) = tessellator.poll() {
//!     upload_patches(&result.output.patches);
//! }
//! ```

use crossbeam_channel::{self as channel, Receiver, TryRecvError};

use super::process::process_batch;
use super::source::PatchSource;
use super::types::{BatchConfig, BatchOutput};

/// Request to tessellate one frame's batch off-thread.
pub struct TessellationRequest<S: PatchSource> {
  /// Caller-defined frame number, echoed back in the result.
  pub frame: u64,
  /// Patches to process. Owned so the worker can outlive the caller's frame.
  pub source: S,
  /// Policy, attributes and uniforms for the batch.
  pub config: BatchConfig,
}

/// Finished batch.
#[derive(Debug)]
pub struct FrameResult {
  pub frame: u64,
  pub output: BatchOutput,
}

/// Non-blocking batch pipeline with at most one batch in flight.
pub struct AsyncTessellator {
  /// Receiver for the pending result.
  receiver: Option<Receiver<FrameResult>>,
  /// Frame of the pending batch.
  pending_frame: Option<u64>,
}

impl AsyncTessellator {
  pub fn new() -> Self {
    Self {
      receiver: None,
      pending_frame: None,
    }
  }

  /// Check if a batch is in flight.
  pub fn is_busy(&self) -> bool {
    self.receiver.is_some()
  }

  /// Frame number of the batch in flight, if any.
  pub fn pending_frame(&self) -> Option<u64> {
    self.pending_frame
  }

  /// Start processing a batch.
  ///
  /// Returns `true` if started, `false` if a batch is already in flight.
  pub fn start<S: PatchSource + Send + 'static>(&mut self, request: TessellationRequest<S>) -> bool {
    if self.is_busy() {
      return false;
    }

    let (sender, receiver) = channel::bounded(1);
    self.receiver = Some(receiver);
    self.pending_frame = Some(request.frame);

    #[cfg(feature = "tracing")]
    tracing::trace!(frame = request.frame, "batch submitted");

    rayon::spawn(move || {
      let output = process_batch(&request.source, &request.config);
      // Ignore send error (receiver dropped = frame discarded)
      let _ = sender.send(FrameResult {
        frame: request.frame,
        output,
      });
    });

    true
  }

  /// Poll for the finished batch (non-blocking).
  ///
  /// Returns `Some(result)` once, when the batch completes.
  pub fn poll(&mut self) -> Option<FrameResult> {
    let receiver = self.receiver.as_ref()?;

    match receiver.try_recv() {
      Ok(result) => {
        self.receiver = None;
        self.pending_frame = None;
        Some(result)
      }
      Err(TryRecvError::Empty) => None,
      Err(TryRecvError::Disconnected) => {
        self.receiver = None;
        self.pending_frame = None;
        None
      }
    }
  }

  /// Block until the batch in flight finishes.
  ///
  /// Returns `None` if nothing was started.
  pub fn wait(&mut self) -> Option<FrameResult> {
    let receiver = self.receiver.take()?;
    self.pending_frame = None;
    receiver.recv().ok()
  }

  /// Discard the batch in flight.
  ///
  /// The worker still runs to completion, but its result is dropped.
  pub fn cancel(&mut self) {
    #[cfg(feature = "tracing")]
    if let Some(frame) = self.pending_frame {
      tracing::debug!(frame, "batch discarded");
    }

    self.receiver = None;
    self.pending_frame = None;
  }
}

impl Default for AsyncTessellator {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
#[path = "async_process_test.rs"]
mod async_process_test;
