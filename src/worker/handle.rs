//! # WorkerHandle: one isolated execution unit.
//!
//! A unit is a dedicated OS thread serving exactly one request. It shares
//! no memory with the controller; every reply crosses the boundary as an
//! owned value over an unbounded channel.
//!
//! The handle owns the unit's [`CancellationToken`] and the receiving half
//! of the reply channel. [`WorkerHandle::terminate`] cancels the token and
//! drops the receiver, which discards every undelivered reply. The unit
//! observes the token at snapshot boundaries and stops early, but even a
//! unit that keeps computing can no longer be heard.
//!
//! A panic inside the unit is caught at the thread boundary and rendered
//! as a terminal [`WorkerReply::Failed`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

use crate::dataset;
use crate::engine::SortRun;

use super::protocol::{WorkerReply, WorkerRequest};

/// Handle to one isolated execution unit.
pub struct WorkerHandle {
    generation: u64,
    ctx: CancellationToken,
    rx: UnboundedReceiver<WorkerReply>,
}

impl WorkerHandle {
    /// Spawns a unit serving one request.
    pub(crate) fn spawn(generation: u64, request: WorkerRequest) -> Self {
        Self::spawn_job(generation, move |ctx, tx| serve(request, ctx, tx))
    }

    /// Spawns a unit around an arbitrary job.
    ///
    /// This is the seam [`spawn`](Self::spawn) goes through; tests use it
    /// to exercise the panic path directly.
    pub(crate) fn spawn_job<J>(generation: u64, job: J) -> Self
    where
        J: FnOnce(&CancellationToken, &UnboundedSender<WorkerReply>) + Send + 'static,
    {
        let ctx = CancellationToken::new();
        let (tx, rx) = mpsc::unbounded_channel();

        let unit_ctx = ctx.clone();
        std::thread::spawn(move || {
            // Admission check: a unit superseded before it ran does nothing.
            if unit_ctx.is_cancelled() {
                return;
            }
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| job(&unit_ctx, &tx)));
            if let Err(payload) = outcome {
                let _ = tx.send(WorkerReply::Failed {
                    reason: panic_reason(payload),
                });
            }
        });

        Self {
            generation,
            ctx,
            rx,
        }
    }

    /// Generation id assigned by the supervisor at submission.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Awaits the next reply from the unit.
    ///
    /// `None` means the unit finished and the channel is drained.
    pub(crate) async fn recv(&mut self) -> Option<WorkerReply> {
        self.rx.recv().await
    }

    /// Terminates the unit.
    ///
    /// Cancels the token and consumes the handle; dropping the receiver
    /// discards all channel state including replies already in flight.
    pub fn terminate(self) {
        self.ctx.cancel();
    }
}

/// Serves one request inside the unit thread.
///
/// Send failures are ignored throughout: they only mean the controller
/// already dropped this unit's receiver.
fn serve(request: WorkerRequest, ctx: &CancellationToken, tx: &UnboundedSender<WorkerReply>) {
    match request {
        WorkerRequest::Init { size } => {
            let items = dataset::create(size, &mut rand::rng());
            let _ = tx.send(WorkerReply::Init { items });
        }
        WorkerRequest::IncreaseSize { items, by } => {
            let grown = dataset::grow(&items, by, &mut rand::rng());
            let _ = tx.send(WorkerReply::IncreaseSize { items: grown });
        }
        WorkerRequest::Sort { mut items } => {
            let run = SortRun::new(ctx.clone(), |snapshot: &[u32]| {
                let _ = tx.send(WorkerReply::SortTick {
                    items: snapshot.to_vec(),
                });
            });
            if run.sort(&mut items).is_ok() {
                let _ = tx.send(WorkerReply::Sorted { items });
            }
            // A cancelled run ends silently; nobody is listening anymore.
        }
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unit panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn init_delivers_one_bounded_dataset() {
        let mut handle = WorkerHandle::spawn(1, WorkerRequest::Init { size: 64 });
        match handle.recv().await {
            Some(WorkerReply::Init { items }) => {
                assert_eq!(items.len(), 64);
                assert!(items.iter().all(|&v| v < 64));
            }
            other => panic!("expected init reply, got {other:?}"),
        }
        assert!(handle.recv().await.is_none());
    }

    #[tokio::test]
    async fn increase_size_keeps_the_prefix() {
        let mut handle = WorkerHandle::spawn(
            1,
            WorkerRequest::IncreaseSize {
                items: vec![1, 2, 3],
                by: 2,
            },
        );
        match handle.recv().await {
            Some(WorkerReply::IncreaseSize { items }) => {
                assert_eq!(items.len(), 5);
                assert_eq!(&items[..3], &[1, 2, 3]);
            }
            other => panic!("expected increase-size reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn sort_streams_ticks_then_exactly_one_terminal() {
        use crate::dataset;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let input = dataset::create(5_000, &mut StdRng::seed_from_u64(17));
        let mut expected = input.clone();
        expected.sort_unstable();

        let mut handle = WorkerHandle::spawn(1, WorkerRequest::Sort { items: input });
        let mut ticks = 0usize;
        let mut terminal = None;
        while let Some(reply) = handle.recv().await {
            match reply {
                WorkerReply::SortTick { items } => {
                    assert!(terminal.is_none(), "tick after terminal");
                    assert_eq!(items.len(), 5_000);
                    ticks += 1;
                }
                WorkerReply::Sorted { items } => {
                    assert!(terminal.is_none(), "second terminal");
                    terminal = Some(items);
                }
                other => panic!("unexpected reply {other:?}"),
            }
        }
        assert!(ticks >= 1, "5k random elements take well over 1000 swaps");
        assert_eq!(terminal.expect("terminal reply"), expected);
    }

    #[tokio::test]
    async fn panicking_job_reports_failure() {
        let mut handle = WorkerHandle::spawn_job(1, |_, _| panic!("boom"));
        match handle.recv().await {
            Some(WorkerReply::Failed { reason }) => assert!(reason.contains("boom")),
            other => panic!("expected failed reply, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn pre_terminated_unit_does_nothing() {
        // The job would fail loudly if admission let it run after cancel;
        // terminate() drops the receiver, so nothing can come back either.
        let handle = WorkerHandle::spawn(1, WorkerRequest::Init { size: 8 });
        handle.terminate();
    }
}
