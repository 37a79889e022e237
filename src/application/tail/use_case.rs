//! Tail Use Case
//!
//! Polls a stack until it reaches a terminal status, reporting each new event
//! once and in chronological order:
//! 1. Describe the stack (a missing stack ends the session)
//! 2. Fetch the event feed and filter it through `EventTail`
//! 3. Stop if the status is terminal, otherwise sleep and repeat
//!
//! The loop has no retry or backoff. It ends early only through the running
//! flag or the optional deadline.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;

use crate::domain::ports::{Clock, ControlPlane, TailEvent, TailEventSink};
use crate::domain::services::EventTail;
use crate::domain::value_objects::StackStatus;
use crate::error::{StackError, StackResult};

use super::options::TailOptions;

/// How a completed tail session ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailOutcome {
    /// Terminal status as reported; rollbacks are not treated as failures here
    pub final_status: StackStatus,
    pub events_reported: usize,
    pub polls: usize,
}

pub struct TailUseCase<CP: ControlPlane, C: Clock> {
    control_plane: CP,
    clock: C,
    options: TailOptions,
}

impl<CP: ControlPlane, C: Clock> TailUseCase<CP, C> {
    pub fn new(control_plane: CP, clock: C, options: TailOptions) -> Self {
        Self {
            control_plane,
            clock,
            options,
        }
    }

    /// Block until `stack` reaches a terminal status.
    ///
    /// Clearing `running` ends the session with `TailCancelled` before the
    /// next sleep. A poll that fails after the flag was cleared is reported
    /// as the cancellation, since the interrupt also reaches the CLI child.
    pub fn run(
        &self,
        stack: &str,
        running: &AtomicBool,
        sink: &dyn TailEventSink,
    ) -> StackResult<TailOutcome> {
        let started = self.clock.now();
        let mut tail = EventTail::new(started, self.options.grace_window);
        let mut events_reported = 0;
        let mut polls = 0;

        sink.on_event(TailEvent::Started {
            stack: stack.to_string(),
            since: tail.cutoff(),
        });

        loop {
            polls += 1;
            let status = self
                .poll_status(stack)
                .map_err(|err| cancelled_if_stopped(err, stack, running))?;
            let feed = self
                .control_plane
                .describe_stack_events(stack)
                .map_err(|err| vanished_if_missing(err, stack))
                .map_err(|err| cancelled_if_stopped(err, stack, running))?;
            tracing::debug!(stack, %status, feed = feed.len(), poll = polls, "polled stack");

            for event in tail.observe(feed) {
                events_reported += 1;
                sink.on_event(TailEvent::Event(event));
            }

            if status.is_terminal() {
                sink.on_event(TailEvent::Finished {
                    stack: stack.to_string(),
                    status: status.clone(),
                });
                return Ok(TailOutcome {
                    final_status: status,
                    events_reported,
                    polls,
                });
            }

            if !running.load(Ordering::SeqCst) {
                return Err(StackError::TailCancelled {
                    name: stack.to_string(),
                });
            }

            if let Some(deadline) = self.options.deadline {
                let waited = (self.clock.now() - started).to_std().unwrap_or_default();
                if waited >= deadline {
                    return Err(StackError::DeadlineExceeded {
                        name: stack.to_string(),
                        waited,
                    });
                }
            }

            self.clock.sleep(self.options.poll_interval);
        }
    }

    fn poll_status(&self, stack: &str) -> StackResult<StackStatus> {
        self.control_plane
            .describe_stack(stack)
            .map(|description| description.status)
            .map_err(|err| vanished_if_missing(err, stack))
    }
}

fn cancelled_if_stopped(err: StackError, stack: &str, running: &AtomicBool) -> StackError {
    if running.load(Ordering::SeqCst) {
        return err;
    }
    tracing::debug!(stack, error = %err, "poll failed after interrupt");
    StackError::TailCancelled {
        name: stack.to_string(),
    }
}

fn vanished_if_missing(err: StackError, stack: &str) -> StackError {
    if err.is_not_found() {
        StackError::StackVanished {
            name: stack.to_string(),
        }
    } else {
        err
    }
}
