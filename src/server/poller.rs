//! Readiness sidecar for the facility descriptor.
//!
//! Blocks in `poll(2)` and forwards a token whenever the descriptor has
//! bytes to read, so the watcher is awakened instead of ever blocking on
//! the descriptor itself.
use crossbeam::channel::{Receiver, Sender, TryRecvError};
use std::{os::fd::RawFd, time::Duration};

/// How long a poll waits before re-checking whether the watcher is gone.
const WAKE_INTERVAL: Duration = Duration::from_millis(500);

/// A "descriptor is readable" token.
#[derive(Debug)]
pub(crate) struct Readable;

pub(crate) struct Poller {
    fd: RawFd,

    /// Forwards readiness to the watcher.
    readable_tx: Sender<Readable>,

    /// Disconnects when the watcher tears down.
    shutdown_rx: Receiver<()>,
}

impl Poller {
    pub fn new(fd: RawFd, readable_tx: Sender<Readable>, shutdown_rx: Receiver<()>) -> Self {
        Self {
            fd,
            readable_tx,
            shutdown_rx,
        }
    }

    pub fn run(&mut self) {
        loop {
            match self.shutdown_rx.try_recv() {
                Err(TryRecvError::Disconnected) => break,
                Ok(()) | Err(TryRecvError::Empty) => {}
            }

            let mut poll_fd = libc::pollfd {
                fd: self.fd,
                events: libc::POLLIN,
                revents: 0,
            };

            let rc =
                unsafe { libc::poll(&mut poll_fd, 1, WAKE_INTERVAL.as_millis() as libc::c_int) };
            if rc < 0 {
                let err = std::io::Error::last_os_error();
                if err.raw_os_error() == Some(libc::EINTR) {
                    continue;
                }

                tracing::error!("poll failed: {err}");
                break;
            }

            if rc == 0 {
                continue;
            }

            if poll_fd.revents & (libc::POLLERR | libc::POLLHUP | libc::POLLNVAL) != 0 {
                tracing::debug!("descriptor invalidated");
                break;
            }

            if poll_fd.revents & libc::POLLIN != 0 {
                // The channel holds one token; sending blocks until the
                // watcher takes it, so a slow drain never queues wakeups.
                if self.readable_tx.send(Readable).is_err() {
                    break;
                }
            }
        }

        tracing::debug!("shutting down");
    }
}
