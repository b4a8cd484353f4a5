//! Controller runtime — single-writer command loop and periodic automation.
//!
//! The controller is owned by exactly one task. Everything else, the
//! presentation side and the background timer alike, talks to it through
//! [`Command`] messages on a bounded queue, consumed serially. The timer
//! never mutates devices directly; it posts a [`Command::Tick`] like any
//! other caller, which keeps the device list with a single writer.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;

use homesim_domain::automation::AutomationStatus;
use homesim_domain::device::MotionState;
use homesim_domain::error::HomeSimError;
use homesim_domain::snapshot::ControllerSnapshot;

use crate::controller::Controller;
use crate::ports::{EventPublisher, LogSink, ValueSource};

/// Bound on queued commands; senders back-pressure beyond this.
const COMMAND_QUEUE_CAPACITY: usize = 32;

/// Reply channel carried by every command.
type Reply<T> = oneshot::Sender<Result<T, HomeSimError>>;

/// Requests accepted by the controller task.
///
/// Device indices refer to discovery order; senders guarantee validity,
/// matching the controller's index contract.
#[derive(Debug)]
pub enum Command {
    ToggleAutomation { reply: Reply<AutomationStatus> },
    ToggleDevice { index: usize, reply: Reply<()> },
    SetBrightness { index: usize, value: i32, reply: Reply<()> },
    SetTemperature { index: usize, value: f64, reply: Reply<()> },
    SetMotion { index: usize, motion: MotionState, reply: Reply<()> },
    DiscoverDevices { reply: Reply<()> },
    ApplyAutomationRule { reply: Reply<()> },
    RandomizeDeviceStates { reply: Reply<()> },
    LogDevice { index: usize, reply: Reply<()> },
    LogAllDevices { reply: Reply<()> },
    /// One background timer cycle: randomize states, then apply the rule.
    Tick { reply: Reply<()> },
}

/// Cheaply cloneable front door to the controller task.
///
/// This is the contract presentation adapters program against: request
/// methods mirroring the controller operations, [`snapshot`](Self::snapshot)
/// for current state, and [`watch`](Self::watch) for refresh notifications
/// after every processed command.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<ControllerSnapshot>,
}

impl ControllerHandle {
    async fn request<T>(
        &self,
        command: impl FnOnce(Reply<T>) -> Command,
    ) -> Result<T, HomeSimError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(command(reply))
            .await
            .map_err(|_| HomeSimError::ControllerClosed)?;
        response.await.map_err(|_| HomeSimError::ControllerClosed)?
    }

    /// Flip the automation flag, returning the new status.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::ControllerClosed`] when the controller task
    /// has stopped.
    pub async fn toggle_automation(&self) -> Result<AutomationStatus, HomeSimError> {
        self.request(|reply| Command::ToggleAutomation { reply }).await
    }

    /// Flip the power state of the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::ControllerClosed`] when the controller task
    /// has stopped.
    pub async fn toggle_device(&self, index: usize) -> Result<(), HomeSimError> {
        self.request(|reply| Command::ToggleDevice { index, reply }).await
    }

    /// Set the brightness of the light at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when logging the change fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn set_brightness(&self, index: usize, value: i32) -> Result<(), HomeSimError> {
        self.request(|reply| Command::SetBrightness { index, value, reply })
            .await
    }

    /// Set the temperature of the thermostat at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when logging the change fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn set_temperature(&self, index: usize, value: f64) -> Result<(), HomeSimError> {
        self.request(|reply| Command::SetTemperature { index, value, reply })
            .await
    }

    /// Record a motion reading on the camera at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when logging the change fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn set_motion(&self, index: usize, motion: MotionState) -> Result<(), HomeSimError> {
        self.request(|reply| Command::SetMotion { index, motion, reply })
            .await
    }

    /// Discover the fixed device set.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::ControllerClosed`] when the controller task
    /// has stopped.
    pub async fn discover_devices(&self) -> Result<(), HomeSimError> {
        self.request(|reply| Command::DiscoverDevices { reply }).await
    }

    /// Evaluate the motion rule once.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when logging fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn apply_automation_rule(&self) -> Result<(), HomeSimError> {
        self.request(|reply| Command::ApplyAutomationRule { reply }).await
    }

    /// Randomize all device states (no-op while automation is off).
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when logging fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn randomize_device_states(&self) -> Result<(), HomeSimError> {
        self.request(|reply| Command::RandomizeDeviceStates { reply }).await
    }

    /// Log the device at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when the append fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn log_device(&self, index: usize) -> Result<(), HomeSimError> {
        self.request(|reply| Command::LogDevice { index, reply }).await
    }

    /// Log every device in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when an append fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn log_all_devices(&self) -> Result<(), HomeSimError> {
        self.request(|reply| Command::LogAllDevices { reply }).await
    }

    /// Run one timer cycle: randomize states, then apply the rule.
    ///
    /// # Errors
    ///
    /// Returns [`HomeSimError::LogSink`] when logging fails, or
    /// [`HomeSimError::ControllerClosed`] when the controller task has
    /// stopped.
    pub async fn tick(&self) -> Result<(), HomeSimError> {
        self.request(|reply| Command::Tick { reply }).await
    }

    /// The controller state as of the last processed command.
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Watch receiver that changes after every processed command.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<ControllerSnapshot> {
        self.snapshots.clone()
    }
}

/// Spawn the task that owns the controller.
///
/// Returns the handle other components talk through and the task's join
/// handle. The task ends when every handle clone has been dropped.
pub fn spawn<S, V, P>(controller: Controller<S, V, P>) -> (ControllerHandle, JoinHandle<()>)
where
    S: LogSink + Send + Sync + 'static,
    V: ValueSource + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    let (commands, queue) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
    let (publisher, snapshots) = watch::channel(controller.snapshot());
    let task = tokio::spawn(run(controller, queue, publisher));
    (ControllerHandle { commands, snapshots }, task)
}

async fn run<S, V, P>(
    mut controller: Controller<S, V, P>,
    mut queue: mpsc::Receiver<Command>,
    snapshots: watch::Sender<ControllerSnapshot>,
) where
    S: LogSink,
    V: ValueSource,
    P: EventPublisher,
{
    while let Some(command) = queue.recv().await {
        let (reply, result) = match command {
            Command::ToggleAutomation { reply } => {
                let status = controller.toggle_automation();
                let _ = snapshots.send(controller.snapshot());
                let _ = reply.send(Ok(status));
                continue;
            }
            Command::ToggleDevice { index, reply } => {
                controller.toggle_device(index);
                (reply, Ok(()))
            }
            Command::SetBrightness { index, value, reply } => {
                (reply, controller.set_brightness(index, value).await)
            }
            Command::SetTemperature { index, value, reply } => {
                (reply, controller.set_temperature(index, value).await)
            }
            Command::SetMotion { index, motion, reply } => {
                (reply, controller.set_motion(index, motion).await)
            }
            Command::DiscoverDevices { reply } => {
                controller.discover_devices();
                (reply, Ok(()))
            }
            Command::ApplyAutomationRule { reply } => {
                (reply, controller.apply_automation_rule().await)
            }
            Command::RandomizeDeviceStates { reply } => {
                (reply, controller.randomize_device_states().await)
            }
            Command::LogDevice { index, reply } => (reply, controller.log_device(index).await),
            Command::LogAllDevices { reply } => (reply, controller.log_all_devices().await),
            Command::Tick { reply } => {
                let result = match controller.randomize_device_states().await {
                    Ok(()) => controller.apply_automation_rule().await,
                    Err(err) => Err(err),
                };
                (reply, result)
            }
        };
        // Publish before replying so a caller that awaited its request
        // always observes the post-command snapshot.
        let _ = snapshots.send(controller.snapshot());
        let _ = reply.send(result);
    }
    tracing::debug!("command queue closed, controller task ending");
}

/// Timer cadence for the background automation loop.
#[derive(Debug, Clone, Copy)]
pub struct LoopIntervals {
    /// Delay between cycles while automation is on.
    pub active: Duration,
    /// Poll delay while automation is off.
    pub idle: Duration,
}

impl Default for LoopIntervals {
    fn default() -> Self {
        Self {
            active: Duration::from_secs(4),
            idle: Duration::from_secs(1),
        }
    }
}

/// Spawn the periodic automation loop.
///
/// While automation is on, each cycle posts one [`Command::Tick`] and sleeps
/// the active interval; while off, the loop polls the idle interval waiting
/// for the flag to flip. The loop stops on its own only when a tick fails
/// (fatal sink I/O) or the controller task is gone; otherwise it runs until
/// aborted at shutdown.
pub fn spawn_automation_loop(
    handle: ControllerHandle,
    intervals: LoopIntervals,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            if handle.snapshot().automation.is_on() {
                if let Err(err) = handle.tick().await {
                    tracing::error!(error = %err, "automation tick failed, stopping loop");
                    break;
                }
                tokio::time::sleep(intervals.active).await;
            } else {
                tokio::time::sleep(intervals.idle).await;
            }
        }
    })
}
