use crate::error::SignalError;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::any::{Any, TypeId, type_name};
use std::fmt;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::{debug, trace};

/// Marker trait for values that can travel through the [`SignalHub`].
///
/// Any `Clone + PartialEq + Send + Sync + 'static` type qualifies. `PartialEq`
/// lets publishers skip notifications when the value did not change.
pub trait Signal: Any + Clone + PartialEq + Send + Sync + 'static {}
impl<T: Any + Clone + PartialEq + Send + Sync + 'static> Signal for T {}

struct Slot {
    owner: &'static str,
    // Holds a `Weak<watch::Sender<T>>`; the publisher keeps the only strong reference.
    sender: Box<dyn Any + Send + Sync>,
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot").field("owner", &self.owner).finish_non_exhaustive()
    }
}

impl Slot {
    fn sender<T: Signal>(&self) -> Result<Option<Arc<watch::Sender<T>>>, SignalError> {
        self.sender
            .downcast_ref::<Weak<watch::Sender<T>>>()
            .map(Weak::upgrade)
            .ok_or_else(|| SignalError::TypeMismatch {
                message: type_name::<T>().into(),
                context: Some("Unexpected sender type in slot".into()),
            })
    }
}

/// Registry of latest-value signals indexed by the [`TypeId`] of the value.
///
/// Each signal type has exactly one live [`Publisher`]. Everybody else gets a
/// read-only `watch::Receiver` through [`SignalHub::subscribe`], so concurrent
/// writers to the same signal cannot exist.
#[derive(Debug, Clone, Default)]
pub struct SignalHub {
    slots: Arc<RwLock<FxHashMap<TypeId, Slot>>>,
}

impl SignalHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `owner` as the sole publisher of `T`, seeded with `initial`.
    ///
    /// A slot whose previous publisher was dropped can be claimed again.
    ///
    /// # Errors
    /// Returns [`SignalError::AlreadyOwned`] while another publisher of `T` is alive.
    pub fn register<T: Signal>(
        &self,
        owner: &'static str,
        initial: T,
    ) -> Result<Publisher<T>, SignalError> {
        let id = TypeId::of::<T>();
        let mut slots = self.slots.write();

        if let Some(slot) = slots.get(&id)
            && slot.sender::<T>()?.is_some()
        {
            return Err(SignalError::AlreadyOwned {
                message: format!("{} is published by `{}`", type_name::<T>(), slot.owner).into(),
                context: Some(owner.into()),
            });
        }

        let (tx, _) = watch::channel(initial);
        let sender = Arc::new(tx);
        slots.insert(id, Slot { owner, sender: Box::new(Arc::downgrade(&sender)) });
        drop(slots);

        debug!(signal = type_name::<T>(), owner, "Signal registered");
        Ok(Publisher { owner, sender })
    }

    /// Subscribes to `T`. The receiver starts at the current value.
    ///
    /// # Errors
    /// Returns [`SignalError::NotRegistered`] if no live publisher owns `T`.
    pub fn subscribe<T: Signal>(&self) -> Result<watch::Receiver<T>, SignalError> {
        let sender = self.live_sender::<T>()?;
        trace!(signal = type_name::<T>(), "Signal subscribed");
        Ok(sender.subscribe())
    }

    /// Name of the live publisher of `T`, if any.
    #[must_use]
    pub fn owner_of<T: Signal>(&self) -> Option<&'static str> {
        let slots = self.slots.read();
        let slot = slots.get(&TypeId::of::<T>())?;
        matches!(slot.sender::<T>(), Ok(Some(_))).then_some(slot.owner)
    }

    fn live_sender<T: Signal>(&self) -> Result<Arc<watch::Sender<T>>, SignalError> {
        let slots = self.slots.read();
        let sender = match slots.get(&TypeId::of::<T>()) {
            Some(slot) => slot.sender::<T>()?,
            None => None,
        };
        drop(slots);

        sender.ok_or_else(|| SignalError::NotRegistered {
            message: type_name::<T>().into(),
            context: None,
        })
    }
}

/// Write side of a signal. Dropping it closes every subscribed receiver.
pub struct Publisher<T: Signal> {
    owner: &'static str,
    sender: Arc<watch::Sender<T>>,
}

impl<T: Signal + fmt::Debug> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("owner", &self.owner)
            .field("value", &*self.sender.borrow())
            .finish()
    }
}

impl<T: Signal> Publisher<T> {
    /// Stores `value` and wakes subscribers if it differs from the current one.
    ///
    /// Returns `true` when the value changed.
    pub fn publish(&self, value: T) -> bool {
        let changed = self.sender.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        });

        if changed {
            trace!(signal = type_name::<T>(), owner = self.owner, "Signal published");
        }
        changed
    }

    /// Current value of the signal.
    #[must_use]
    pub fn current(&self) -> T {
        self.sender.borrow().clone()
    }

    /// Number of live receivers.
    #[must_use]
    pub fn subscribers(&self) -> usize {
        self.sender.receiver_count()
    }

    #[must_use]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }
}
