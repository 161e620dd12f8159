//! Delivery of applied change batches to registered listeners.
//!
//! # Overview
//!
//! A [`ChangeBroadcaster`] owns the listener registry for an
//! ontology and is the external mutation entry point:
//! [`ChangeBroadcaster::apply_changes`] applies the whole batch to
//! the store first, then hands the applied result list to every
//! listener through its registered [`DeliveryStrategy`]. No listener
//! ever observes a partially-applied batch.
//!
//! Two strategies are built in. [`ImmediateDelivery`] invokes the
//! listener synchronously on the calling thread, and a listener
//! error propagates to the caller of `apply_changes`.
//! [`QueuedDelivery`] is bound to a [`ContextQueue`] owned by a
//! target thread: on that thread it behaves like immediate delivery,
//! from any other thread it enqueues the batch and returns at once.
//! A listener error raised after the hop cannot reach the original
//! caller, whose call has long returned; it goes to the queue's
//! fault handler, or failing that the log. Batches enqueue in
//! application order, so each listener observes them in the order
//! they were applied.
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, ThreadId};

use indexmap::IndexMap;
use log::{error, trace};

use crate::change::{self, AppliedChange, Change};
use crate::error::StrixError;
use crate::ontology::store::AxiomStore;

/// An observer of applied change batches.
pub trait ChangeListener: Send + Sync {
    fn ontology_changed(
        &self,
        changes: &[AppliedChange],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// The policy governing where and when a listener is invoked.
pub trait DeliveryStrategy: Send {
    fn deliver(
        &self,
        listener: &Arc<dyn ChangeListener>,
        changes: &[AppliedChange],
    ) -> Result<(), StrixError>;
}

/// Invoke the listener synchronously on the calling thread.
#[derive(Debug, Default)]
pub struct ImmediateDelivery;

impl DeliveryStrategy for ImmediateDelivery {
    fn deliver(
        &self,
        listener: &Arc<dyn ChangeListener>,
        changes: &[AppliedChange],
    ) -> Result<(), StrixError> {
        listener
            .ontology_changed(changes)
            .map_err(StrixError::ListenerDelivery)
    }
}

struct Delivery {
    listener: Arc<dyn ChangeListener>,
    changes: Vec<AppliedChange>,
}

/// The delivery queue of a target thread.
///
/// Create the queue on the thread that should run the listeners and
/// call [`run_pending`](ContextQueue::run_pending) from that
/// thread's event loop; hand [`strategy`](ContextQueue::strategy)
/// results to [`ChangeBroadcaster::add_listener`].
pub struct ContextQueue {
    target: ThreadId,
    tx: Sender<Delivery>,
    rx: Receiver<Delivery>,
    fault_handler: Option<Box<dyn Fn(StrixError) + Send>>,
}

impl ContextQueue {
    /// Create a queue targeting the current thread.
    pub fn new() -> ContextQueue {
        let (tx, rx) = channel();
        ContextQueue {
            target: thread::current().id(),
            tx,
            rx,
            fault_handler: None,
        }
    }

    /// A strategy delivering onto this queue.
    pub fn strategy(&self) -> QueuedDelivery {
        QueuedDelivery {
            target: self.target,
            tx: self.tx.clone(),
        }
    }

    /// Route listener faults raised during
    /// [`run_pending`](ContextQueue::run_pending) to `f` instead of
    /// the log.
    pub fn set_fault_handler<F>(&mut self, f: F)
    where
        F: Fn(StrixError) + Send + 'static,
    {
        self.fault_handler = Some(Box::new(f));
    }

    /// Run every pending delivery, in arrival order, on the calling
    /// thread. Returns the number of deliveries run.
    ///
    /// The originating `apply_changes` call has already returned, so
    /// a listener error cannot be reported to it; it goes to the
    /// fault handler or the log.
    pub fn run_pending(&self) -> usize {
        let mut n = 0;
        while let Ok(d) = self.rx.try_recv() {
            n += 1;
            if let Err(e) = d.listener.ontology_changed(&d.changes) {
                let fault = StrixError::ListenerDelivery(e);
                match &self.fault_handler {
                    Some(handler) => handler(fault),
                    None => error!("unreported listener fault: {}", fault),
                }
            }
        }
        n
    }
}

impl Default for ContextQueue {
    fn default() -> Self {
        ContextQueue::new()
    }
}

/// Deliver on a target thread's [`ContextQueue`].
///
/// On the target thread this is immediate delivery; from any other
/// thread the batch is enqueued, fire-and-forget, and the mutator is
/// not blocked on listener completion.
pub struct QueuedDelivery {
    target: ThreadId,
    tx: Sender<Delivery>,
}

impl DeliveryStrategy for QueuedDelivery {
    fn deliver(
        &self,
        listener: &Arc<dyn ChangeListener>,
        changes: &[AppliedChange],
    ) -> Result<(), StrixError> {
        if thread::current().id() == self.target {
            return listener
                .ontology_changed(changes)
                .map_err(StrixError::ListenerDelivery);
        }

        // fire and forget; if the queue is gone the delivery is
        // dropped with it
        let _ = self.tx.send(Delivery {
            listener: listener.clone(),
            changes: changes.to_vec(),
        });
        Ok(())
    }
}

/// A handle to a registered listener.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ListenerId(u64);

struct Registration {
    listener: Arc<dyn ChangeListener>,
    strategy: Box<dyn DeliveryStrategy>,
}

/// The listener registry of an ontology.
///
/// An explicit object owned by whoever owns the ontology; there is
/// no process-wide registry. Listeners are delivered to in
/// registration order, though no ordering between listeners is
/// promised.
#[derive(Default)]
pub struct ChangeBroadcaster {
    listeners: IndexMap<ListenerId, Registration>,
    next_id: u64,
}

impl ChangeBroadcaster {
    pub fn new() -> ChangeBroadcaster {
        ChangeBroadcaster::default()
    }

    pub fn add_listener(
        &mut self,
        listener: Arc<dyn ChangeListener>,
        strategy: Box<dyn DeliveryStrategy>,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, Registration { listener, strategy });
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.shift_remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver an applied batch to every listener through its
    /// strategy.
    ///
    /// A synchronous listener error propagates to the caller and
    /// stops delivery to later listeners.
    pub fn broadcast(&self, changes: &[AppliedChange]) -> Result<(), StrixError> {
        for r in self.listeners.values() {
            r.strategy.deliver(&r.listener, changes)?;
        }
        Ok(())
    }

    /// Apply a change batch to the store, then broadcast it.
    ///
    /// The batch is fully applied before any listener is invoked.
    /// Listeners receive the complete result list, every submitted
    /// change annotated with its effect. If the batch aborts on a
    /// malformed change, the applied prefix is still broadcast, so
    /// listeners stay in step with the store, and is then returned
    /// inside the error.
    pub fn apply_changes(
        &self,
        o: &mut AxiomStore,
        changes: Vec<Change>,
    ) -> Result<Vec<AppliedChange>, StrixError> {
        match change::apply_changes(o, changes) {
            Ok(applied) => {
                trace!("batch applied; broadcasting to {} listeners", self.len());
                self.broadcast(&applied)?;
                Ok(applied)
            }
            Err(StrixError::ChangeApplication {
                failed_at,
                applied,
                source,
            }) => {
                if let Err(fault) = self.broadcast(&applied) {
                    error!("listener fault while broadcasting aborted batch: {}", fault);
                }
                Err(StrixError::ChangeApplication {
                    failed_at,
                    applied,
                    source,
                })
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collecting {
        batches: Mutex<Vec<Vec<AppliedChange>>>,
    }

    impl ChangeListener for Collecting {
        fn ontology_changed(
            &self,
            changes: &[AppliedChange],
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.batches.lock().unwrap().push(changes.to_vec());
            Ok(())
        }
    }

    struct Failing;

    impl ChangeListener for Failing {
        fn ontology_changed(
            &self,
            _: &[AppliedChange],
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err("listener failure".into())
        }
    }

    fn add_class_change(b: &Build, name: &str) -> Change {
        Change::AddAxiom(
            DeclareClass(b.class(format!("http://www.example.com#{}", name))).into(),
        )
    }

    #[test]
    fn test_immediate_delivery() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let mut broadcaster = ChangeBroadcaster::new();

        let listener = Arc::new(Collecting::default());
        broadcaster.add_listener(listener.clone(), Box::new(ImmediateDelivery));

        let applied = broadcaster
            .apply_changes(&mut o, vec![add_class_change(&b, "a")])
            .unwrap();

        let batches = listener.batches.lock().unwrap();
        assert_eq!(*batches, vec![applied]);
    }

    #[test]
    fn test_batches_delivered_in_application_order() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let mut broadcaster = ChangeBroadcaster::new();

        let listener = Arc::new(Collecting::default());
        broadcaster.add_listener(listener.clone(), Box::new(ImmediateDelivery));

        let first = broadcaster
            .apply_changes(&mut o, vec![add_class_change(&b, "a")])
            .unwrap();
        let second = broadcaster
            .apply_changes(
                &mut o,
                vec![add_class_change(&b, "a"), add_class_change(&b, "b")],
            )
            .unwrap();

        // the second batch reports the duplicate as ineffective, but
        // the listener still sees the complete submitted batch
        assert_eq!(
            second.iter().map(|ac| ac.applied).collect::<Vec<_>>(),
            vec![false, true]
        );

        let batches = listener.batches.lock().unwrap();
        assert_eq!(*batches, vec![first, second]);
    }

    #[test]
    fn test_immediate_listener_error_reaches_caller() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let mut broadcaster = ChangeBroadcaster::new();
        broadcaster.add_listener(Arc::new(Failing), Box::new(ImmediateDelivery));

        let err = broadcaster
            .apply_changes(&mut o, vec![add_class_change(&b, "a")])
            .unwrap_err();
        assert!(matches!(err, StrixError::ListenerDelivery(_)));

        // the mutation itself is committed; only delivery failed
        assert_eq!(o.axiom_count(), 1);
    }

    #[test]
    fn test_removed_listener_is_not_notified() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let mut broadcaster = ChangeBroadcaster::new();

        let listener = Arc::new(Collecting::default());
        let id = broadcaster.add_listener(listener.clone(), Box::new(ImmediateDelivery));

        assert!(broadcaster.remove_listener(id));
        assert!(!broadcaster.remove_listener(id));
        assert!(broadcaster.is_empty());

        broadcaster
            .apply_changes(&mut o, vec![add_class_change(&b, "a")])
            .unwrap();
        assert!(listener.batches.lock().unwrap().is_empty());
    }

    #[test]
    fn test_queued_delivery_from_another_thread() {
        let b = Build::new();
        let queue = ContextQueue::new();

        let listener = Arc::new(Collecting::default());
        let mut broadcaster = ChangeBroadcaster::new();
        broadcaster.add_listener(listener.clone(), Box::new(queue.strategy()));

        let change = add_class_change(&b, "a");
        let expected = {
            let change = change.clone();
            thread::spawn(move || {
                let mut o = AxiomStore::new();
                // returns without waiting for the listener
                broadcaster.apply_changes(&mut o, vec![change]).unwrap()
            })
            .join()
            .unwrap()
        };

        // nothing delivered until the target context runs its work
        assert!(listener.batches.lock().unwrap().is_empty());

        assert_eq!(queue.run_pending(), 1);
        assert_eq!(*listener.batches.lock().unwrap(), vec![expected]);

        // delivered exactly once
        assert_eq!(queue.run_pending(), 0);
        assert_eq!(listener.batches.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_queued_delivery_on_target_thread_is_immediate() {
        let b = Build::new();
        let mut o = AxiomStore::new();
        let queue = ContextQueue::new();

        let listener = Arc::new(Collecting::default());
        let mut broadcaster = ChangeBroadcaster::new();
        broadcaster.add_listener(listener.clone(), Box::new(queue.strategy()));

        broadcaster
            .apply_changes(&mut o, vec![add_class_change(&b, "a")])
            .unwrap();

        assert_eq!(listener.batches.lock().unwrap().len(), 1);
        assert_eq!(queue.run_pending(), 0);
    }

    #[test]
    fn test_queued_fault_goes_to_fault_handler() {
        let b = Build::new();
        let mut queue = ContextQueue::new();

        let faults = Arc::new(Mutex::new(Vec::new()));
        {
            let faults = faults.clone();
            queue.set_fault_handler(move |e| faults.lock().unwrap().push(e.to_string()));
        }

        let mut broadcaster = ChangeBroadcaster::new();
        broadcaster.add_listener(Arc::new(Failing), Box::new(queue.strategy()));

        let change = add_class_change(&b, "a");
        thread::spawn(move || {
            let mut o = AxiomStore::new();
            // the far caller sees success; the fault is out-of-band
            broadcaster.apply_changes(&mut o, vec![change]).unwrap();
        })
        .join()
        .unwrap();

        assert_eq!(queue.run_pending(), 1);

        let faults = faults.lock().unwrap();
        assert_eq!(faults.len(), 1);
        assert!(faults[0].contains("listener failure"));
    }
}
