//! Cancelable events delivered to host callbacks.
//!
//! A widget fires an event, the host callback inspects the detail and may
//! call [`CancelableEvent::prevent_default`]; the widget then skips its
//! default follow-up (closing a menu, showing feedback, and so on).

/// Payload of an item click: which item was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemClickDetail {
    pub id: String,
}

impl ItemClickDetail {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// An event whose default follow-up can be suppressed by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelableEvent<D> {
    detail: D,
    default_prevented: bool,
}

impl<D> CancelableEvent<D> {
    pub fn new(detail: D) -> Self {
        Self {
            detail,
            default_prevented: false,
        }
    }

    pub fn detail(&self) -> &D {
        &self.detail
    }

    /// Skip the widget's default follow-up for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Host callback for a cancelable event.
pub type CancelableHandler<D> = Box<dyn FnMut(&mut CancelableEvent<D>) + Send>;

/// Invoke `handler` (if any) with `detail` and report whether the default
/// follow-up should run.
pub fn fire_cancelable_event<D>(handler: Option<&mut CancelableHandler<D>>, detail: D) -> bool {
    let Some(handler) = handler else {
        return true;
    };
    let mut event = CancelableEvent::new(detail);
    (*handler)(&mut event);
    !event.is_default_prevented()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn no_handler_runs_default() {
        assert!(fire_cancelable_event::<ItemClickDetail>(None, ItemClickDetail::new("copy")));
    }

    #[test]
    fn handler_sees_detail_and_can_cancel() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut handler: CancelableHandler<ItemClickDetail> =
            Box::new(move |event: &mut CancelableEvent<ItemClickDetail>| {
                sink.lock().unwrap().push(event.detail().id.clone());
                if event.detail().id == "upload" {
                    event.prevent_default();
                }
            });

        assert!(fire_cancelable_event(Some(&mut handler), ItemClickDetail::new("copy")));
        assert!(!fire_cancelable_event(Some(&mut handler), ItemClickDetail::new("upload")));
        assert_eq!(*seen.lock().unwrap(), vec!["copy", "upload"]);
    }
}
