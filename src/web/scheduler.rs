//! `setTimeout`-backed [`Scheduler`].

use crate::domain::error::{BlissError, Result};
use crate::infrastructure::timer::{Scheduler, TimerId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

struct Armed {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Browser timers reporting elapsed [`TimerId`]s to a sink.
///
/// Callbacks stay owned by the scheduler until their timer is cancelled or has
/// fired; fired entries are released on the next `schedule`, never from inside
/// their own callback.
pub struct BrowserScheduler {
    window: Window,
    next_id: u64,
    armed: HashMap<TimerId, Armed>,
    fired: Rc<RefCell<Vec<TimerId>>>,
    sink: Rc<dyn Fn(TimerId)>,
}

impl BrowserScheduler {
    pub fn new(window: Window, sink: impl Fn(TimerId) + 'static) -> Self {
        Self {
            window,
            next_id: 0,
            armed: HashMap::new(),
            fired: Rc::new(RefCell::new(vec![])),
            sink: Rc::new(sink),
        }
    }

    fn release_fired(&mut self) {
        let fired = std::mem::take(&mut *self.fired.borrow_mut());
        for id in fired {
            self.armed.remove(&id);
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay: Duration) -> Result<TimerId> {
        self.release_fired();

        let millis = i32::try_from(delay.as_millis())
            .map_err(|_| BlissError::Timer(format!("delay out of range: {delay:?}")))?;
        self.next_id += 1;
        let id = TimerId(self.next_id);

        let sink = Rc::clone(&self.sink);
        let fired = Rc::clone(&self.fired);
        let callback = Closure::<dyn FnMut()>::new(move || {
            sink(id);
            fired.borrow_mut().push(id);
        });
        let handle = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), millis)?;

        self.armed.insert(
            id,
            Armed {
                handle,
                _callback: callback,
            },
        );
        tracing::trace!(timer = id.0, millis, "timer armed");
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(armed) = self.armed.remove(&id) {
            self.window.clear_timeout_with_handle(armed.handle);
            tracing::trace!(timer = id.0, "timer cancelled");
        }
    }
}

impl std::fmt::Debug for BrowserScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrowserScheduler")
            .field("next_id", &self.next_id)
            .field("armed", &self.armed.len())
            .finish_non_exhaustive()
    }
}
