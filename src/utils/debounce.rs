use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Calls `callback` once the window has stopped resizing for `delay_ms`.
///
/// Returns `None` outside a browser window. Dropping the listener removes it
/// and cancels any pending call.
///
/// ```rust,ignore
/// use_effect_with(data, move |data| {
///     let listener = debounced_resize_listener(move || redraw(), Config::RESIZE_DEBOUNCE_MS);
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(callback: F, delay_ms: u32) -> Option<DebouncedListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    let listener = {
        let pending = pending.clone();
        EventListener::new(&window, "resize", move |_| {
            // Replacing the handle drops, and so cancels, the previous timeout
            let cb = callback.clone();
            *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
        })
    };

    Some(DebouncedListener {
        _listener: listener,
        pending,
    })
}

/// A resize listener together with its pending timeout.
pub struct DebouncedListener {
    _listener: EventListener,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Drop for DebouncedListener {
    fn drop(&mut self) {
        if let Some(timeout) = self.pending.borrow_mut().take() {
            drop(timeout);
        }
    }
}
