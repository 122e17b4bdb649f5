//! Browser task, timer, and dialog glue.
//!
//! TRADE-OFFS
//! ==========
//! These are best-effort browser-only behaviors; native builds no-op (and
//! `confirm` declines) so nothing can issue requests outside the browser.

use std::future::Future;

/// Run `task` on the browser event loop.
pub fn spawn_task<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "csr"))]
    drop(task);
}

/// Call `f` once after `delay_ms`. The timer is never cancelled.
pub fn schedule<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "csr")]
    gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, f);
    }
}

/// Blocking `window.confirm`; false when unavailable.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
