//! Async delay usable from shared page code.

/// Suspend for `ms` milliseconds in the browser; resolves immediately
/// during SSR where there is no timer to wait on.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
