#[cfg(feature = "tracing")]
macro_rules! lwtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "listwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lwtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! lwdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "listwindow", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! lwdebug {
    ($($tt:tt)*) => {};
}
